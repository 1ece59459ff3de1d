use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionRequest, Provider};
use crate::errors::GenerateError;

/// Messages API client. Holds one pooled `reqwest::Client`; the timeout is
/// applied per request since generation and enrichment use different bounds.
pub struct Anthropic {
    client: Client,
    api_key: Option<String>,
    api_base: String,
    api_version: String,
}

#[derive(Serialize)]
struct MsgRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Msg<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MsgResponse {
    #[serde(default)]
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl Anthropic {
    pub fn new(api_key: Option<String>, api_base: String, api_version: String) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;
        let api_key = api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        Ok(Self { client, api_key, api_base, api_version })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl Provider for Anthropic {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<String, GenerateError> {
        let api_key = self.api_key.as_deref().ok_or(GenerateError::MissingCredential)?;
        let url = self.endpoint();
        let body = MsgRequest {
            model: &req.model,
            max_tokens: req.max_tokens,
            messages: vec![Msg { role: "user", content: &req.prompt }],
            temperature: req.temperature,
        };

        debug!(%url, model = %req.model, max_tokens = req.max_tokens, timeout = ?req.timeout, "anthropic request");

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .timeout(req.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e, req))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| transport_error(e, req))?;
        debug!(status = status.as_u16(), bytes = text.len(), "anthropic response");

        parse_messages_response(status, &text)
    }
}

fn transport_error(e: reqwest::Error, req: &CompletionRequest) -> GenerateError {
    if e.is_timeout() {
        GenerateError::UpstreamTimeout(req.timeout)
    } else {
        GenerateError::Connection(e.to_string())
    }
}

/// Maps a Messages API status and body to the first text block or a typed
/// error. 504 is kept distinct since it is retryable.
pub fn parse_messages_response(status: StatusCode, body: &str) -> Result<String, GenerateError> {
    if status == StatusCode::GATEWAY_TIMEOUT {
        return Err(GenerateError::UpstreamGatewayTimeout);
    }
    if status != StatusCode::OK {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|env| env.error)
            .map(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "API error".to_string());
        return Err(GenerateError::UpstreamError { status: status.as_u16(), message });
    }

    let parsed: MsgResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::ParseFailure(e.to_string()))?;

    parsed
        .content
        .into_iter()
        .find(|b| b.r#type == "text" || !b.text.is_empty())
        .map(|b| b.text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GenerateError::InvalidResponseFormat("no text content block".into()))
}
