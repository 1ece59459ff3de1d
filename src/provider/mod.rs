use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::GenerateError;

pub mod anthropic;

/// One single-turn completion: a user message in, the first text block out.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Whether a credential is available. The proxy refuses to call out
    /// otherwise.
    fn is_configured(&self) -> bool {
        true
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<String, GenerateError>;
}

pub type DynProvider = Arc<dyn Provider>;

pub fn make_provider(cfg: &Config) -> anyhow::Result<DynProvider> {
    let provider = anthropic::Anthropic::new(cfg.api_key.clone(), cfg.api_base.clone(), cfg.api_version.clone())?;
    Ok(Arc::new(provider))
}
