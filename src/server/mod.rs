use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::catalog::Catalogs;
use crate::compose::{ComposeOptions, PromptComposer, PromptKind};
use crate::proxy::GenerationProxy;
use crate::wire::HealthResponse;

/// Shared state passed to all request handlers
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<GenerationProxy>,
    pub catalogs: &'static Catalogs,
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
struct ComposeQuery {
    #[serde(default)]
    kind: PromptKind,
    seed: Option<u64>,
    custom: Option<String>,
    metrics: Option<bool>,
}

/// Generation proxy, prompt composer, job ideas and health, behind permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/generate", post(handle_generate))
        .route("/api/compose", get(handle_compose))
        .route("/api/job-ideas", get(handle_job_ideas))
        .route("/health", get(handle_health))
        .with_state(state)
        .layer(cors)
}

/// Serves until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, mode = state.proxy.settings().mode.as_str(), "listening");
    if !state.proxy.is_configured() {
        warn!("CLAUDE_API_KEY not configured; generation requests will fail until it is set");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown requested");
            }
        })
        .await?;
    Ok(())
}

/// Takes the raw body so malformed JSON gets the same `{success:false}`
/// envelope as every other failure.
async fn handle_generate(State(state): State<AppState>, body: Bytes) -> Response {
    let result = state.proxy.handle_body(&body).await;
    let status = StatusCode::from_u16(result.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(result.into_response())).into_response()
}

async fn handle_compose(State(state): State<AppState>, Query(q): Query<ComposeQuery>) -> Response {
    let mut rng = match q.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let options = ComposeOptions {
        include_metrics: q.metrics.unwrap_or(true),
        ..ComposeOptions::default()
    };
    let composer = PromptComposer::new(state.catalogs);
    let composition = composer.compose_kind(&mut rng, q.kind, &options, q.custom.as_deref());
    Json(composition).into_response()
}

async fn handle_job_ideas(State(state): State<AppState>) -> Response {
    Json(state.proxy.job_ideas().await).into_response()
}

async fn handle_health(State(state): State<AppState>) -> Response {
    let health = HealthResponse {
        status: "ok".into(),
        port: state.port,
        api_key: if state.proxy.is_configured() { "configured" } else { "missing" }.into(),
        mode: state.proxy.settings().mode.as_str().into(),
        timestamp: Utc::now(),
    };
    Json(health).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GenerationMode};
    use crate::errors::GenerateError;
    use crate::provider::{CompletionRequest, Provider};
    use crate::proxy::ProxySettings;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// Answers every call with the same text.
    struct FixedProvider {
        configured: bool,
        reply: Result<String, GenerateError>,
    }

    #[async_trait]
    impl Provider for FixedProvider {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, _req: &CompletionRequest) -> Result<String, GenerateError> {
            self.reply.clone()
        }
    }

    fn app(configured: bool, reply: Result<String, GenerateError>) -> Router {
        let settings = ProxySettings { mode: GenerationMode::Fast, ..ProxySettings::from_config(&Config::default()) };
        let proxy = GenerationProxy::new(Arc::new(FixedProvider { configured, reply }), Catalogs::builtin(), settings);
        router(AppState { proxy: Arc::new(proxy), catalogs: Catalogs::builtin(), port: 3000 })
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.expect("router is infallible");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_generate(body: &str) -> Request<Body> {
        Request::post("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn generate_success() {
        let app = app(true, Ok("```html\n<!DOCTYPE html><html></html>\n```".into()));
        let (status, body) = send(app, post_generate(r#"{"prompt":"a ledger"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "html": "<!DOCTYPE html><html></html>"}));
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let (status, body) = send(app(true, Ok(String::new())), post_generate("{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Invalid request"));
        assert!(body.get("debug").is_none(), "{body}");
    }

    #[tokio::test]
    async fn upstream_status_is_propagated() {
        let reply = Err(GenerateError::UpstreamError { status: 401, message: "invalid x-api-key".into() });
        let (status, body) = send(app(true, reply), post_generate(r#"{"prompt":"x"}"#)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], json!("Service temporarily unavailable. Please try again."));
    }

    #[tokio::test]
    async fn missing_key_is_500_and_health_reports_it() {
        let (status, body) = send(app(false, Ok(String::new())), post_generate(r#"{"prompt":"x"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));

        let req = Request::get("/health").body(Body::empty()).expect("request");
        let (status, body) = send(app(false, Ok(String::new())), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["apiKey"], json!("missing"));
        assert_eq!(body["mode"], json!("fast"));
        assert_eq!(body["port"], json!(3000));
    }

    #[tokio::test]
    async fn compose_is_reproducible_with_seed() {
        let req = || Request::get("/api/compose?seed=42&metrics=false").body(Body::empty()).expect("request");
        let (status, first) = send(app(true, Ok(String::new())), req()).await;
        let (_, second) = send(app(true, Ok(String::new())), req()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(first["metadata"]["metrics"], json!([]));
        assert!(first["text"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn compose_business_with_custom_text() {
        let req = Request::get("/api/compose?kind=business&custom=tide%20table%20planner&seed=1")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(app(true, Ok(String::new())), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["isCustom"], json!(true));
        assert!(body["metadata"]["businessType"].as_str().is_some_and(|t| t.starts_with("tide table planner")));
    }

    #[tokio::test]
    async fn job_ideas_fall_back_when_unconfigured() {
        let req = Request::get("/api/job-ideas").body(Body::empty()).expect("request");
        let (status, body) = send(app(false, Ok(String::new())), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], json!("cached"));
        assert!(body["jobs"].as_array().is_some_and(|j| (5..=10).contains(&j.len())));
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/generate")
            .header(header::ORIGIN, "http://localhost:8080")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .expect("request");
        let resp = app(true, Ok(String::new())).oneshot(req).await.expect("router is infallible");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
