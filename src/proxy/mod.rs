use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{Catalogs, LayoutConstraint};
use crate::compose::select_random_subset;
use crate::config::{Config, GenerationMode};
use crate::errors::GenerateError;
use crate::extract;
use crate::prompt;
use crate::provider::{CompletionRequest, DynProvider};
use crate::wire::{Enrichment, GenerateRequest, GenerateResponse, JobIdeasResponse, JobSource};

/// First attempt plus one retry with a reduced token budget.
pub const MAX_ATTEMPTS: u32 = 2;
const DEBUG_EXCERPT_CHARS: usize = 500;
const CACHED_JOBS_MIN: usize = 5;
const CACHED_JOBS_MAX: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ProxySettings {
    pub model: String,
    pub mode: GenerationMode,
    pub diversify_layout: bool,
    pub default_temperature: f64,
    pub enrichment_max_tokens: u32,
    pub enrichment_temperature: f64,
    pub enrichment_timeout: Duration,
    pub job_ideas_count: usize,
}

impl ProxySettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            model: cfg.model.clone(),
            mode: cfg.mode,
            diversify_layout: cfg.diversify_layout,
            default_temperature: cfg.default_temperature,
            enrichment_max_tokens: cfg.enrichment_max_tokens,
            enrichment_temperature: cfg.enrichment_temperature,
            enrichment_timeout: cfg.enrichment_timeout(),
            job_ideas_count: cfg.job_ideas_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Success {
        html: String,
        description: Option<String>,
        tech_stack: Option<Vec<String>>,
    },
    Failure {
        message: String,
        debug: Option<String>,
        status: u16,
    },
}

impl GenerationResult {
    pub fn from_error(err: &GenerateError) -> Self {
        GenerationResult::Failure {
            message: err.user_message(),
            debug: err.debug_excerpt(),
            status: err.status_code(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            GenerationResult::Success { .. } => 200,
            GenerationResult::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }

    pub fn into_response(self) -> GenerateResponse {
        match self {
            GenerationResult::Success { html, description, tech_stack } => GenerateResponse {
                success: true,
                html: Some(html),
                description,
                tech_stack,
                error: None,
                debug: None,
            },
            GenerationResult::Failure { message, debug, .. } => GenerateResponse::failure(message, debug),
        }
    }
}

/// Temperature actually sent upstream. Absent, zero and non-finite values
/// fall back to `default`; the rest are clamped to `[0, 1]`.
pub fn effective_temperature(requested: Option<f64>, default: f64) -> f64 {
    match requested {
        Some(t) if t.is_finite() && t != 0.0 => t.clamp(0.0, 1.0),
        _ => default,
    }
}

/// Pipeline behind `/api/generate` and `/api/job-ideas`: build instruction,
/// call upstream with bounded retry, extract HTML, optionally enrich. Every
/// failure ends up as a `GenerationResult`.
pub struct GenerationProxy {
    provider: DynProvider,
    catalogs: &'static Catalogs,
    settings: ProxySettings,
    /// Source for layout and cached job-idea draws. Only locked in sync code.
    rng: Mutex<StdRng>,
}

impl GenerationProxy {
    pub fn new(provider: DynProvider, catalogs: &'static Catalogs, settings: ProxySettings) -> Self {
        Self::with_rng(provider, catalogs, settings, StdRng::from_entropy())
    }

    pub fn with_rng(provider: DynProvider, catalogs: &'static Catalogs, settings: ProxySettings, rng: StdRng) -> Self {
        Self { provider, catalogs, settings, rng: Mutex::new(rng) }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn settings(&self) -> &ProxySettings {
        &self.settings
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Entry point for raw request bodies.
    pub async fn handle_body(&self, body: &[u8]) -> GenerationResult {
        match GenerateRequest::parse(body) {
            Ok(req) => self.handle_generate(req).await,
            Err(e) => {
                warn!(error = ?e, "rejected generate request");
                GenerationResult::from_error(&e)
            }
        }
    }

    pub async fn handle_generate(&self, req: GenerateRequest) -> GenerationResult {
        let request_id = Uuid::new_v4();
        info!(%request_id, business = req.business_name().unwrap_or("-"), mode = self.settings.mode.as_str(), "generate");

        let html = match self.generate_html(request_id, &req).await {
            Ok(html) => html,
            Err(e) => {
                warn!(%request_id, error = %e, "generation failed");
                return GenerationResult::from_error(&e);
            }
        };
        info!(%request_id, bytes = html.len(), "html extracted");

        if !self.settings.mode.params().enrich {
            return GenerationResult::Success { html, description: None, tech_stack: None };
        }

        let name = req.business_name().unwrap_or("this application");
        let enrichment = self.enrich(request_id, name, req.subject()).await;
        GenerationResult::Success {
            html,
            description: Some(enrichment.description),
            tech_stack: Some(enrichment.tech_stack),
        }
    }

    async fn generate_html(&self, request_id: Uuid, req: &GenerateRequest) -> Result<String, GenerateError> {
        if !self.provider.is_configured() {
            return Err(GenerateError::MissingCredential);
        }

        let layout = self.pick_layout();
        if let Some(l) = layout {
            info!(%request_id, layout = l.name, "layout selected");
        }

        let instruction = prompt::generation_instruction(layout, &req.prompt, req.business_name());
        let temperature = effective_temperature(req.temperature, self.settings.default_temperature);
        let raw = self.call_with_retry(request_id, instruction, temperature).await?;

        extract::extract_html(&raw).ok_or_else(|| GenerateError::ExtractionFailure {
            excerpt: extract::excerpt(&raw, DEBUG_EXCERPT_CHARS),
        })
    }

    fn pick_layout(&self) -> Option<&'static LayoutConstraint> {
        if !self.settings.diversify_layout {
            return None;
        }
        prompt::select_layout(&mut *self.rng(), self.catalogs.layouts)
    }

    /// Calls upstream at most `MAX_ATTEMPTS` times. Only timeouts are retried,
    /// and the retry uses the mode's reduced token budget.
    pub async fn call_with_retry(
        &self,
        request_id: Uuid,
        prompt: String,
        temperature: f64,
    ) -> Result<String, GenerateError> {
        let params = self.settings.mode.params();
        let mut req = CompletionRequest {
            model: self.settings.model.clone(),
            prompt,
            max_tokens: params.max_tokens,
            temperature,
            timeout: params.timeout,
        };

        let mut attempt = 1;
        loop {
            debug!(%request_id, attempt, max_tokens = req.max_tokens, "upstream call");
            match self.bounded_call(&req).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                    warn!(%request_id, attempt, error = %e, retry_max_tokens = params.retry_max_tokens, "retrying with reduced tokens");
                    attempt += 1;
                    req.max_tokens = params.retry_max_tokens;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One provider call, cut off at the request's own timeout regardless of
    /// how the provider enforces it.
    async fn bounded_call(&self, req: &CompletionRequest) -> Result<String, GenerateError> {
        match tokio::time::timeout(req.timeout, self.provider.complete(req)).await {
            Ok(result) => result,
            Err(_) => Err(GenerateError::UpstreamTimeout(req.timeout)),
        }
    }

    /// Single best-effort attempt; any failure yields empty fields.
    async fn enrich(&self, request_id: Uuid, name: &str, subject: &str) -> Enrichment {
        let req = CompletionRequest {
            model: self.settings.model.clone(),
            prompt: prompt::description_prompt(name, subject),
            max_tokens: self.settings.enrichment_max_tokens,
            temperature: self.settings.enrichment_temperature,
            timeout: self.settings.enrichment_timeout,
        };
        match self.bounded_call(&req).await {
            Ok(text) => extract::parse_first_json_object::<Enrichment>(&text).unwrap_or_else(|| {
                warn!(%request_id, "enrichment response had no usable JSON");
                Enrichment::default()
            }),
            Err(e) => {
                warn!(%request_id, error = %e, "enrichment failed");
                Enrichment::default()
            }
        }
    }

    /// Freelance AI job titles: freshly generated when possible, otherwise a
    /// random draw from the built-in list. Never fails.
    pub async fn job_ideas(&self) -> JobIdeasResponse {
        match self.live_job_ideas().await {
            Ok(jobs) => {
                info!(count = jobs.len(), "live job ideas");
                JobIdeasResponse {
                    success: true,
                    jobs,
                    source: JobSource::Live,
                    timestamp: Some(Utc::now()),
                    note: "Fresh AI-generated job listings based on current market trends".into(),
                }
            }
            Err(e) => {
                info!(reason = %e, "using cached job ideas");
                self.cached_job_ideas()
            }
        }
    }

    async fn live_job_ideas(&self) -> Result<Vec<String>, GenerateError> {
        if !self.provider.is_configured() {
            return Err(GenerateError::MissingCredential);
        }
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let req = CompletionRequest {
            model: self.settings.model.clone(),
            prompt: prompt::job_ideas_prompt(&date, self.settings.job_ideas_count),
            max_tokens: self.settings.enrichment_max_tokens,
            temperature: self.settings.enrichment_temperature,
            timeout: self.settings.enrichment_timeout,
        };
        let text = self.bounded_call(&req).await?;
        if text.contains("\"error\"") {
            return Err(GenerateError::InvalidResponseFormat("model returned an error object".into()));
        }
        let mut jobs: Vec<String> = extract::parse_first_json_array::<Vec<String>>(&text)
            .ok_or_else(|| GenerateError::ParseFailure("no JSON array of job titles".into()))?
            .into_iter()
            .map(|j| j.trim().to_string())
            .filter(|j| !j.is_empty())
            .collect();
        if jobs.is_empty() {
            return Err(GenerateError::InvalidResponseFormat("empty job list".into()));
        }
        jobs.truncate(self.settings.job_ideas_count);
        Ok(jobs)
    }

    fn cached_job_ideas(&self) -> JobIdeasResponse {
        let jobs = select_random_subset(&mut *self.rng(), self.catalogs.fallback_jobs, CACHED_JOBS_MIN, CACHED_JOBS_MAX)
            .into_iter()
            .map(str::to_string)
            .collect();
        JobIdeasResponse {
            success: true,
            jobs,
            source: JobSource::Cached,
            timestamp: None,
            note: "Using curated list of common freelance AI jobs".into(),
        }
    }
}
