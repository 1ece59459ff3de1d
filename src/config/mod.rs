use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use fs_err as fs;
use serde::{Deserialize, Serialize};

/// Pipeline profile. `Full` favors output quality and runs enrichment; `Fast`
/// keeps every call short enough for tight proxy timeouts.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Full,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeParams {
    pub max_tokens: u32,
    pub retry_max_tokens: u32,
    pub timeout: Duration,
    pub enrich: bool,
}

impl GenerationMode {
    pub fn params(self) -> ModeParams {
        match self {
            GenerationMode::Full => ModeParams {
                max_tokens: 8000,
                retry_max_tokens: 6000,
                timeout: Duration::from_secs(120),
                enrich: true,
            },
            GenerationMode::Fast => ModeParams {
                max_tokens: 4096,
                retry_max_tokens: 3000,
                timeout: Duration::from_secs(45),
                enrich: false,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Full => "full",
            GenerationMode::Fast => "fast",
        }
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(GenerationMode::Full),
            "fast" => Ok(GenerationMode::Fast),
            other => bail!("unknown generation mode `{other}` (expected `full` or `fast`)"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub api_base: String,
    pub api_version: String,
    /// Read from the file or `CLAUDE_API_KEY`; never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub bind: String,
    pub port: u16,
    pub mode: GenerationMode,
    pub diversify_layout: bool,
    pub default_temperature: f64,
    pub enrichment_max_tokens: u32,
    pub enrichment_temperature: f64,
    pub enrichment_timeout_secs: u64,
    pub job_ideas_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "claude-opus-4-1-20250805".into(),
            api_base: "https://api.anthropic.com".into(),
            api_version: "2023-06-01".into(),
            api_key: None,
            bind: "0.0.0.0".into(),
            port: 3000,
            mode: GenerationMode::Full,
            diversify_layout: true,
            default_temperature: 0.5,
            enrichment_max_tokens: 2000,
            enrichment_temperature: 0.7,
            enrichment_timeout_secs: 45,
            job_ideas_count: 15,
        }
    }
}

impl Config {
    /// Defaults, then the TOML file (if any), then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Applies `CLAUDE_API_KEY`, `PORT` and `VIBE_MODE` from `lookup`. Set but
    /// blank variables count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = lookup("CLAUDE_API_KEY") {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().with_context(|| format!("PORT is not a valid port: `{port}`"))?;
        }
        if let Some(mode) = lookup("VIBE_MODE") {
            self.mode = mode.parse().context("VIBE_MODE")?;
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn enrichment_timeout(&self) -> Duration {
        Duration::from_secs(self.enrichment_timeout_secs)
    }
}
