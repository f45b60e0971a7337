use secrecy::Secret;
use service_core::config::{self as core_config, env_opt, env_or, env_parse};
use service_core::error::AppError;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub analysis: AnalysisSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Missing keys are tolerated at startup; requests fail until one is supplied.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GeminiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSettings {
    /// Reject upstream output that does not match the `LegalAnalysis` schema.
    pub strict_output: bool,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    /// Parse a comma separated origin list. `*` anywhere means any origin.
    pub fn from_list(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self::from_list("*")
    }
}

impl AnalysisConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(AnalysisConfig {
            common,
            gemini: GeminiSettings {
                api_key: env_opt("GEMINI_API_KEY").map(Secret::new),
                model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                base_url: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                timeout_secs: upstream_timeout_secs(env_parse(
                    "GEMINI_TIMEOUT_SECS",
                    DEFAULT_UPSTREAM_TIMEOUT_SECS,
                )?)?,
            },
            analysis: AnalysisSettings {
                strict_output: env_parse("ANALYSIS_STRICT_OUTPUT", false)?,
            },
            cors: CorsSettings::from_list(&env_or("CORS_ALLOWED_ORIGINS", "*")),
        })
    }
}

/// A zero timeout would fail every upstream call.
fn upstream_timeout_secs(secs: u64) -> Result<u64, AppError> {
    if secs == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "GEMINI_TIMEOUT_SECS must be greater than zero"
        )));
    }
    Ok(secs)
}
