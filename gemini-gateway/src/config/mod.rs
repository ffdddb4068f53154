use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

/// Origin allowed when `FRONTEND_URL` is unset (local Angular dev server).
pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:4200";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Where the Angular build drops the browser bundle.
pub const DEFAULT_FRONTEND_DIST_DIR: &str = "angular-app/gemini-app/dist/gemini-app/browser";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub cors: CorsSettings,
    pub gemini: GeminiSettings,
    pub frontend: FrontendSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_DEV_ORIGIN.to_string()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when `GEMINI_API_KEY` is unset or blank.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct FrontendSettings {
    pub dist_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Ok(Self::from_lookup(common, |key| env::var(key).ok()))
    }

    /// Build the service settings from any key lookup; `load` uses the
    /// process environment.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let allowed_origins = match non_empty("FRONTEND_URL") {
            Some(urls) => urls
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![DEFAULT_DEV_ORIGIN.to_string()],
        };

        GatewayConfig {
            common,
            cors: CorsSettings { allowed_origins },
            gemini: GeminiSettings {
                api_key: non_empty("GEMINI_API_KEY").map(Secret::new),
                model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_base: non_empty("GEMINI_API_BASE")
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            },
            frontend: FrontendSettings {
                dist_dir: non_empty("FRONTEND_DIST_DIR")
                    .unwrap_or_else(|| DEFAULT_FRONTEND_DIST_DIR.to_string())
                    .into(),
            },
            telemetry: TelemetrySettings {
                log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                otlp_endpoint: non_empty("OTLP_ENDPOINT"),
            },
        }
    }
}
