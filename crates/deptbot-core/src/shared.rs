//! Shared types used across the responder crates.

use serde::{Deserialize, Serialize};

/// Answer record returned for every query. This is the only state crossing
/// the core boundary; callers render `text` as markdown and discard the
/// record afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Formatted answer (markdown-flavored, opaque to the core).
    pub text: String,
    /// False only when the guardrail rejected the query.
    pub is_related: bool,
    /// Fixed attribution labels for this outcome.
    pub sources: Vec<String>,
}

/// Guardrail keyword defaults: the query must contain at least one of these
/// (as a case-insensitive substring) to be answered.
const DEFAULT_GUARDRAIL_KEYWORDS: [&str; 23] = [
    "department",
    "faculty",
    "school",
    "program",
    "course",
    "engineering",
    "computer",
    "electrical",
    "mechanical",
    "civil",
    "chemical",
    "architecture",
    "business",
    "admission",
    "fee",
    "tuition",
    "lab",
    "facility",
    "requirement",
    "apply",
    "degree",
    "bachelor",
    "master",
];

/// Global application configuration (gateway identity + guardrail). Load
/// from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by the gateway status endpoints.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Keywords admitted by the guardrail filter.
    #[serde(default = "CoreConfig::default_guardrail_keywords")]
    pub guardrail_keywords: Vec<String>,
}

impl CoreConfig {
    /// Compiled-in guardrail keyword list, used when neither file nor
    /// environment overrides it.
    pub fn default_guardrail_keywords() -> Vec<String> {
        DEFAULT_GUARDRAIL_KEYWORDS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Load config from file and environment. Precedence: env overrides >
    /// file (path from env `DEPTBOT_CONFIG`, default `config/gateway.toml`)
    /// > compiled-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("DEPTBOT_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        Self::load_with(&config_path)
    }

    fn load_with(config_path: &str) -> Result<Self, config::ConfigError> {
        // `with_name` resolves the extension, so the default extensionless
        // path picks up `config/gateway.toml`; a missing file is not an
        // error, the defaults stand.
        let built = config::Config::builder()
            .set_default("app_name", "UET Department Agent")?
            .set_default("port", 8000_i64)?
            .set_default("guardrail_keywords", Self::default_guardrail_keywords())?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEPTBOT").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
