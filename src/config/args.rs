//! Environment variable bindings.
//!
//! Every setting is a clap argument with an `env` binding and a literal
//! default, so the same struct reads the process environment and doubles as
//! command-line flags for the binary.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Raw, unvalidated settings as read from the environment.
///
/// A variable that is set but empty counts as unset for the optional
/// settings and as false for the boolean ones.
#[derive(Parser, Debug, Clone)]
pub struct EnvArgs {
    /// Deployment environment (development, testing, staging, production)
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Firebase project identifier
    #[arg(long, env = "FIREBASE_PROJECT_ID")]
    pub firebase_project_id: Option<String>,

    /// Path to a Firebase service-account JSON file
    #[arg(long, env = "FIREBASE_CREDENTIALS_PATH")]
    pub firebase_credentials_path: Option<String>,

    /// Firebase service-account JSON, inline
    #[arg(long, env = "FIREBASE_CREDENTIALS_JSON", hide_env_values = true)]
    pub firebase_credentials_json: Option<String>,

    /// Prefix applied to every collection name
    #[arg(long, env = "FIREBASE_COLLECTION_PREFIX", default_value = super::firebase::DEFAULT_COLLECTION_PREFIX)]
    pub firebase_collection_prefix: String,

    /// Maximum routing retries
    #[arg(long, env = "ROUTING_MAX_RETRIES", default_value_t = 3)]
    pub routing_max_retries: u32,

    /// Delay between routing retries, in seconds
    #[arg(long, env = "ROUTING_RETRY_DELAY", default_value_t = 1.0, allow_negative_numbers = true)]
    pub routing_retry_delay: f64,

    /// Routing timeout, in seconds
    #[arg(long, env = "ROUTING_TIMEOUT", default_value_t = 30.0, allow_negative_numbers = true)]
    pub routing_timeout: f64,

    /// Enable multi-dimensional routing
    #[arg(
        long,
        env = "ENABLE_MULTI_D_ROUTING",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub enable_multi_d_routing: bool,

    /// Weight of physical cost
    #[arg(long, env = "PHYSICAL_WEIGHT", default_value_t = 0.4, allow_negative_numbers = true)]
    pub physical_weight: f64,

    /// Weight of network cost
    #[arg(long, env = "NETWORK_WEIGHT", default_value_t = 0.4, allow_negative_numbers = true)]
    pub network_weight: f64,

    /// Weight of economic cost
    #[arg(long, env = "ECONOMIC_WEIGHT", default_value_t = 0.2, allow_negative_numbers = true)]
    pub economic_weight: f64,

    /// Log level (trace, debug, info, warning, error, critical)
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// Enable telemetry
    #[arg(
        long,
        env = "ENABLE_TELEMETRY",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub enable_telemetry: bool,

    /// Run against simulated infrastructure
    #[arg(
        long,
        env = "SIMULATION_MODE",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub simulation_mode: bool,

    /// Cache entry lifetime, in seconds
    #[arg(long, env = "CACHE_TTL_SECONDS", default_value_t = 300)]
    pub cache_ttl_seconds: u64,
}

impl EnvArgs {
    /// Read settings from the process environment only, ignoring argv.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from([env!("CARGO_PKG_NAME")])
    }

    pub fn project_id(&self) -> Option<&str> {
        non_empty(&self.firebase_project_id)
    }

    pub fn credentials_path(&self) -> Option<PathBuf> {
        non_empty(&self.firebase_credentials_path).map(PathBuf::from)
    }

    pub fn credentials_json(&self) -> Option<&str> {
        non_empty(&self.firebase_credentials_json)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Boolean parser accepting true/false, yes/no, on/off, 1/0 in any case.
/// An empty value is false.
fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "off" | "0" => Ok(false),
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        _ => Err(format!("`{value}` is not a boolean")),
    }
}
