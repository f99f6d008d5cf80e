//! Configuration for reality-graph
//!
//! Settings are read from environment variables through clap (see
//! [`EnvArgs`]) and validated into a [`Config`] at startup. Anything
//! inconsistent fails construction; the process is expected to exit.

mod args;
mod firebase;
mod routing;

pub use args::EnvArgs;
pub use firebase::{parse_credentials_json, FirebaseConfig, FirebaseCredentials, DEFAULT_COLLECTION_PREFIX};
pub use routing::{RoutingConfig, WEIGHT_TOLERANCE};

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};
use tracing::level_filters::LevelFilter;

use crate::error::{ConfigError, Result};

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Self::Development,
        Self::Testing,
        Self::Staging,
        Self::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }

    /// Parse an environment name, falling back to development with a warning.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(value = %name, "Unknown ENVIRONMENT, defaulting to development");
            Self::Development
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::invalid_value("environment", format!("unknown environment `{s}`")))
    }
}

/// Validated top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub environment: Environment,
    pub firebase: FirebaseConfig,
    pub routing: RoutingConfig,
    /// Normalized lowercase level name
    pub log_level: String,
    pub enable_telemetry: bool,
    pub simulation_mode: bool,
    #[serde(serialize_with = "serialize_secs")]
    pub cache_ttl: Duration,
}

/// Runtime settings of the aggregate besides environment, Firebase and routing.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    /// Level name, normalized by [`normalize_log_level`] on construction
    pub log_level: String,
    pub enable_telemetry: bool,
    pub simulation_mode: bool,
    pub cache_ttl: Duration,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            enable_telemetry: true,
            simulation_mode: false,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl Config {
    /// Build a config and validate it.
    pub fn new(
        environment: Environment,
        firebase: FirebaseConfig,
        routing: RoutingConfig,
        runtime: RuntimeSettings,
    ) -> Result<Self> {
        let config = Self {
            environment,
            firebase,
            routing,
            log_level: normalize_log_level(&runtime.log_level)?,
            enable_telemetry: runtime.enable_telemetry,
            simulation_mode: runtime.simulation_mode,
            cache_ttl: runtime.cache_ttl,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_args(EnvArgs::from_env()?)
    }

    /// Validate raw settings into a config.
    pub fn from_args(args: EnvArgs) -> Result<Self> {
        let environment = Environment::parse_lenient(&args.environment);

        let credentials_json = args.credentials_json().map(parse_credentials_json).transpose()?;

        let firebase = FirebaseConfig::new(
            args.project_id().unwrap_or_default(),
            args.credentials_path(),
            credentials_json,
        )?
        .with_collection_prefix(args.firebase_collection_prefix);

        let routing = RoutingConfig {
            max_retries: args.routing_max_retries,
            retry_delay: routing::seconds("routing_retry_delay", args.routing_retry_delay)?,
            timeout: routing::seconds("routing_timeout", args.routing_timeout)?,
            enable_multi_d_routing: args.enable_multi_d_routing,
            physical_weight: args.physical_weight,
            network_weight: args.network_weight,
            economic_weight: args.economic_weight,
        };

        let runtime = RuntimeSettings {
            log_level: args.log_level,
            enable_telemetry: args.enable_telemetry,
            simulation_mode: args.simulation_mode,
            cache_ttl: Duration::from_secs(args.cache_ttl_seconds),
        };

        let config = Self::new(environment, firebase, routing, runtime)?;
        debug!(environment = %config.environment, project = %config.firebase.project_id, "Configuration loaded");
        Ok(config)
    }

    /// Check cross-field invariants.
    ///
    /// Simulation mode in production is allowed but logged.
    pub fn validate(&self) -> Result<()> {
        self.routing.validate_weights()?;
        normalize_log_level(&self.log_level)?;

        if self.simulation_mode && self.environment.is_production() {
            warn!("Simulation mode is enabled in production");
        }
        Ok(())
    }

    /// Level filter matching `log_level`
    pub fn level_filter(&self) -> LevelFilter {
        normalize_log_level(&self.log_level)
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::INFO)
    }
}

/// Map a level name onto the names tracing understands.
///
/// `warning` and `critical` are accepted as aliases for `warn` and `error`.
pub fn normalize_log_level(level: &str) -> Result<String> {
    let normalized = match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        "off" => "off",
        _ => {
            return Err(ConfigError::invalid_value(
                "log_level",
                format!("unknown level `{level}`"),
            ))
        }
    };
    Ok(normalized.to_string())
}

pub(crate) fn serialize_secs<S: Serializer>(d: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn firebase() -> FirebaseConfig {
        let mut creds = Map::new();
        creds.insert("type".to_string(), Value::from("service_account"));
        FirebaseConfig::new("proj", None, Some(creds)).unwrap()
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert!("prod".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_lenient_fallback() {
        assert_eq!(Environment::parse_lenient("NOPE"), Environment::Development);
        assert_eq!(Environment::parse_lenient("testing"), Environment::Testing);
    }

    #[test]
    fn test_new_validates_weights() {
        let routing = RoutingConfig {
            economic_weight: 0.5,
            ..Default::default()
        };
        let err = Config::new(Environment::Staging, firebase(), routing, RuntimeSettings::default()).unwrap_err();
        assert!(matches!(err, ConfigError::WeightSum { .. }));
    }

    #[test]
    fn test_runtime_settings_are_applied() {
        let runtime = RuntimeSettings {
            log_level: "Warning".to_string(),
            enable_telemetry: false,
            simulation_mode: true,
            cache_ttl: Duration::from_secs(5),
        };
        let config = Config::new(Environment::Production, firebase(), RoutingConfig::default(), runtime).unwrap();
        assert!(config.simulation_mode);
        assert!(!config.enable_telemetry);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_log_level_rejected_on_construction() {
        let runtime = RuntimeSettings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        let err = Config::new(Environment::Development, firebase(), RoutingConfig::default(), runtime).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "log_level", .. }));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(normalize_log_level("INFO").unwrap(), "info");
        assert_eq!(normalize_log_level("Warning").unwrap(), "warn");
        assert_eq!(normalize_log_level("CRITICAL").unwrap(), "error");
        assert!(normalize_log_level("loud").is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut config = Config::new(Environment::Development, firebase(), RoutingConfig::default(), RuntimeSettings::default()).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::INFO);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_serialized_shape() {
        let config = Config::new(Environment::Development, firebase(), RoutingConfig::default(), RuntimeSettings::default()).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["environment"], "development");
        assert_eq!(value["cache_ttl"], json!(300.0));
        assert_eq!(value["routing"]["timeout"], json!(30.0));
        assert_eq!(value["firebase"]["credentials"]["inline"], "<redacted>");
    }
}
