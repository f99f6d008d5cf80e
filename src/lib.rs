//! Reality Graph - startup configuration
//!
//! Loads and validates the settings the reality-graph router runs with:
//!
//! - **Environment**: development, testing, staging or production
//! - **Firebase**: project id, service-account credentials, collection prefix
//! - **Routing**: retry/timeout parameters and the physical, network and
//!   economic weights, which must sum to 1.0
//! - **Runtime**: log level, telemetry, simulation mode, cache TTL
//!
//! The [`models`] module holds the node and capability enumerations of the
//! graph.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use config::{Config, EnvArgs, Environment, FirebaseConfig, FirebaseCredentials, RoutingConfig, RuntimeSettings};
pub use error::{ConfigError, Result};
pub use models::{CapabilityType, NodeType};
