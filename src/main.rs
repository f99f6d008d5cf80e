//! Reality Graph - configuration check and startup banner

use clap::Parser;
use tracing::{error, info, warn};

use reality_graph::{
    config::{normalize_log_level, EnvArgs},
    logging, Config, FirebaseCredentials,
};

#[derive(Parser, Debug)]
#[command(name = "reality-graph")]
#[command(about = "Load and validate reality-graph configuration")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Print the effective configuration (credentials redacted) as JSON
    #[arg(long)]
    print_config: bool,

    #[command(flatten)]
    settings: EnvArgs,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging comes up before validation so config warnings are visible
    let level = normalize_log_level(&cli.settings.log_level).unwrap_or_else(|_| "info".to_string());
    logging::init(&level, cli.log_json);

    let config = match Config::from_args(cli.settings) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!("======================================");
    info!("  Reality Graph");
    info!("======================================");
    info!("Environment: {}", config.environment);
    info!("Firebase project: {}", config.firebase.project_id);
    match &config.firebase.credentials {
        FirebaseCredentials::Path(path) => info!("Credentials: file {}", path.display()),
        FirebaseCredentials::Inline(_) => info!("Credentials: inline JSON"),
    }
    info!("Collection prefix: {}", config.firebase.collection_prefix);
    info!(
        "Routing: retries={} delay={:?} timeout={:?} multi-d={}",
        config.routing.max_retries,
        config.routing.retry_delay,
        config.routing.timeout,
        config.routing.enable_multi_d_routing
    );
    info!(
        "Weights: physical={} network={} economic={}",
        config.routing.physical_weight, config.routing.network_weight, config.routing.economic_weight
    );
    info!("Telemetry: {}", config.enable_telemetry);
    info!("Cache TTL: {}s", config.cache_ttl.as_secs());
    if config.simulation_mode {
        warn!("Simulation mode: ON");
    }
    info!("======================================");

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}
