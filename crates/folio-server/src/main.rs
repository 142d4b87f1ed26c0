//! Folio - Personal portfolio backend with a session-authenticated CMS

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;

use config::Config;
use folio_api::{AppState, MetricsHandle, create_router};
use folio_auth::{AdminCredentials, AuthService};
use folio_store::{ContentStore, MemoryStore, RestStore, RestStoreConfig};

/// Folio - portfolio content API and admin backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "FOLIO_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "FOLIO_PORT")]
    port: Option<u16>,

    /// Admin email for login verification
    #[arg(long, env = "ADMIN_EMAIL", hide_env_values = true)]
    admin_email: Option<String>,

    /// Admin password for login verification
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,

    /// REST store endpoint
    #[arg(long, env = "KV_REST_API_URL")]
    kv_url: Option<String>,

    /// REST store bearer token
    #[arg(long, env = "KV_REST_API_TOKEN", hide_env_values = true)]
    kv_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Environment/CLI overrides win over the config file
    if args.admin_email.is_some() {
        config.auth.admin_email = args.admin_email;
    }
    if args.admin_password.is_some() {
        config.auth.admin_password = args.admin_password;
    }
    if args.kv_url.is_some() {
        config.store.rest.url = args.kv_url;
    }
    if args.kv_token.is_some() {
        config.store.rest.token = args.kv_token;
    }

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.admin_email.is_none() || config.auth.admin_password.is_none() {
        warn!("Admin credentials are not fully configured; every login will be rejected");
    }

    // Install the Prometheus recorder
    let metrics_handle = Arc::new(MetricsHandle::new(
        PrometheusBuilder::new().install_recorder()?,
    ));

    // Select the store backend once, here; handlers only see the trait.
    let store: Arc<dyn ContentStore> = match config.store.backend.as_str() {
        "memory" => {
            warn!("Using in-memory store; content will not survive a restart");
            Arc::new(MemoryStore::new())
        }
        "rest" => {
            let url = config
                .store
                .rest
                .url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("store.rest.url (KV_REST_API_URL) is required"))?;
            let token = config.store.rest.token.clone().ok_or_else(|| {
                anyhow::anyhow!("store.rest.token (KV_REST_API_TOKEN) is required")
            })?;
            Arc::new(RestStore::new(RestStoreConfig { url, token })?)
        }
        other => anyhow::bail!("Unknown store backend: {}", other),
    };

    // Wire up authentication
    let credentials = AdminCredentials::new(
        config.auth.admin_email.clone(),
        config.auth.admin_password.clone(),
    );
    let auth = Arc::new(AuthService::new(credentials, store.clone()));

    // Create application state and router
    let state = AppState::new(store, auth, config.auth.secure_cookies);
    let app = create_router(state, Some(metrics_handle))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Determine bind address
    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port).parse()?;

    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    info!("Shutdown signal received");
}
