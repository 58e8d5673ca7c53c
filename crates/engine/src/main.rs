//! Roster Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_engine::{server, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Engine");

    let config = AppConfig::from_env()?;
    tracing::info!(
        host = %config.server_host,
        port = config.server_port,
        cors_origins = config.cors_allowed_origins.len(),
        "Configuration loaded"
    );

    server::run(config).await
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
