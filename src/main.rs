mod config;
mod error;
mod llm;
mod persona;
mod routes;
mod state;
mod translate;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hockey_slang_relay=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Serving front-end from: {}", config.system_config.public_dir);

    let app_state = AppState::new(config.clone())?;
    let app = routes::build_app(app_state);

    let system_config = &config.system_config;
    let listener = tokio::net::TcpListener::bind((system_config.host.as_str(), system_config.port))
        .await
        .with_context(|| format!("binding {}:{}", system_config.host, system_config.port))?;
    info!("Hockey Slang Translator server running on {}", listener.local_addr()?);
    info!("Visit http://localhost:{} to use the app", system_config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
