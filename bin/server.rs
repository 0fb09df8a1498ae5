// Numerologia - Web Server
// JSON API over the numerology engine

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use numerologia::api::{router, AppState};
use numerologia::{Config, NumerologyEngine};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("NUMEROLOGIA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("🌐 Numerologia - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = Config::load_or_default(None).context("Failed to load configuration")?;
    let state = AppState::new(NumerologyEngine::from_config(&config));
    let app = router(state);

    let addr = config.server.bind.as_str();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr, month_names = ?config.report.month_names, "server listening");
    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: POST http://{}/api/report", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
