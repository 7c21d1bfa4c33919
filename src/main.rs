use anyhow::Result;
use quartermaster::{
    config::{load_config, LoadSettings},
    fetch::SheetsCsvClient,
};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quartermaster=info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load + validate the army roster ──────────────────────────
    let source = SheetsCsvClient::new(Client::new());
    let settings = LoadSettings::default();
    let configs = load_config(&source, &settings).await?;

    // ─── 3) report the resolved roster ───────────────────────────────
    info!("{} armies configured", configs.len());
    println!("{}", serde_json::to_string_pretty(&configs)?);

    Ok(())
}
