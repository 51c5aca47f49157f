use backend::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    if !config.data_dir.exists() {
        std::fs::create_dir_all(&config.data_dir).expect("Failed to create data directory");
        info!("Data directory created: {}", config.data_dir.display());
    }

    info!("🚀 QuickPoll server listening on http://localhost:{}", config.port);

    let _ = backend::build(config).launch().await?;
    Ok(())
}
