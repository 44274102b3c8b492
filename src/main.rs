use actix_web::HttpServer;
use dating_mock_api::config::LogFormat;
use dating_mock_api::{build_app, render_banner, OriginGate, Settings};
use tracing::{error, info};
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Warnings and errors go to stderr, everything else to stdout
    let writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .or_else(std::io::stdout);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Text => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging comes up before configuration errors are reported so they get logged too
    let loaded = Settings::load();
    let logging = loaded
        .as_ref()
        .map(|settings| settings.logging.clone())
        .unwrap_or_default();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(logging.level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(logging.format);
    init_logging(&log_level, LogFormat::from_name(&log_format));

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(
        "Configuration loaded (allowed origins: {:?}, credentials: {})",
        settings.cors.allowed_origins, settings.cors.supports_credentials
    );

    let gate = OriginGate::from_settings(&settings.cors);
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(1).max(1);

    let server = HttpServer::new(move || build_app(gate.clone()))
        .workers(workers)
        .bind((host.as_str(), port))
        .map_err(|e| {
            error!("Failed to bind {}:{}: {}", host, port, e);
            e
        })?;

    info!("{}", render_banner(port));

    server.run().await
}
