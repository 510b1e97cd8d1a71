use demo_api::config::Config;
use demo_api::server::Server;
use demo_api::telemetry::init_tracing;

/// Demo API Entry Point
///
/// Loads `.env` (if present), installs the tracing subscriber, reads [`Config`] from the
/// environment and runs the [`Server`] until the process is terminated.
///
/// # Endpoints
/// - `GET /health`
/// - `GET /api/users`
/// - `POST /api/users`
/// - `GET /api/sum/{a}/{b}`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env().map_err(|err| {
        tracing::error!(error = %err, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    Server::new(config).run().await
}
