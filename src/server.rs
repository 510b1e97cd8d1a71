use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::openapi::ApiDoc;
use crate::routes;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// # HTTP Server
///
/// Built once at process start from a [`Config`] and a [`Clock`]; owns nothing else.
/// Handlers share only the clock, registered as `web::Data<dyn Clock>`.
pub struct Server {
    config: Config,
    clock: Arc<dyn Clock>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock_data(&self) -> web::Data<dyn Clock> {
        web::Data::from(self.clock.clone())
    }

    /// Binds the listener and serves until the process is terminated.
    pub async fn run(self) -> std::io::Result<()> {
        let clock = self.clock_data();
        let api_docs = self.config.api_docs;

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .app_data(clock.clone())
                .configure(routes::configure)
                .configure(move |cfg| mount_api_docs(cfg, api_docs))
        })
        .bind((self.config.host.as_str(), self.config.port))?;

        for addr in server.addrs() {
            tracing::info!(%addr, "Server running on port {}", addr.port());
        }
        if api_docs {
            tracing::info!("API docs served at /swagger-ui/");
        }

        server.run().await
    }
}

/// Mounts Swagger UI and `/api-docs/openapi.json` when enabled; otherwise a no-op.
pub fn mount_api_docs(cfg: &mut web::ServiceConfig, enabled: bool) {
    if enabled {
        cfg.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }
}
