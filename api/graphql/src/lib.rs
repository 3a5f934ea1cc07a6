use actix_cors::Cors;
use actix_web::{
    http::header,
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiGraphqlCtx;
use error_handler::default_error_handler;
use logger::logger_format;
use pm_config::app::AppConfigMode;
use schema::{build_schema, ProjmanSchema};
use tokio::select;
use tokio_util::sync::CancellationToken;

pub mod configure;
pub mod context;
pub mod error_handler;
mod loader;
mod logger;
mod model;
pub mod schema;
mod service;

pub struct ApiGraphqlServer {
    mode: AppConfigMode,
    address: String,
    path: String,
    allowed_origin: String,
    schema: web::Data<ProjmanSchema>,
}

impl ApiGraphqlServer {
    pub fn new(
        mode: &AppConfigMode,
        host: &str,
        port: &u16,
        path: &str,
        allowed_origin: &str,
        ctx: ApiGraphqlCtx,
    ) -> Self {
        pm_log::info(Some("⚡"), "[ApiGraphqlServer] Initializing component");

        Self {
            mode: *mode,
            address: format!("{host}:{port}"),
            path: path.to_owned(),
            allowed_origin: allowed_origin.to_owned(),
            schema: web::Data::new(build_schema(ctx)),
        }
    }

    /// Serves until `cancel_token` fires, then drains in-flight requests.
    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        pm_log::info(Some("💫"), "[ApiGraphqlServer] Running component");

        let Self {
            mode,
            address,
            path,
            allowed_origin,
            schema,
        } = self;

        let server = HttpServer::new(move || {
            App::new()
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .wrap(Logger::new(logger_format()))
                .wrap(cors(&allowed_origin))
                .app_data(schema.clone())
                .configure(|cfg| configure(cfg, &mode, &path))
        })
        .bind(&address)?
        .disable_signals()
        .run();

        pm_log::info(Some("👂"), format!("[ApiGraphqlServer] Listening on {address}"));

        let server_handle = server.handle();
        let mut server_task = tokio::spawn(server);

        select! {
            _ = cancel_token.cancelled() => {
                pm_log::info(None, "[ApiGraphqlServer] Shutting down component");
                server_handle.stop(true).await;
                server_task.await??;
            }
            res = &mut server_task => res??,
        }

        Ok(())
    }
}

/// Allows `allowed_origin`, or any origin when it is `*`.
pub fn cors(allowed_origin: &str) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST"])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if allowed_origin == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(allowed_origin)
    }
}
