use std::sync::Arc;

use pm_api_graphql::{
    context::{ApiGraphqlCtx, ApiGraphqlDaoCtx},
    ApiGraphqlServer,
};
use pm_dao::Db;
use pm_db_memory::db::MemoryDb;
use pm_db_sqlite::db::SqliteDb;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match pm_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => panic!("{err:#}"),
    };

    pm_log::init(config.log().display_level(), config.log().level_filter());

    pm_log::info(Some("🚀"), "[Projman] Starting");

    let db = match (config.db().sqlite(), config.db().memory()) {
        (Some(sqlite), None) => {
            let url = config_path::db_url().unwrap_or_else(|| sqlite.url().to_owned());
            match SqliteDb::new(&url, sqlite.max_connections()).await {
                Ok(db) => Arc::new(Db::SqliteDb(db)),
                Err(err) => pm_log::panic(
                    None,
                    format!("[Projman] Connecting to SQLite failed: {err:#}"),
                ),
            }
        }
        (None, Some(_)) => Arc::new(Db::MemoryDb(MemoryDb::new())),
        (Some(_), Some(_)) => pm_log::panic(
            None,
            "[Projman] Only one database configuration can be specified",
        ),
        (None, None) => pm_log::panic(None, "[Projman] No database configuration is specified"),
    };

    let api_graphql_server = ApiGraphqlServer::new(
        config.app().mode(),
        config.api().graphql().host(),
        config.api().graphql().port(),
        config.api().graphql().path(),
        config.api().graphql().allowed_origin(),
        ApiGraphqlCtx::new(ApiGraphqlDaoCtx::new(db)),
    );

    let cancel_token = CancellationToken::new();

    tokio::spawn({
        let cancel_token = cancel_token.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(_) => {
                    pm_log::info(Some("🛑"), "[Projman] Received shutdown signal");
                    cancel_token.cancel();
                }
                Err(err) => pm_log::error(
                    None,
                    format!("[Projman] Listening for shutdown signal failed: {err}"),
                ),
            }
        }
    });

    match api_graphql_server.run(cancel_token.clone()).await {
        Ok(_) => pm_log::info(Some("👋"), "[Projman] Turned off"),
        Err(err) => {
            cancel_token.cancel();
            pm_log::warn(
                Some("👋"),
                format!("[Projman] Turned off with error: {err:#}"),
            );
        }
    }
}
