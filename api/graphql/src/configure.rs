use actix_web::web;
use pm_config::app::AppConfigMode;

use crate::service::{graphql::graphql_api, health::health_api};

pub fn configure(cfg: &mut web::ServiceConfig, mode: &AppConfigMode, path: &str) {
    cfg.configure(health_api)
        .configure(|cfg| graphql_api(cfg, mode, path));
}
