use actix_web::{web, HttpResponse};

use crate::model::HealthRes;

pub fn health_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthRes::ok())
}
