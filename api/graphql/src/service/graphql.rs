use actix_web::{web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use pm_config::app::AppConfigMode;

use crate::schema::ProjmanSchema;

pub fn graphql_api(cfg: &mut web::ServiceConfig, mode: &AppConfigMode, path: &str) {
    cfg.route(path, web::post().to(execute));

    match mode {
        AppConfigMode::Development => cfg.route(path, web::get().to(graphiql)),
        AppConfigMode::Production => cfg.route(path, web::get().to(execute)),
    };
}

async fn execute(schema: web::Data<ProjmanSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(req.path()).finish())
}
