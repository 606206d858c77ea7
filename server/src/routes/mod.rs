use actix_web::{
    http::header::ContentType,
    web::{self, Data},
    HttpResponse,
};
use serde::Serialize;

use errors::{Error, ErrorResponse};

use crate::config::Config;

pub mod games;

pub const INDEX_BODY: &str = "Index for Game/Review/User API";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::scope("/games")
            .route("", web::get().to(games::get_all))
            .route("/{id}", web::get().to(games::get_by_id)),
    );
}

pub async fn index() -> &'static str {
    INDEX_BODY
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

/// Serializes `value` honouring the `JSON_PRETTY` setting.
pub fn json_response<T>(config: &Data<Config>, value: &T) -> Result<HttpResponse, Error>
where
    T: Serialize,
{
    let body = if config.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}
