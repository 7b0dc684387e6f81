pub mod auth;
pub mod health;
pub mod pages;
pub mod site;
pub mod swagger;

use actix_web::{error, web, ResponseError};

use crate::utils::AppError;

/// Rejects unparsable or non-JSON bodies before any handler runs.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("❌ {} {} - rejected body: {}", req.method(), req.path(), err);
        let response = AppError::MalformedBody(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    })
}

/// Routes shared by the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        // Static pages
        .route("/", web::get().to(pages::index))
        .route("/solar", web::get().to(pages::solar))
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Auth endpoints
        .service(
            web::scope("/api")
                .route("/signup", web::post().to(auth::signup))
                .route("/login", web::post().to(auth::login))
                // Site suitability scoring
                .route("/site/assess", web::post().to(site::assess)),
        );
}
