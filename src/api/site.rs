use actix_web::{web, HttpResponse};

use crate::models::{SiteAssessment, SiteRequest};
use crate::services::site_service;

#[utoipa::path(
    post,
    path = "/api/site/assess",
    tag = "Site",
    request_body = SiteRequest,
    responses(
        (status = 200, description = "Suitability label, AHP score and per-criterion scores", body = SiteAssessment),
        (status = 400, description = "Malformed body", body = crate::models::ApiResponse)
    )
)]
pub async fn assess(request: web::Json<SiteRequest>) -> HttpResponse {
    log::info!("☀️  POST /api/site/assess - lat: {}, lon: {}", request.lat, request.lon);

    let assessment = site_service::assess(&request);
    log::debug!("Site assessed as {:?} (ahp {})", assessment.label, assessment.ahp_score);

    HttpResponse::Ok().json(assessment)
}
