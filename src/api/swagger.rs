use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Solar Auth API",
        version = "1.0.0",
        description = "Signup, login and rule-based site scoring for the solar site finder. \n\n**Note:** passwords are stored and compared in plain text; do not expose this service beyond a trusted network."
    ),
    paths(
        crate::api::auth::signup,
        crate::api::auth::login,
        crate::api::site::assess,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::SignupRequest,
            crate::models::LoginRequest,
            crate::models::ApiResponse,
            crate::models::SiteRequest,
            crate::models::SiteAssessment,
            crate::models::SiteValues,
            crate::models::Suitability,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Email/password signup and login. Login returns a redirect hint to the solar page."),
        (name = "Site", description = "Rule-based solar site suitability: AHP score, suitability label and per-criterion scores."),
        (name = "Health", description = "Service status and document store reachability."),
    )
)]
pub struct ApiDoc;
