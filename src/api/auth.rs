use actix_web::{web, HttpResponse, ResponseError};

use crate::models::{ApiResponse, LoginRequest, SignupRequest};
use crate::services::{auth_service, UserStore};
use crate::utils::AppError;

fn reject(route: &str, email: &str, err: AppError) -> HttpResponse {
    match &err {
        AppError::Store(_) => log::error!("💥 {} failed: {} - {}", route, email, err),
        _ => log::warn!("❌ {} rejected: {} - {}", route, email, err),
    }
    err.error_response()
}

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup successful", body = ApiResponse),
        (status = 400, description = "Missing fields, user already exists or malformed body", body = ApiResponse),
        (status = 500, description = "Server error", body = ApiResponse)
    )
)]
pub async fn signup(
    store: web::Data<dyn UserStore>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    let email = request.email_hint();
    log::info!("📝 POST /api/signup - email: {}", email);

    match auth_service::signup(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Signup successful: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => reject("Signup", email, e),
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, redirect hint included", body = ApiResponse),
        (status = 400, description = "Missing fields, invalid credentials or malformed body", body = ApiResponse),
        (status = 500, description = "Server error", body = ApiResponse)
    )
)]
pub async fn login(
    store: web::Data<dyn UserStore>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    let email = request.email_hint();
    log::info!("🔐 POST /api/login - email: {}", email);

    match auth_service::login(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => reject("Login", email, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::services::user_store::memory::{FailingUserStore, MemoryUserStore};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn post(
        store: Arc<dyn UserStore>,
        path: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(api::configure),
        )
        .await;
        let req = test::TestRequest::post().uri(path).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn signup_then_login_redirects_to_solar() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());

        let (status, body) = post(
            store.clone(),
            "/api/signup",
            json!({"fullName": "A", "email": "a@x.com", "password": "p1"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "Signup successful"}));

        let (status, body) = post(
            store,
            "/api/login",
            json!({"email": "a@x.com", "password": "p1"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Login successful", "redirect": "/solar"})
        );
    }

    #[actix_web::test]
    async fn second_signup_with_same_email_fails() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
        let body = json!({"fullName": "A", "email": "a@x.com", "password": "p1"});

        let (first, _) = post(store.clone(), "/api/signup", body.clone()).await;
        let (second, response) = post(store, "/api/signup", body).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"success": false, "message": "User already exists"}));
    }

    #[actix_web::test]
    async fn signup_missing_any_field_is_bad_request() {
        let bodies = [
            json!({"email": "a@x.com", "password": "p1"}),
            json!({"fullName": "A", "password": "p1"}),
            json!({"fullName": "A", "email": "a@x.com"}),
            json!({"fullName": "A", "email": "a@x.com", "password": ""}),
        ];
        for body in bodies {
            let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
            let (status, response) = post(store, "/api/signup", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["success"], false);
            assert_eq!(response["message"], "All fields required");
        }
    }

    #[actix_web::test]
    async fn login_failures_are_indistinguishable() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
        post(
            store.clone(),
            "/api/signup",
            json!({"fullName": "A", "email": "a@x.com", "password": "p1"}),
        )
        .await;

        let wrong_password = post(
            store.clone(),
            "/api/login",
            json!({"email": "a@x.com", "password": "p2"}),
        )
        .await;
        let unknown_email = post(
            store,
            "/api/login",
            json!({"email": "nobody@x.com", "password": "p1"}),
        )
        .await;

        assert_eq!(wrong_password.0, StatusCode::BAD_REQUEST);
        assert_eq!(
            wrong_password.1,
            json!({"success": false, "message": "Invalid credentials"})
        );
        assert_eq!(wrong_password, unknown_email);
    }

    #[actix_web::test]
    async fn login_missing_field_is_bad_request() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
        let (status, body) = post(store, "/api/login", json!({"email": "a@x.com"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields required");
    }

    #[actix_web::test]
    async fn array_bodies_carry_no_fields() {
        let memory = Arc::new(MemoryUserStore::default());
        let store: Arc<dyn UserStore> = memory.clone();
        post(
            store.clone(),
            "/api/signup",
            json!({"fullName": "A", "email": "a@x.com", "password": "p1"}),
        )
        .await;

        let (status, body) = post(store.clone(), "/api/signup", json!(["B", "b@x.com", "p2"])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "message": "All fields required"}));
        assert_eq!(memory.len(), 1);

        let (status, body) = post(store, "/api/login", json!(["a@x.com", "p1"])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "message": "All fields required"}));
    }

    #[actix_web::test]
    async fn falsy_values_are_missing_fields() {
        for password in [json!(false), json!(0), json!(null), json!("")] {
            let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
            let (status, body) = post(
                store,
                "/api/signup",
                json!({"fullName": "A", "email": "b@x.com", "password": password}),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], "All fields required");
        }
    }

    #[actix_web::test]
    async fn numeric_password_is_stored_as_text() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());

        let (status, _) = post(
            store.clone(),
            "/api/signup",
            json!({"fullName": "A", "email": "b@x.com", "password": 123}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = post(
            store,
            "/api/login",
            json!({"email": "b@x.com", "password": "123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["redirect"], "/solar");
    }

    #[actix_web::test]
    async fn store_failure_is_generic_server_error() {
        let store: Arc<dyn UserStore> = Arc::new(FailingUserStore);

        let (status, body) = post(
            store.clone(),
            "/api/signup",
            json!({"fullName": "A", "email": "a@x.com", "password": "p1"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "message": "Server error"}));

        let (status, body) = post(
            store,
            "/api/login",
            json!({"email": "a@x.com", "password": "p1"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "message": "Server error"}));
    }

    #[actix_web::test]
    async fn malformed_json_is_rejected_before_handler() {
        // The failing store would turn any handler call into a 500.
        let store: Arc<dyn UserStore> = Arc::new(FailingUserStore);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"fullName\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": false, "message": "Invalid JSON body"}));

        let req = test::TestRequest::post()
            .uri("/api/login")
            .insert_header(("content-type", "text/plain"))
            .set_payload("email=a@x.com&password=p1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
