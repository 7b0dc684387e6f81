use crate::models::{ApiResponse, LoginRequest, SignupRequest, SOLAR_PAGE};
use crate::services::user_store::UserStore;
use crate::utils::AppError;

// User signup
pub async fn signup(
    store: &dyn UserStore,
    request: &SignupRequest,
) -> Result<ApiResponse, AppError> {
    let new_user = request.validate()?;

    if !store.insert_if_absent(&new_user).await? {
        return Err(AppError::DuplicateUser);
    }

    Ok(ApiResponse::ok("Signup successful"))
}

// User login. Unknown email and wrong password are the same error.
pub async fn login(
    store: &dyn UserStore,
    request: &LoginRequest,
) -> Result<ApiResponse, AppError> {
    let credentials = request.validate()?;

    store
        .find_by_credentials(&credentials)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(ApiResponse::ok("Login successful").with_redirect(SOLAR_PAGE))
}
