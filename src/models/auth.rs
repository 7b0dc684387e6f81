use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Credentials, NewUser};
use crate::utils::AppError;

pub const SOLAR_PAGE: &str = "/solar";

/// Raw signup body. Field values are kept as JSON until `validate()`, so a
/// falsy `0` or `false` reports a missing field instead of a parse error.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "Value")]
pub struct SignupRequest {
    pub full_name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(try_from = "Value")]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

/// Uniform JSON body for every auth endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ApiResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            redirect: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            redirect: None,
        }
    }

    pub fn with_redirect(mut self, path: &str) -> Self {
        self.redirect = Some(path.to_string());
        self
    }
}

// Only objects carry fields. An array body parses but names nothing, and
// bare scalars are not accepted as a body at all.
fn body_fields(body: Value) -> Result<Map<String, Value>, String> {
    match body {
        Value::Object(fields) => Ok(fields),
        Value::Array(_) => Ok(Map::new()),
        other => Err(format!("expected a JSON object, found `{}`", other)),
    }
}

impl TryFrom<Value> for SignupRequest {
    type Error = String;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let mut fields = body_fields(body)?;
        Ok(Self {
            full_name: fields.remove("fullName"),
            email: fields.remove("email"),
            password: fields.remove("password"),
        })
    }
}

impl TryFrom<Value> for LoginRequest {
    type Error = String;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let mut fields = body_fields(body)?;
        Ok(Self {
            email: fields.remove("email"),
            password: fields.remove("password"),
        })
    }
}

// Absent, null, false, 0 and "" all count as missing.
fn is_missing(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Bool(true)) => false,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

// Present scalars are stored as text; nested values cannot be.
fn as_text(field: &Option<Value>) -> Result<String, AppError> {
    match field {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(AppError::MalformedBody(format!(
            "expected text, found `{}`",
            other
        ))),
        None => Err(AppError::MissingField),
    }
}

fn email_hint(field: &Option<Value>) -> &str {
    field.as_ref().and_then(Value::as_str).unwrap_or("N/A")
}

impl SignupRequest {
    pub fn validate(&self) -> Result<NewUser, AppError> {
        if [&self.full_name, &self.email, &self.password]
            .into_iter()
            .any(is_missing)
        {
            return Err(AppError::MissingField);
        }

        Ok(NewUser {
            name: as_text(&self.full_name)?,
            email: as_text(&self.email)?,
            password: as_text(&self.password)?,
        })
    }

    pub fn email_hint(&self) -> &str {
        email_hint(&self.email)
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<Credentials, AppError> {
        if is_missing(&self.email) || is_missing(&self.password) {
            return Err(AppError::MissingField);
        }

        Ok(Credentials {
            email: as_text(&self.email)?,
            password: as_text(&self.password)?,
        })
    }

    pub fn email_hint(&self) -> &str {
        email_hint(&self.email)
    }
}
