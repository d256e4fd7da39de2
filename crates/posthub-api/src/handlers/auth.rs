//! Auth handlers — login and credential setup.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use posthub_core::error::AppError;
use posthub_service::auth::LoginOutcome;
use posthub_service::context::RequestContext;

use crate::dto::request::{LoginRequest, SetPasswordRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::middleware::auth::{bearer_token, REFRESH_TOKEN_HEADER};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    match state.auth_service.login(&req.email, &req.password).await? {
        LoginOutcome::Success { token, role } => Ok(Json(LoginResponse::Success { token, role })),
        LoginOutcome::SetupRequired => Ok(Json(LoginResponse::SetupRequired {
            requires_password_setup: true,
        })),
    }
}

/// POST /api/set-password
///
/// Two entry points behind one path. With a bearer header this is the
/// self-service path for the authenticated principal (204). Without one
/// it is the invitation path keyed by email (200 with a message).
pub async fn set_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SetPasswordRequest>,
) -> Result<Response, ApiError> {
    if let Some(token) = bearer_token(&headers) {
        // Self-service path. The route sits outside the auth middleware,
        // so the gateway runs here, rotation header included.
        let pass = state.token_gateway.authenticate(&token).await?;
        let ctx = RequestContext::new(
            pass.claims.account_id,
            pass.claims.session_id,
            pass.claims.role,
            pass.claims.email.clone(),
        );

        let password = req
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::validation("Password is required"))?;

        state.auth_service.set_own_credential(&ctx, password).await?;

        let mut response = StatusCode::NO_CONTENT.into_response();
        if let Ok(value) = HeaderValue::from_str(&pass.rotated_token) {
            response.headers_mut().insert(REFRESH_TOKEN_HEADER, value);
        }
        return Ok(response);
    }

    let (email, new_password) = match (req.email.as_deref(), req.new_password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(AppError::validation("Email and password are required").into()),
    };

    state
        .auth_service
        .set_credential_by_email(email, new_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password set successfully. You can now login.".to_string(),
    })
    .into_response())
}
