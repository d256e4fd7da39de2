//! Admin account management handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use posthub_core::error::AppError;
use posthub_core::types::pagination::PageResponse;
use posthub_entity::account::{Account, AccountRole};

use crate::dto::request::CreateAccountRequest;
use crate::error::ApiError;
use crate::extractors::{AuthAccount, PaginationParams};
use crate::state::AppState;

/// POST /api/admin/users
pub async fn create_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let email = req
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::validation("Email is required"))?;
    let role = req.role.unwrap_or(AccountRole::User);

    let account = state
        .admin_account_service
        .create_account(&auth, email, role)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /api/admin/users
pub async fn list_accounts(
    State(state): State<AppState>,
    auth: AuthAccount,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<Account>>, ApiError> {
    let accounts = state
        .admin_account_service
        .list_accounts(&auth, params.into_page_request())
        .await?;

    Ok(Json(accounts))
}

/// PATCH /api/admin/users/{id}/deactivate
pub async fn deactivate_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(id): Path<Uuid>,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .admin_account_service
        .deactivate_account(&auth, id)
        .await?;

    Ok(Json(account))
}
