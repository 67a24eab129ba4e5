use axum::extract::{Json, Path};
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use uuid::Uuid;

use crate::system::auth::extractor::CurrentUser;
use crate::system::error::ApiError;
use crate::system::users::service;

/// List all users (admin only)
pub async fn list(CurrentUser(_claims): CurrentUser) -> Result<Json<Vec<User>>, ApiError> {
    let users = service::list_all().await?;
    Ok(Json(users))
}

/// Get user by ID (admin only)
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = service::get_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

/// Create user (admin only)
pub async fn create(
    CurrentUser(_claims): CurrentUser,
    Json(dto): Json<CreateUserDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user_id = service::create(dto)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(serde_json::json!({ "id": user_id })))
}

/// Update user (admin only)
pub async fn update(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<Uuid>,
    Json(mut dto): Json<UpdateUserDto>,
) -> Result<(), ApiError> {
    // The path wins over whatever id the body carries
    dto.id = id;

    service::update(dto)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(())
}

/// Delete user (admin only)
pub async fn delete(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<(), ApiError> {
    let deleted = service::delete(id).await?;

    if deleted {
        Ok(())
    } else {
        Err(ApiError::NotFound)
    }
}

/// Change password (self-service, or admin for anyone)
pub async fn change_password(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<Uuid>,
    Json(mut dto): Json<ChangePasswordDto>,
) -> Result<(), ApiError> {
    dto.user_id = id;

    service::change_password(dto, claims.sub)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(())
}
