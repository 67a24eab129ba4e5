use axum::extract::Json;
use chrono::Utc;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use contracts::system::users::User;
use uuid::Uuid;

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;
use crate::system::error::ApiError;
use crate::system::users::service as user_service;

fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        is_admin: user.is_admin,
    }
}

/// Login handler
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let access_token = jwt::generate_access_token(user.id, &user.username, user.is_admin).await?;

    let refresh_token = jwt::generate_refresh_token();
    store_refresh_token(user.id, &refresh_token).await?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user_info(&user),
    }))
}

/// Refresh token handler
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let user_id = validate_refresh_token(&request.refresh_token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let user = user_service::get_by_id(user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let access_token = jwt::generate_access_token(user.id, &user.username, user.is_admin).await?;

    Ok(Json(RefreshResponse { access_token }))
}

/// Logout handler: revokes the refresh token
pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<(), ApiError> {
    revoke_refresh_token(&request.refresh_token).await?;
    Ok(())
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, ApiError> {
    let user = user_service::get_by_id(claims.sub)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(user_info(&user)))
}

// Refresh tokens are stored hashed; the raw token never touches the
// database.

async fn store_refresh_token(user_id: Uuid, token: &str) -> anyhow::Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO app_refresh_tokens (id, user_id, token_hash, expires_at, created_at) \
         VALUES (?, ?, ?, ?, ?)",
        [
            Uuid::new_v4().to_string().into(),
            user_id.to_string().into(),
            hash_token(token).into(),
            jwt::refresh_token_expiration().to_rfc3339().into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;

    Ok(())
}

async fn validate_refresh_token(token: &str) -> anyhow::Result<Option<Uuid>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();
    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM app_refresh_tokens \
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), Utc::now().to_rfc3339().into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let user_id: String = row.try_get("", "user_id")?;
            Ok(Some(Uuid::parse_str(&user_id)?))
        }
        None => Ok(None),
    }
}

async fn revoke_refresh_token(token: &str) -> anyhow::Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE app_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
        [Utc::now().to_rfc3339().into(), hash_token(token).into()],
    ))
    .await?;

    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hashing_is_stable_and_not_identity() {
        let token = "7b29e3da-93e8-44ad-b803-2f9b6b81c0d2";
        let first = hash_token(token);
        let second = hash_token(token);
        assert_eq!(first, second);
        assert_ne!(first, token);
        assert_eq!(first.len(), 64); // hex-encoded sha256
    }
}
