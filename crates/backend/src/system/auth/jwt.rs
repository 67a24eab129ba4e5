use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use uuid::Uuid;

use crate::shared::config::get_config;

const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 30;

/// Generate a JWT access token; lifetime comes from `[auth]` config.
pub async fn generate_access_token(
    user_id: Uuid,
    username: &str,
    is_admin: bool,
) -> Result<String> {
    let now = Utc::now();
    let lifetime = chrono::Duration::hours(get_config().auth.access_token_hours);

    let claims = TokenClaims {
        sub: user_id,
        username: username.to_string(),
        is_admin,
        exp: (now + lifetime).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let secret = get_jwt_secret().await?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate refresh token (UUID-based)
pub fn generate_refresh_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn refresh_token_expiration() -> DateTime<Utc> {
    Utc::now() + chrono::Duration::days(REFRESH_TOKEN_LIFETIME_DAYS)
}

/// Resolve the signing secret: config override first, then the settings
/// table, generating and persisting one on first use.
async fn get_jwt_secret() -> Result<String> {
    if let Some(secret) = &get_config().auth.jwt_secret {
        return Ok(secret.clone());
    }

    match read_secret_from_settings().await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            let _ = store_secret_in_settings(&secret).await;
            Ok(secret)
        }
    }
}

/// Generate a cryptographically secure secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn read_secret_from_settings() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM app_settings WHERE key = ?",
            ["jwt_secret".into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let secret: String = row.try_get("", "value")?;
            Ok(Some(secret))
        }
        None => Ok(None),
    }
}

async fn store_secret_in_settings(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();
    let now = Utc::now().to_rfc3339();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR REPLACE INTO app_settings (key, value, updated_at) VALUES (?, ?, ?)",
        ["jwt_secret".into(), secret.to_string().into(), now.into()],
    ))
    .await?;

    Ok(())
}
