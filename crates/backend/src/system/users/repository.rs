use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::users::User;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

const USER_COLUMNS: &str = "id, username, email, display_name, is_active, is_admin, \
     created_at, updated_at, last_login_at";

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow!("Bad timestamp {raw:?}: {e}"))
}

/// Map one `app_users` row to the typed contract. Ids and timestamps are
/// stored as text; this is the only place that conversion happens.
fn user_from_row(row: &QueryResult) -> Result<User> {
    let id: String = row.try_get("", "id")?;
    let created_at: String = row.try_get("", "created_at")?;
    let updated_at: String = row.try_get("", "updated_at")?;
    let last_login_at: Option<String> = row.try_get("", "last_login_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).with_context(|| format!("Bad user id {id:?}"))?,
        username: row.try_get("", "username")?,
        email: row.try_get("", "email")?,
        display_name: row.try_get("", "display_name")?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_admin: row.try_get::<i32>("", "is_admin")? != 0,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
        last_login_at: last_login_at.as_deref().map(parse_timestamp).transpose()?,
    })
}

/// Create user with password hash
pub async fn insert(user: &User, password_hash: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO app_users (id, username, password_hash, email, display_name, is_active, is_admin, created_at, updated_at, last_login_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        [
            user.id.to_string().into(),
            user.username.clone().into(),
            password_hash.to_string().into(),
            user.email.clone().into(),
            user.display_name.clone().into(),
            (if user.is_active { 1 } else { 0 }).into(),
            (if user.is_admin { 1 } else { 0 }).into(),
            user.created_at.to_rfc3339().into(),
            user.updated_at.to_rfc3339().into(),
            user.last_login_at.map(|t| t.to_rfc3339()).into(),
        ],
    ))
    .await
    .context("Failed to insert user")?;

    Ok(())
}

pub async fn find_by_id(id: Uuid) -> Result<Option<User>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("SELECT {USER_COLUMNS} FROM app_users WHERE id = ?"),
            [id.to_string().into()],
        ))
        .await?;

    result.as_ref().map(user_from_row).transpose()
}

pub async fn find_by_username(username: &str) -> Result<Option<User>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("SELECT {USER_COLUMNS} FROM app_users WHERE username = ?"),
            [username.into()],
        ))
        .await?;

    result.as_ref().map(user_from_row).transpose()
}

/// Get password hash for user
pub async fn password_hash_for(id: Uuid) -> Result<Option<String>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM app_users WHERE id = ?",
            [id.to_string().into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let hash: String = row.try_get("", "password_hash")?;
            Ok(Some(hash))
        }
        None => Ok(None),
    }
}

pub async fn list_all() -> Result<Vec<User>> {
    let conn = get_connection();

    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("SELECT {USER_COLUMNS} FROM app_users ORDER BY created_at DESC"),
        ))
        .await?;

    rows.iter().map(user_from_row).collect()
}

pub async fn update(user: &User) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE app_users \
         SET email = ?, display_name = ?, is_active = ?, is_admin = ?, updated_at = ? \
         WHERE id = ?",
        [
            user.email.clone().into(),
            user.display_name.clone().into(),
            (if user.is_active { 1 } else { 0 }).into(),
            (if user.is_admin { 1 } else { 0 }).into(),
            user.updated_at.to_rfc3339().into(),
            user.id.to_string().into(),
        ],
    ))
    .await
    .context("Failed to update user")?;

    Ok(())
}

pub async fn update_password(id: Uuid, password_hash: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE app_users SET password_hash = ?, updated_at = ? WHERE id = ?",
        [
            password_hash.to_string().into(),
            Utc::now().to_rfc3339().into(),
            id.to_string().into(),
        ],
    ))
    .await
    .context("Failed to update password")?;

    Ok(())
}

pub async fn update_last_login(id: Uuid) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE app_users SET last_login_at = ? WHERE id = ?",
        [Utc::now().to_rfc3339().into(), id.to_string().into()],
    ))
    .await
    .context("Failed to update last login")?;

    Ok(())
}

/// Delete user (hard delete)
pub async fn delete(id: Uuid) -> Result<bool> {
    let conn = get_connection();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM app_users WHERE id = ?",
            [id.to_string().into()],
        ))
        .await
        .context("Failed to delete user")?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_users() -> Result<usize> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as count FROM app_users".to_string(),
        ))
        .await?;

    match result {
        Some(row) => {
            let count: i64 = row.try_get("", "count")?;
            Ok(count as usize)
        }
        None => Ok(0),
    }
}
