use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use uuid::Uuid;

use super::repository;
use crate::system::auth::password;

fn validate_email(email: &Option<String>) -> Result<()> {
    if let Some(email) = email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }
    Ok(())
}

/// Create a new user
pub async fn create(dto: CreateUserDto) -> Result<Uuid> {
    if dto.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::find_by_username(&dto.username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    validate_email(&dto.email)?;
    password::validate_password_strength(&dto.password)?;

    let password_hash = password::hash_password(&dto.password)?;

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        username: dto.username,
        email: dto.email,
        display_name: dto.display_name,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now,
        updated_at: now,
        last_login_at: None,
    };

    repository::insert(&user, &password_hash).await?;

    Ok(user.id)
}

/// Update user
pub async fn update(dto: UpdateUserDto) -> Result<()> {
    let mut user = repository::find_by_id(dto.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    validate_email(&dto.email)?;

    user.email = dto.email;
    user.display_name = dto.display_name;
    user.is_active = dto.is_active;
    user.is_admin = dto.is_admin;
    user.updated_at = Utc::now();

    repository::update(&user).await?;

    Ok(())
}

/// Delete user
pub async fn delete(id: Uuid) -> Result<bool> {
    repository::delete(id).await
}

/// Get user by ID
pub async fn get_by_id(id: Uuid) -> Result<Option<User>> {
    repository::find_by_id(id).await
}

/// List all users
pub async fn list_all() -> Result<Vec<User>> {
    repository::list_all().await
}

/// Change user password
pub async fn change_password(dto: ChangePasswordDto, requester_id: Uuid) -> Result<()> {
    repository::find_by_id(dto.user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    let requester = repository::find_by_id(requester_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Requester not found"))?;

    if dto.user_id != requester_id {
        // Changing someone else's password - must be admin; the old
        // password is not required then.
        if !requester.is_admin {
            return Err(anyhow::anyhow!("Permission denied"));
        }
    } else if let Some(ref old_password) = dto.old_password {
        let current_hash = repository::password_hash_for(dto.user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

        if !password::verify_password(old_password, &current_hash)? {
            return Err(anyhow::anyhow!("Invalid old password"));
        }
    }

    password::validate_password_strength(&dto.new_password)?;

    let new_hash = password::hash_password(&dto.new_password)?;
    repository::update_password(dto.user_id, &new_hash).await?;

    Ok(())
}

/// Verify user credentials (for login)
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<User>> {
    let user = match repository::find_by_username(username).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        return Err(anyhow::anyhow!("User account is inactive"));
    }

    let password_hash = repository::password_hash_for(user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(user.id).await;

    Ok(Some(user))
}
