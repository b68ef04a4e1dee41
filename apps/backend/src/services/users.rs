//! User directory operations: register, login, identity resolution.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::users::{self, User};

/// Minimum credential length accepted at registration.
const MIN_PASSWORD_LEN: usize = 3;

/// Register a new user with a unique username.
///
/// The username is also guarded by a unique index, so a concurrent
/// duplicate registration surfaces as the same conflict.
pub async fn register<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<User, DomainError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(DomainError::validation_other(
            "Please provide username and password",
        ));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation_other(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    if users::find_by_username(conn, username).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::UserExists,
            "User already exists",
        ));
    }

    let user = users::create_user(conn, username, password).await?;
    info!(user_id = user.id, "user registered");
    Ok(user)
}

/// Authenticate by username and credential.
///
/// Unknown user and wrong password return the same error on purpose, so a
/// caller cannot probe which usernames exist.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<User, DomainError> {
    if username.is_empty() || password.is_empty() {
        return Err(DomainError::validation_other(
            "Please provide username and password",
        ));
    }

    let user = users::find_by_username(conn, username).await?;
    match user {
        Some(user) if user.password == password => Ok(user),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidCredentials,
            "User not found or password incorrect",
        )),
    }
}
