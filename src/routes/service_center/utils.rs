use anyhow::{anyhow, Context};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use uuid::Uuid;

use super::errors::AuthError;
use super::models::ServiceCenterCredentialModel;
use super::schemas::{
    LoginRequest, RegisterServiceCenterRequest, ServiceCenterAccount, UpdateServiceCenterRequest,
};
use crate::utils::spawn_blocking_with_tracing;

const USERNAME_TAKEN: &str = "Username already taken";

fn compute_password_hash(password: SecretString) -> Result<SecretString, anyhow::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let params =
        Params::new(15000, 2, 1, None).map_err(|e| anyhow!("Invalid argon2 params: {}", e))?;
    let password_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?
        .to_string();
    Ok(SecretString::from(password_hash))
}

#[tracing::instrument(
    name = "Validate credentials",
    skip(expected_password_hash, password_candidate)
)]
fn verify_password_hash(
    expected_password_hash: SecretString,
    password_candidate: SecretString,
) -> Result<(), AuthError> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .map_err(|e| anyhow!("Failed to parse hash in PHC string format: {}", e))?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .map_err(|_| AuthError::InvalidCredentials("Invalid password".to_string()))
}

#[tracing::instrument(name = "Hash password", skip(password))]
pub async fn hash_password(password: SecretString) -> Result<SecretString, anyhow::Error> {
    spawn_blocking_with_tracing(move || compute_password_hash(password))
        .await
        .context("Failed to spawn blocking task.")?
        .context("Failed to hash password")
}

#[tracing::instrument(name = "Verify Password", skip(password, expected_password_hash))]
pub async fn verify_password(
    password: SecretString,
    expected_password_hash: SecretString,
) -> Result<(), AuthError> {
    spawn_blocking_with_tracing(move || verify_password_hash(expected_password_hash, password))
        .await
        .context("Failed to spawn blocking task.")?
}

/// Pulls the username and password out of a login body, treating empty
/// strings like missing fields.
pub fn get_login_credentials(body: LoginRequest) -> Result<(String, SecretString), AuthError> {
    let username = body.username.filter(|username| !username.trim().is_empty());
    let password = body
        .password
        .filter(|password| !password.expose_secret().is_empty());
    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(AuthError::ValidationStringError(
            "Please provide username and password".to_string(),
        )),
    }
}

pub fn validate_password_strength(password: &SecretString) -> Result<(), AuthError> {
    if password.expose_secret().trim().is_empty() {
        return Err(AuthError::ValidationStringError(
            "password: password is required".to_string(),
        ));
    }
    Ok(())
}

#[tracing::instrument(name = "Fetch service center", skip(pool))]
pub async fn fetch_service_center_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ServiceCenterAccount>, anyhow::Error> {
    let row = sqlx::query_as::<_, ServiceCenterAccount>(
        r#"SELECT id, username, name, email, mobile_no, address, district, pincode, created_at, updated_at
        FROM service_center WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

#[tracing::instrument(name = "Get stored credentials", skip(pool))]
pub async fn fetch_credentials_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<ServiceCenterCredentialModel>, anyhow::Error> {
    let row = sqlx::query_as::<_, ServiceCenterCredentialModel>(
        r#"SELECT id, username, password, district, pincode FROM service_center WHERE username = $1"#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

#[tracing::instrument(name = "Check username exists", skip(pool))]
pub async fn username_exists(
    pool: &PgPool,
    username: &str,
    exclude_id: Option<Uuid>,
) -> Result<bool, anyhow::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM service_center WHERE username = $1 AND ($2::uuid IS NULL OR id <> $2))"#,
    )
    .bind(username)
    .bind(exclude_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

fn map_write_error(error: sqlx::Error, message: &str) -> AuthError {
    let is_unique_violation = matches!(
        &error,
        sqlx::Error::Database(db_error) if db_error.is_unique_violation()
    );
    if is_unique_violation {
        return AuthError::DuplicateUsername(USERNAME_TAKEN.to_string());
    }
    tracing::error!("Failed to execute query: {:?}", error);
    AuthError::DatabaseError(message.to_string(), error.into())
}

#[tracing::instrument(name = "Register service center", skip(pool, body), fields(username = %body.username))]
pub async fn register_service_center(
    pool: &PgPool,
    body: RegisterServiceCenterRequest,
) -> Result<ServiceCenterAccount, AuthError> {
    let exists = username_exists(pool, &body.username, None)
        .await
        .map_err(|e| {
            AuthError::DatabaseError(
                "Something went wrong while checking the username".to_string(),
                e,
            )
        })?;
    if exists {
        return Err(AuthError::DuplicateUsername(USERNAME_TAKEN.to_string()));
    }

    let password_hash = hash_password(body.password).await?;
    let service_center = sqlx::query_as::<_, ServiceCenterAccount>(
        r#"
        INSERT INTO service_center (id, username, password, name, email, mobile_no, address, district, pincode, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, username, name, email, mobile_no, address, district, pincode, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.username)
    .bind(password_hash.expose_secret())
    .bind(&body.name)
    .bind(&body.email)
    .bind(&body.mobile_no)
    .bind(&body.address)
    .bind(&body.district)
    .bind(&body.pincode)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        map_write_error(
            e,
            "A database failure occured while saving service center account",
        )
    })?;
    Ok(service_center)
}

#[tracing::instrument(name = "Update service center", skip(pool, body))]
pub async fn update_service_center(
    pool: &PgPool,
    id: Uuid,
    body: UpdateServiceCenterRequest,
) -> Result<ServiceCenterAccount, AuthError> {
    if let Some(username) = &body.username {
        let exists = username_exists(pool, username, Some(id))
            .await
            .map_err(|e| {
                AuthError::DatabaseError(
                    "Something went wrong while checking the username".to_string(),
                    e,
                )
            })?;
        if exists {
            return Err(AuthError::DuplicateUsername(USERNAME_TAKEN.to_string()));
        }
    }

    let password_hash = match body.password {
        Some(password) => {
            validate_password_strength(&password)?;
            Some(hash_password(password).await?)
        }
        None => None,
    };

    let service_center = sqlx::query_as::<_, ServiceCenterAccount>(
        r#"
        UPDATE service_center SET
            username = COALESCE($2, username),
            password = COALESCE($3, password),
            name = COALESCE($4, name),
            email = COALESCE($5, email),
            mobile_no = COALESCE($6, mobile_no),
            address = COALESCE($7, address),
            district = COALESCE($8, district),
            pincode = COALESCE($9, pincode),
            updated_at = $10
        WHERE id = $1
        RETURNING id, username, name, email, mobile_no, address, district, pincode, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(body.username)
    .bind(password_hash.as_ref().map(|hash| hash.expose_secret().to_string()))
    .bind(body.name)
    .bind(body.email)
    .bind(body.mobile_no)
    .bind(body.address)
    .bind(body.district)
    .bind(body.pincode)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        map_write_error(
            e,
            "A database failure occured while updating service center account",
        )
    })?;
    Ok(service_center)
}
