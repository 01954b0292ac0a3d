use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use utoipa::TupleUnit;
use validator::Validate;

use super::errors::AuthError;
use super::schemas::{
    LoginData, LoginRequest, RegisterServiceCenterRequest, ServiceCenterAccount,
    ServiceCenterQuery, UpdateServiceCenterRequest,
};
use super::utils::{
    fetch_credentials_by_username, get_login_credentials, register_service_center,
    update_service_center, validate_password_strength, verify_password,
};
use crate::schemas::GenericResponse;
use crate::utils::validation_error_message;

#[utoipa::path(
    post,
    path = "/service_center/register",
    tag = "Service Center Authentication",
    request_body(content = RegisterServiceCenterRequest, description = "Request Body"),
    responses(
        (status=201, description= "Registered Successfully", body= GenericResponse<ServiceCenterAccount>),
        (status=400, description= "Invalid request body or username taken", body= GenericResponse<TupleUnit>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(
    err,
    name = "Service Center Registration API",
    skip(pool, body),
    fields(username = %body.username)
)]
pub async fn register(
    body: RegisterServiceCenterRequest,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AuthError> {
    body.validate()
        .map_err(|e| AuthError::ValidationStringError(validation_error_message(&e)))?;
    validate_password_strength(&body.password)?;

    let service_center = register_service_center(&pool, body).await?;
    tracing::info!(service_center_id = %service_center.id, "Registered service center");
    Ok(HttpResponse::Created().json(GenericResponse::created(
        "Registered Successfully",
        Some(service_center),
    )))
}

#[utoipa::path(
    post,
    path = "/service_center/login",
    tag = "Service Center Authentication",
    request_body(content = LoginRequest, description = "Request Body"),
    responses(
        (status=200, description= "Login Successful", body= GenericResponse<LoginData>),
        (status=400, description= "Missing username or password", body= GenericResponse<TupleUnit>),
        (status=401, description= "Invalid password", body= GenericResponse<TupleUnit>),
        (status=404, description= "Username not found", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(err, name = "Service Center Login API", skip(pool, body), fields(username = tracing::field::Empty))]
pub async fn login(
    body: LoginRequest,
    pool: web::Data<PgPool>,
) -> Result<web::Json<GenericResponse<LoginData>>, AuthError> {
    let (username, password) = get_login_credentials(body)?;
    tracing::Span::current().record("username", tracing::field::display(&username));

    let credentials = fetch_credentials_by_username(&pool, &username)
        .await
        .map_err(|e| {
            AuthError::DatabaseError(
                "Something went wrong while fetching credentials".to_string(),
                e,
            )
        })?
        .ok_or_else(|| AuthError::UsernameNotFound("Username not found".to_string()))?;

    verify_password(password, credentials.password_hash()).await?;

    Ok(web::Json(GenericResponse::success(
        "Login Successful",
        Some(LoginData {
            user_id: credentials.id,
            username: credentials.username,
            district: credentials.district,
            pincode: credentials.pincode,
        }),
    )))
}

#[utoipa::path(
    get,
    path = "/service_center/dashboard",
    tag = "Service Center Profile",
    params(ServiceCenterQuery),
    responses(
        (status=200, description= "Service center dashboard", body= GenericResponse<ServiceCenterAccount>),
        (status=400, description= "User ID required", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(name = "Service Center Dashboard API", skip(service_center), fields(service_center_id = %service_center.id))]
pub async fn dashboard(
    service_center: ServiceCenterAccount,
) -> web::Json<GenericResponse<ServiceCenterAccount>> {
    web::Json(GenericResponse::success(
        "Successfully fetched dashboard",
        Some(service_center),
    ))
}

#[utoipa::path(
    get,
    path = "/service_center/profile",
    tag = "Service Center Profile",
    params(ServiceCenterQuery),
    responses(
        (status=200, description= "Service center profile", body= GenericResponse<ServiceCenterAccount>),
        (status=400, description= "Service Center ID required", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(name = "Fetch Service Center Profile API", skip(service_center), fields(service_center_id = %service_center.id))]
pub async fn fetch_profile(
    service_center: ServiceCenterAccount,
) -> web::Json<GenericResponse<ServiceCenterAccount>> {
    web::Json(GenericResponse::success(
        "Successfully fetched profile",
        Some(service_center),
    ))
}

#[utoipa::path(
    put,
    path = "/service_center/profile",
    tag = "Service Center Profile",
    params(ServiceCenterQuery),
    request_body(content = UpdateServiceCenterRequest, description = "Fields to update"),
    responses(
        (status=200, description= "Profile Updated", body= GenericResponse<ServiceCenterAccount>),
        (status=400, description= "Invalid request body or username taken", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(
    err,
    name = "Update Service Center Profile API",
    skip(pool, body, service_center),
    fields(service_center_id = %service_center.id)
)]
pub async fn update_profile(
    body: UpdateServiceCenterRequest,
    pool: web::Data<PgPool>,
    service_center: ServiceCenterAccount,
) -> Result<web::Json<GenericResponse<ServiceCenterAccount>>, AuthError> {
    body.validate()
        .map_err(|e| AuthError::ValidationStringError(validation_error_message(&e)))?;
    let updated = update_service_center(&pool, service_center.id, body).await?;
    Ok(web::Json(GenericResponse::success(
        "Profile Updated",
        Some(updated),
    )))
}
