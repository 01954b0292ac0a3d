use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::GenericError;
use crate::impl_json_request;

fn validate_pincode(pincode: &str) -> Result<(), ValidationError> {
    if pincode.len() == 6 && pincode.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("pincode").with_message("pincode must be 6 digits".into()))
    }
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct RegisterServiceCenterRequest {
    #[validate(length(min = 1, max = 150, message = "username is required"))]
    pub username: String,
    #[schema(value_type = String)]
    pub password: SecretString,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 10, max = 15, message = "mobile_no must be 10 to 15 characters"))]
    pub mobile_no: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "district is required"))]
    pub district: String,
    #[validate(custom(function = "validate_pincode"))]
    pub pincode: String,
}

impl_json_request!(RegisterServiceCenterRequest);

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    #[schema(value_type = Option<String>)]
    pub password: Option<SecretString>,
}

impl_json_request!(LoginRequest);

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct UpdateServiceCenterRequest {
    #[validate(length(min = 1, max = 150, message = "username cannot be empty"))]
    pub username: Option<String>,
    #[schema(value_type = Option<String>)]
    pub password: Option<SecretString>,
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "invalid email"))]
    pub email: Option<String>,
    #[validate(length(min = 10, max = 15, message = "mobile_no must be 10 to 15 characters"))]
    pub mobile_no: Option<String>,
    #[validate(length(min = 1, message = "address cannot be empty"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "district cannot be empty"))]
    pub district: Option<String>,
    #[validate(custom(function = "validate_pincode"))]
    pub pincode: Option<String>,
}

impl_json_request!(UpdateServiceCenterRequest);

/// `user_id` as sent by the service center app. Kept as a string so that a
/// malformed id is reported the same way as a missing one.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServiceCenterQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Clone, sqlx::FromRow, ToSchema)]
pub struct ServiceCenterAccount {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub mobile_no: String,
    pub address: String,
    pub district: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl FromRequest for ServiceCenterAccount {
    type Error = GenericError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let value = req.extensions().get::<ServiceCenterAccount>().cloned();

        let result = match value {
            Some(service_center) => Ok(service_center),
            None => Err(GenericError::UnexpectedCustomError(
                "Something went wrong while parsing service center detail".to_string(),
            )),
        };

        ready(result)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginData {
    pub user_id: Uuid,
    pub username: String,
    pub district: String,
    pub pincode: String,
}
