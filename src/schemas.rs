use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct GenericResponse<D> {
    pub status: bool,
    pub customer_message: String,
    pub code: String,
    pub data: Option<D>,
}

impl<D> GenericResponse<D> {
    // Associated function for creating a success response
    pub fn success(message: &str, data: Option<D>) -> Self {
        Self {
            status: true,
            customer_message: String::from(message),
            code: String::from("200"),
            data,
        }
    }

    // Success envelope for resources created by the request (HTTP 201)
    pub fn created(message: &str, data: Option<D>) -> Self {
        Self {
            status: true,
            customer_message: String::from(message),
            code: String::from("201"),
            data,
        }
    }

    // Associated function for creating an error response
    pub fn error(message: &str, code: &str, data: Option<D>) -> Self {
        Self {
            status: false,
            customer_message: String::from(message),
            code: String::from(code),
            data,
        }
    }
}

/// Implements `FromRequest` for a JSON request body so that malformed
/// payloads surface as a `GenericError::ValidationError` envelope instead of
/// actix's plain-text rejection.
#[macro_export]
macro_rules! impl_json_request {
    ($struct_name:ident) => {
        impl actix_web::FromRequest for $struct_name {
            type Error = $crate::errors::GenericError;
            type Future = futures::future::LocalBoxFuture<'static, Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let fut = <actix_web::web::Json<Self> as actix_web::FromRequest>::from_request(
                    req, payload,
                );

                Box::pin(async move {
                    match fut.await {
                        Ok(json) => Ok(json.into_inner()),
                        Err(e) => Err($crate::errors::GenericError::ValidationError(e.to_string())),
                    }
                })
            }
        }
    };
}
