use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{http, web, Error, HttpMessage};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

use super::schemas::{ServiceCenterAccount, ServiceCenterQuery};
use super::utils::fetch_service_center_by_id;
use crate::errors::GenericError;
use crate::utils::{bytes_to_payload, is_json_request};

/// Reads the top level `user_id` of a JSON body, accepting both string and
/// numeric encodings.
pub fn get_user_id_from_body(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("user_id")? {
        serde_json::Value::String(user_id) => Some(user_id.to_owned()),
        serde_json::Value::Number(user_id) => Some(user_id.to_string()),
        _ => None,
    }
}

pub struct ServiceCenterMiddleware<S> {
    service: Rc<S>,
    missing_id_message: &'static str,
}

impl<S> Service<ServiceRequest> for ServiceCenterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<actix_web::body::BoxBody>, Error = Error>
        + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let srv = Rc::clone(&self.service);
        let missing_id_message = self.missing_id_message;
        Box::pin(async move {
            match resolve_service_center(&mut req, missing_id_message).await {
                Ok(service_center) => {
                    req.extensions_mut().insert(service_center);
                    let res = srv.call(req).await?;
                    Ok(res)
                }
                Err(e) => {
                    let (request, _pl) = req.into_parts();
                    Ok(ServiceResponse::from_err(e, request))
                }
            }
        })
    }
}

/// `user_id` from the query string, falling back to the JSON body when the
/// query value is absent or blank. The body is put back for the handler.
pub async fn get_user_id(req: &mut ServiceRequest) -> Option<String> {
    let user_id = web::Query::<ServiceCenterQuery>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().user_id)
        .filter(|user_id| !user_id.trim().is_empty());
    if user_id.is_some() {
        return user_id;
    }

    let content_type = req
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok());
    if !is_json_request(content_type) {
        return None;
    }
    match req.extract::<web::Bytes>().await {
        Ok(body) => {
            let user_id = get_user_id_from_body(&body);
            req.set_payload(bytes_to_payload(body));
            user_id
        }
        Err(e) => {
            tracing::warn!("Failed to read request body: {}", e);
            None
        }
    }
}

#[tracing::instrument(name = "Resolve service center", skip(req))]
async fn resolve_service_center(
    req: &mut ServiceRequest,
    missing_id_message: &'static str,
) -> Result<ServiceCenterAccount, GenericError> {
    let user_id = get_user_id(req).await;

    let service_center_id = user_id
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
        .ok_or_else(|| GenericError::ValidationError(missing_id_message.to_string()))?;

    let db_pool = req.app_data::<web::Data<PgPool>>().ok_or_else(|| {
        GenericError::UnexpectedCustomError("Database pool is not configured".to_string())
    })?;
    fetch_service_center_by_id(db_pool, service_center_id)
        .await
        .map_err(|e| {
            GenericError::DatabaseError(
                "Something went wrong while fetching service center".to_string(),
                e,
            )
        })?
        .ok_or_else(|| GenericError::ValidationError(missing_id_message.to_string()))
}

/// Middleware factory that resolves the calling service center from the
/// `user_id` query parameter (or JSON body field) before the handler runs.
pub struct RequireServiceCenter {
    pub missing_id_message: &'static str,
}

impl RequireServiceCenter {
    pub fn new(missing_id_message: &'static str) -> Self {
        Self { missing_id_message }
    }
}

impl<S> Transform<S, ServiceRequest> for RequireServiceCenter
where
    S: Service<ServiceRequest, Response = ServiceResponse<actix_web::body::BoxBody>, Error = Error>
        + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = ServiceCenterMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ServiceCenterMiddleware {
            service: Rc::new(service),
            missing_id_message: self.missing_id_message,
        }))
    }
}
