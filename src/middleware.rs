use crate::utils::bytes_to_payload;
use actix_web::body::{self, BoxBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

// Paths whose request bodies carry passwords and must never reach the logs.
const REDACTED_REQUEST_PATHS: [&str; 3] = [
    "/service_center/register",
    "/service_center/login",
    "/service_center/profile",
];

pub fn should_log_request_body(path: &str) -> bool {
    !REDACTED_REQUEST_PATHS
        .iter()
        .any(|redacted| path.trim_end_matches('/') == *redacted)
}

fn is_non_json_path(path: &str) -> bool {
    path.starts_with("/api-docs/") || path.ends_with("/health_check")
}

// Middlware for saving the request and response into the tracing
pub struct ReadReqResMiddleware<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for ReadReqResMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = Rc::clone(&self.service);
        let path = req.path().to_string();
        if is_non_json_path(&path) {
            return Box::pin(async move { svc.call(req).await });
        }

        Box::pin(async move {
            if should_log_request_body(&path) {
                let request_bytes = req.extract::<web::Bytes>().await?;
                let request_str = String::from_utf8_lossy(&request_bytes).to_string();
                tracing::info!({%path, %request_str}, "HTTP Request");
                req.set_payload(bytes_to_payload(request_bytes));
            }
            let fut = svc.call(req).await?;

            let (req, res) = fut.into_parts();
            let (res, body) = res.into_parts();
            let body_bytes = match body::to_bytes(body).await {
                Ok(bytes) => bytes,
                Err(_) => {
                    tracing::error!("Error reading response body");
                    web::Bytes::new()
                }
            };
            let response_str = String::from_utf8_lossy(&body_bytes).to_string();
            tracing::info!({%path, %response_str}, "HTTP Response");
            let res = res.set_body(BoxBody::new(body_bytes));
            Ok(ServiceResponse::new(req, res))
        })
    }
}

pub struct SaveRequestResponse;

impl<S> Transform<S, ServiceRequest> for SaveRequestResponse
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = ReadReqResMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ReadReqResMiddleware {
            service: Rc::new(service),
        }))
    }
}
