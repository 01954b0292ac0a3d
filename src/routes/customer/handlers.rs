use actix_web::web;
use sqlx::PgPool;
use utoipa::TupleUnit;

use super::schemas::{CustomerProfile, FeedbackContacts};
use super::utils::{
    fetch_contacts_by_pincode, fetch_customers_by_pincode, fetch_feedbacks_by_pincode,
};
use crate::errors::GenericError;
use crate::routes::service_center::{ServiceCenterAccount, ServiceCenterQuery};
use crate::schemas::GenericResponse;

#[utoipa::path(
    get,
    path = "/service_center/customers",
    tag = "Service Center Customers",
    params(ServiceCenterQuery),
    responses(
        (status=200, description= "Customers in the service pincode", body= GenericResponse<Vec<CustomerProfile>>),
        (status=400, description= "Service Center ID required", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(name = "List Customers API", skip(pool, service_center), fields(service_center_id = %service_center.id))]
pub async fn list_customers(
    pool: web::Data<PgPool>,
    service_center: ServiceCenterAccount,
) -> Result<web::Json<GenericResponse<Vec<CustomerProfile>>>, GenericError> {
    let customers = fetch_customers_by_pincode(&pool, &service_center.pincode)
        .await
        .map_err(|e| {
            GenericError::DatabaseError(
                "Something went wrong while fetching customers".to_string(),
                e,
            )
        })?;
    Ok(web::Json(GenericResponse::success(
        "Successfully fetched customers",
        Some(customers),
    )))
}

#[utoipa::path(
    get,
    path = "/service_center/feedback_contacts",
    tag = "Service Center Customers",
    params(ServiceCenterQuery),
    responses(
        (status=200, description= "Feedback and contact requests in the service pincode", body= GenericResponse<FeedbackContacts>),
        (status=400, description= "Service Center ID required", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(name = "List Feedback And Contacts API", skip(pool, service_center), fields(service_center_id = %service_center.id))]
pub async fn list_feedback_contacts(
    pool: web::Data<PgPool>,
    service_center: ServiceCenterAccount,
) -> Result<web::Json<GenericResponse<FeedbackContacts>>, GenericError> {
    let task1 = fetch_feedbacks_by_pincode(&pool, &service_center.pincode);
    let task2 = fetch_contacts_by_pincode(&pool, &service_center.pincode);
    let (feedbacks_res, contacts_res) = futures::future::join(task1, task2).await;

    let feedbacks = feedbacks_res.map_err(|e| {
        GenericError::DatabaseError("Something went wrong while fetching feedback".to_string(), e)
    })?;
    let contacts = contacts_res.map_err(|e| {
        GenericError::DatabaseError("Something went wrong while fetching contacts".to_string(), e)
    })?;

    Ok(web::Json(GenericResponse::success(
        "Successfully fetched feedback and contacts",
        Some(FeedbackContacts {
            feedbacks,
            contacts,
        }),
    )))
}
