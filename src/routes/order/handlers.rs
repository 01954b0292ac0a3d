use actix_web::web;
use sqlx::PgPool;
use utoipa::TupleUnit;
use uuid::Uuid;

use super::schemas::{
    CancelledOrder, OrderActionRequest, OrderCounts, ServiceCenterOrders,
};
use super::utils::{
    apply_order_action, fetch_cancelled_orders, fetch_complaints_by_area, fetch_orders_by_area,
    fetch_pending_order,
};
use crate::errors::GenericError;
use crate::routes::service_center::{ServiceCenterAccount, ServiceCenterQuery};
use crate::schemas::GenericResponse;

const ORDER_NOT_PENDING: &str = "Order not found or not pending";

#[utoipa::path(
    get,
    path = "/service_center/orders",
    tag = "Service Center Orders",
    params(ServiceCenterQuery),
    responses(
        (status=200, description= "Orders and complaints in the service area", body= GenericResponse<ServiceCenterOrders>),
        (status=400, description= "Service Center ID required", body= GenericResponse<TupleUnit>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(name = "List Service Center Orders API", skip(pool, service_center), fields(service_center_id = %service_center.id))]
pub async fn list_orders(
    pool: web::Data<PgPool>,
    service_center: ServiceCenterAccount,
) -> Result<web::Json<GenericResponse<ServiceCenterOrders>>, GenericError> {
    let task1 = fetch_orders_by_area(&pool, &service_center.district, &service_center.pincode);
    let task2 =
        fetch_complaints_by_area(&pool, &service_center.district, &service_center.pincode);
    let (orders_res, complaints_res) = futures::future::join(task1, task2).await;

    let orders = orders_res.map_err(|e| {
        GenericError::DatabaseError("Something went wrong while fetching orders".to_string(), e)
    })?;
    let complaints = complaints_res.map_err(|e| {
        GenericError::DatabaseError(
            "Something went wrong while fetching complaints".to_string(),
            e,
        )
    })?;
    let counts = OrderCounts::from_orders(&orders);

    Ok(web::Json(GenericResponse::success(
        "Successfully fetched orders",
        Some(ServiceCenterOrders {
            orders,
            complaints,
            counts,
        }),
    )))
}

#[utoipa::path(
    post,
    path = "/service_center/orders/{order_id}/status",
    tag = "Service Center Orders",
    params(
        ("order_id" = Uuid, Path, description = "Order to accept or reject"),
        ServiceCenterQuery
    ),
    request_body(content = OrderActionRequest, description = "Request Body"),
    responses(
        (status=200, description= "Order status updated", body= GenericResponse<TupleUnit>),
        (status=400, description= "Invalid Action or Service Center ID required", body= GenericResponse<TupleUnit>),
        (status=404, description= "Order not found or not pending", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(
    err,
    name = "Update Order Status API",
    skip(pool, body, service_center),
    fields(service_center_id = %service_center.id)
)]
pub async fn update_order_status(
    path: web::Path<Uuid>,
    body: web::Bytes,
    pool: web::Data<PgPool>,
    service_center: ServiceCenterAccount,
) -> Result<web::Json<GenericResponse<()>>, GenericError> {
    let order_id = path.into_inner();
    let order = fetch_pending_order(&pool, order_id)
        .await
        .map_err(|e| {
            GenericError::DatabaseError("Something went wrong while fetching order".to_string(), e)
        })?
        .ok_or_else(|| GenericError::NotFound(ORDER_NOT_PENDING.to_string()))?;

    let action = OrderActionRequest::from_body(&body).action()?;
    let updated = apply_order_action(&pool, order.id, action, service_center.id)
        .await
        .map_err(|e| {
            GenericError::DatabaseError(
                "Something went wrong while updating order status".to_string(),
                e,
            )
        })?;
    if !updated {
        return Err(GenericError::NotFound(ORDER_NOT_PENDING.to_string()));
    }

    tracing::info!(order_id = %order.id, status = ?action.target_status(), "Order status updated");
    Ok(web::Json(GenericResponse::success(
        action.success_message(),
        Some(()),
    )))
}

#[utoipa::path(
    get,
    path = "/service_center/orders/cancelled",
    tag = "Service Center Orders",
    params(ServiceCenterQuery),
    responses(
        (status=200, description= "Cancelled orders in the service pincode", body= GenericResponse<Vec<CancelledOrder>>),
        (status=400, description= "Service Center ID required", body= GenericResponse<TupleUnit>)
    )
)]
#[tracing::instrument(name = "List Cancelled Orders API", skip(pool, service_center), fields(service_center_id = %service_center.id))]
pub async fn list_cancelled_orders(
    pool: web::Data<PgPool>,
    service_center: ServiceCenterAccount,
) -> Result<web::Json<GenericResponse<Vec<CancelledOrder>>>, GenericError> {
    let cancelled_orders = fetch_cancelled_orders(&pool, &service_center.pincode)
        .await
        .map_err(|e| {
            GenericError::DatabaseError(
                "Something went wrong while fetching cancelled orders".to_string(),
                e,
            )
        })?;
    Ok(web::Json(GenericResponse::success(
        "Successfully fetched cancelled orders",
        Some(cancelled_orders),
    )))
}
