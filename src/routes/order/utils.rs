use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::schemas::{CancelledOrder, Complaint, Order, OrderAction, OrderStatus};

const ORDER_COLUMNS: &str = "o.id, o.user_id, o.service_name, o.description, o.address, o.district, o.pincode, o.mobile_no, o.status, o.service_center_id, o.created_at, o.updated_at";

#[tracing::instrument(name = "Fetch orders by area", skip(pool))]
pub async fn fetch_orders_by_area(
    pool: &PgPool,
    district: &str,
    pincode: &str,
) -> Result<Vec<Order>, anyhow::Error> {
    let query = format!(
        r#"SELECT {} FROM customer_order AS o
        WHERE LOWER(o.district) = LOWER($1) AND o.pincode = $2
        ORDER BY o.created_at DESC"#,
        ORDER_COLUMNS
    );
    let rows = sqlx::query_as::<_, Order>(&query)
        .bind(district)
        .bind(pincode)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[tracing::instrument(name = "Fetch complaints by area", skip(pool))]
pub async fn fetch_complaints_by_area(
    pool: &PgPool,
    district: &str,
    pincode: &str,
) -> Result<Vec<Complaint>, anyhow::Error> {
    let rows = sqlx::query_as::<_, Complaint>(
        r#"SELECT c.id, c.order_id, c.user_id, p.full_name AS customer_name, c.subject, c.message, c.created_at
        FROM order_complaint AS c
        INNER JOIN user_profile AS p ON p.user_id = c.user_id
        WHERE LOWER(p.district) = LOWER($1) AND p.pincode = $2
        ORDER BY c.created_at DESC"#,
    )
    .bind(district)
    .bind(pincode)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[tracing::instrument(name = "Fetch pending order", skip(pool))]
pub async fn fetch_pending_order(
    pool: &PgPool,
    order_id: Uuid,
) -> Result<Option<Order>, anyhow::Error> {
    let query = format!(
        "SELECT {} FROM customer_order AS o WHERE o.id = $1 AND o.status = $2",
        ORDER_COLUMNS
    );
    let row = sqlx::query_as::<_, Order>(&query)
        .bind(order_id)
        .bind(OrderStatus::Pending)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Moves a pending order to the status implied by `action`. Returns `false`
/// when the order stopped being pending before the update ran.
#[tracing::instrument(name = "Apply order action", skip(pool))]
pub async fn apply_order_action(
    pool: &PgPool,
    order_id: Uuid,
    action: OrderAction,
    service_center_id: Uuid,
) -> Result<bool, anyhow::Error> {
    let assigned_service_center = match action {
        OrderAction::Accept => Some(service_center_id),
        OrderAction::Reject => None,
    };
    let result = sqlx::query(
        r#"UPDATE customer_order SET
            status = $2,
            service_center_id = COALESCE($3, service_center_id),
            updated_at = $4
        WHERE id = $1 AND status = $5"#,
    )
    .bind(order_id)
    .bind(action.target_status())
    .bind(assigned_service_center)
    .bind(Utc::now())
    .bind(OrderStatus::Pending)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

#[tracing::instrument(name = "Fetch cancelled orders", skip(pool))]
pub async fn fetch_cancelled_orders(
    pool: &PgPool,
    pincode: &str,
) -> Result<Vec<CancelledOrder>, anyhow::Error> {
    let query = format!(
        r#"SELECT {}, c.reason, c.created_at AS cancelled_at
        FROM customer_order AS o
        INNER JOIN LATERAL (
            SELECT reason, created_at FROM cancel_details
            WHERE cancel_details.order_id = o.id
            ORDER BY created_at DESC
            LIMIT 1
        ) AS c ON TRUE
        WHERE o.pincode = $1
        ORDER BY o.created_at DESC"#,
        ORDER_COLUMNS
    );
    let rows = sqlx::query_as::<_, CancelledOrder>(&query)
        .bind(pincode)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
