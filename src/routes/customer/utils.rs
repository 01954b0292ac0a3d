use sqlx::PgPool;

use super::schemas::{Contact, CustomerProfile, OrderFeedback};

#[tracing::instrument(name = "Fetch customers by pincode", skip(pool))]
pub async fn fetch_customers_by_pincode(
    pool: &PgPool,
    pincode: &str,
) -> Result<Vec<CustomerProfile>, anyhow::Error> {
    let rows = sqlx::query_as::<_, CustomerProfile>(
        r#"SELECT id, user_id, full_name, email, mobile_no, address, district, pincode, created_at
        FROM user_profile WHERE pincode = $1 ORDER BY created_at DESC"#,
    )
    .bind(pincode)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[tracing::instrument(name = "Fetch feedback by pincode", skip(pool))]
pub async fn fetch_feedbacks_by_pincode(
    pool: &PgPool,
    pincode: &str,
) -> Result<Vec<OrderFeedback>, anyhow::Error> {
    let rows = sqlx::query_as::<_, OrderFeedback>(
        r#"SELECT id, order_id, user_id, rating, message, pincode, created_at
        FROM order_feedback WHERE pincode = $1 ORDER BY created_at DESC"#,
    )
    .bind(pincode)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[tracing::instrument(name = "Fetch contacts by pincode", skip(pool))]
pub async fn fetch_contacts_by_pincode(
    pool: &PgPool,
    pincode: &str,
) -> Result<Vec<Contact>, anyhow::Error> {
    let rows = sqlx::query_as::<_, Contact>(
        r#"SELECT id, name, email, mobile_no, message, pincode, created_at
        FROM contact WHERE pincode = $1 ORDER BY created_at DESC"#,
    )
    .bind(pincode)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
