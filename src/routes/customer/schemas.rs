use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct CustomerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub mobile_no: String,
    pub address: String,
    pub district: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct OrderFeedback {
    pub id: Uuid,
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub message: Option<String>,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub message: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackContacts {
    pub feedbacks: Vec<OrderFeedback>,
    pub contacts: Vec<Contact>,
}
