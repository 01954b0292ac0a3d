use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::GenericError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrderAction {
    Accept,
    Reject,
}

impl FromStr for OrderAction {
    type Err = GenericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(OrderAction::Accept),
            "reject" => Ok(OrderAction::Reject),
            _ => Err(GenericError::ValidationError("Invalid Action".to_string())),
        }
    }
}

impl OrderAction {
    pub fn target_status(&self) -> OrderStatus {
        match self {
            OrderAction::Accept => OrderStatus::Accepted,
            OrderAction::Reject => OrderStatus::Rejected,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            OrderAction::Accept => "Order Accepted Successfully",
            OrderAction::Reject => "Order Rejected",
        }
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct OrderActionRequest {
    /// `accept` or `reject`
    pub action: Option<String>,
    pub user_id: Option<String>,
}

impl OrderActionRequest {
    /// Reads the body leniently: an empty or malformed body and non-string
    /// values all leave the field unset, so the order lookup still runs first.
    pub fn from_body(body: &[u8]) -> Self {
        let value: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
        let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_owned);
        Self {
            action: field("action"),
            user_id: field("user_id"),
        }
    }

    pub fn action(&self) -> Result<OrderAction, GenericError> {
        self.action.as_deref().unwrap_or_default().parse()
    }
}

#[derive(Debug, Serialize, Clone, sqlx::FromRow, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub description: Option<String>,
    pub address: String,
    pub district: String,
    pub pincode: String,
    pub mobile_no: String,
    pub status: OrderStatus,
    pub service_center_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Complaint {
    pub id: Uuid,
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub customer_name: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Default, ToSchema)]
pub struct OrderCounts {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub pending: usize,
}

impl OrderCounts {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(
            OrderCounts {
                total: orders.len(),
                ..Default::default()
            },
            |mut counts, order| {
                match order.status {
                    OrderStatus::Accepted => counts.accepted += 1,
                    OrderStatus::Rejected => counts.rejected += 1,
                    OrderStatus::Pending => counts.pending += 1,
                    OrderStatus::Cancelled => {}
                }
                counts
            },
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceCenterOrders {
    pub orders: Vec<Order>,
    pub complaints: Vec<Complaint>,
    pub counts: OrderCounts,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct CancelledOrder {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub order: Order,
    pub reason: String,
    pub cancelled_at: DateTime<Utc>,
}
