use crate::routes::customer::{handlers as customer_handlers, schemas as customer_schemas};
use crate::routes::order::{handlers as order_handlers, schemas as order_schemas};
use crate::routes::service_center::{
    handlers as service_center_handlers, schemas as service_center_schemas,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::util::handlers::health_check,
        service_center_handlers::register,
        service_center_handlers::login,
        service_center_handlers::dashboard,
        service_center_handlers::fetch_profile,
        service_center_handlers::update_profile,
        order_handlers::list_orders,
        order_handlers::update_order_status,
        order_handlers::list_cancelled_orders,
        customer_handlers::list_customers,
        customer_handlers::list_feedback_contacts,
    ),
    components(schemas(
        service_center_schemas::RegisterServiceCenterRequest,
        service_center_schemas::LoginRequest,
        service_center_schemas::UpdateServiceCenterRequest,
        service_center_schemas::ServiceCenterAccount,
        service_center_schemas::LoginData,
        order_schemas::OrderStatus,
        order_schemas::OrderActionRequest,
        order_schemas::Order,
        order_schemas::Complaint,
        order_schemas::OrderCounts,
        order_schemas::ServiceCenterOrders,
        order_schemas::CancelledOrder,
        customer_schemas::CustomerProfile,
        customer_schemas::OrderFeedback,
        customer_schemas::Contact,
        customer_schemas::FeedbackContacts,
    )),
    tags(
        (name = "Service Center REST API", description = "Service Center API Endpoints")
    ),
)]
pub struct ApiDoc {}
