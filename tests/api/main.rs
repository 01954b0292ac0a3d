mod health_check;
mod helpers;
mod service_center_flows;
