pub const USER_ID_REQUIRED: &str = "User ID required";
pub const SERVICE_CENTER_ID_REQUIRED: &str = "Service Center ID required";
pub const SERVICE_NAME: &str = "service-center";
