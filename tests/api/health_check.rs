use crate::helpers::spawn_app;

#[actix_web::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get("/util/health_check").await;

    assert!(response.status().is_success());
    assert_eq!(Some(14), response.content_length());
}

#[actix_web::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;

    let response = app.get("/api-docs/openapi.json").await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("openapi should be json");
    assert!(body["paths"]
        .get("/service_center/orders/{order_id}/status")
        .is_some());
}
