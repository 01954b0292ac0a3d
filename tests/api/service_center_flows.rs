use fake::faker::internet::en::Username;
use fake::Fake;
use sqlx::PgPool;
use uuid::Uuid;

use crate::helpers::{spawn_app, TestApp};

fn register_body(username: &str, pincode: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": "s3cret-pass",
        "name": "Metro Service Hub",
        "email": "hub@example.com",
        "mobile_no": "9876543210",
        "address": "4 Canal Road",
        "district": "Ernakulam",
        "pincode": pincode
    })
}

fn unique_username() -> String {
    let username: String = Username().fake();
    format!("{}_{}", username, &Uuid::new_v4().simple().to_string()[..8])
}

fn unique_pincode() -> String {
    (Uuid::new_v4().as_u128() % 900_000 + 100_000).to_string()
}

async fn register(app: &TestApp, username: &str, pincode: &str) -> Uuid {
    let response = app
        .post_json("/service_center/register", &register_body(username, pincode))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "201");
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}

async fn insert_customer(pool: &PgPool, district: &str, pincode: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO user_profile (id, user_id, full_name, email, mobile_no, address, district, pincode, created_at)
        VALUES ($1, $2, 'Meera Nair', 'meera@example.com', '9876500003', '3 Lake View', $3, $4, now())"#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(district)
    .bind(pincode)
    .execute(pool)
    .await
    .expect("Failed to insert customer");
    user_id
}

async fn insert_pending_order(pool: &PgPool, pincode: &str) -> Uuid {
    let order_id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO customer_order (id, user_id, service_name, address, district, pincode, mobile_no, status, created_at)
        VALUES ($1, $2, 'AC Service', '9 Beach Road', 'ERNAKULAM', $3, '9876500002', 'pending', now())"#,
    )
    .bind(order_id)
    .bind(Uuid::new_v4())
    .bind(pincode)
    .execute(pool)
    .await
    .expect("Failed to insert order");
    order_id
}

#[actix_web::test]
async fn dashboard_without_user_id_returns_400() {
    let app = spawn_app().await;

    let response = app.get("/service_center/dashboard").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["customer_message"], "User ID required");
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn register_login_and_update_profile() {
    let app = spawn_app().await;
    let username = unique_username();
    let service_center_id = register(&app, &username, "682001").await;

    let duplicate = app
        .post_json("/service_center/register", &register_body(&username, "682001"))
        .await;
    assert_eq!(duplicate.status().as_u16(), 400);

    let login = app
        .post_json(
            "/service_center/login",
            &serde_json::json!({"username": username, "password": "s3cret-pass"}),
        )
        .await;
    assert_eq!(login.status().as_u16(), 200);
    let body: serde_json::Value = login.json().await.unwrap();
    assert_eq!(body["customer_message"], "Login Successful");
    assert_eq!(body["data"]["user_id"], service_center_id.to_string());

    let wrong_password = app
        .post_json(
            "/service_center/login",
            &serde_json::json!({"username": username, "password": "wrong-pass"}),
        )
        .await;
    assert_eq!(wrong_password.status().as_u16(), 401);

    let unknown = app
        .post_json(
            "/service_center/login",
            &serde_json::json!({"username": unique_username(), "password": "s3cret-pass"}),
        )
        .await;
    assert_eq!(unknown.status().as_u16(), 404);

    let updated = app
        .put_json(
            &format!("/service_center/profile?user_id={}", service_center_id),
            &serde_json::json!({"address": "15 Marine Drive"}),
        )
        .await;
    assert_eq!(updated.status().as_u16(), 200);
    let body: serde_json::Value = updated.json().await.unwrap();
    assert_eq!(body["customer_message"], "Profile Updated");
    assert_eq!(body["data"]["address"], "15 Marine Drive");
    assert_eq!(body["data"]["username"], username);

    let dashboard = app
        .get(&format!("/service_center/dashboard?user_id={}", service_center_id))
        .await;
    assert_eq!(dashboard.status().as_u16(), 200);
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn pending_order_can_only_be_actioned_once() {
    let app = spawn_app().await;
    let pincode = unique_pincode();
    let service_center_id = register(&app, &unique_username(), &pincode).await;
    let order_id = insert_pending_order(&app.db_pool, &pincode).await;

    let orders = app
        .get(&format!("/service_center/orders?user_id={}", service_center_id))
        .await;
    assert_eq!(orders.status().as_u16(), 200);
    let body: serde_json::Value = orders.json().await.unwrap();
    assert!(body["data"]["counts"]["pending"].as_u64().unwrap() >= 1);

    let invalid = app
        .post_json(
            &format!("/service_center/orders/{}/status", order_id),
            &serde_json::json!({"action": "hold", "user_id": service_center_id}),
        )
        .await;
    assert_eq!(invalid.status().as_u16(), 400);

    let accepted = app
        .post_json(
            &format!("/service_center/orders/{}/status", order_id),
            &serde_json::json!({"action": "accept", "user_id": service_center_id}),
        )
        .await;
    assert_eq!(accepted.status().as_u16(), 200);
    let body: serde_json::Value = accepted.json().await.unwrap();
    assert_eq!(body["customer_message"], "Order Accepted Successfully");

    let assigned: Option<Uuid> =
        sqlx::query_scalar("SELECT service_center_id FROM customer_order WHERE id = $1")
            .bind(order_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(assigned, Some(service_center_id));

    let rejected = app
        .post_json(
            &format!("/service_center/orders/{}/status", order_id),
            &serde_json::json!({"action": "reject", "user_id": service_center_id}),
        )
        .await;
    assert_eq!(rejected.status().as_u16(), 404);
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn cancelled_orders_use_latest_reason() {
    let app = spawn_app().await;
    let pincode = unique_pincode();
    let service_center_id = register(&app, &unique_username(), &pincode).await;
    let order_id = insert_pending_order(&app.db_pool, &pincode).await;
    sqlx::query("UPDATE customer_order SET status = 'cancelled' WHERE id = $1")
        .bind(order_id)
        .execute(&app.db_pool)
        .await
        .unwrap();
    for (reason, offset) in [("Too costly", "2 minutes"), ("Found another shop", "1 minute")] {
        sqlx::query(
            "INSERT INTO cancel_details (id, order_id, reason, created_at) VALUES ($1, $2, $3, now() - $4::interval)",
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(reason)
        .bind(offset)
        .execute(&app.db_pool)
        .await
        .unwrap();
    }

    let response = app
        .get(&format!(
            "/service_center/orders/cancelled?user_id={}",
            service_center_id
        ))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let rows: Vec<&serde_json::Value> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|row| row["id"] == order_id.to_string())
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["reason"], "Found another shop");
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn order_action_checks_order_before_body() {
    let app = spawn_app().await;
    let pincode = unique_pincode();
    let service_center_id = register(&app, &unique_username(), &pincode).await;
    let unknown_order = format!(
        "/service_center/orders/{}/status?user_id={}",
        Uuid::new_v4(),
        service_center_id
    );

    let no_body = app
        .api_client
        .post(format!("{}{}", &app.address, unknown_order))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(no_body.status().as_u16(), 404);
    let body: serde_json::Value = no_body.json().await.unwrap();
    assert_eq!(body["customer_message"], "Order not found or not pending");

    let numeric_action = app
        .post_json(&unknown_order, &serde_json::json!({"action": 1}))
        .await;
    assert_eq!(numeric_action.status().as_u16(), 404);

    let order_id = insert_pending_order(&app.db_pool, &pincode).await;
    let pending_order = format!(
        "/service_center/orders/{}/status?user_id={}",
        order_id, service_center_id
    );
    let numeric_action = app
        .post_json(&pending_order, &serde_json::json!({"action": 1}))
        .await;
    assert_eq!(numeric_action.status().as_u16(), 400);
    let body: serde_json::Value = numeric_action.json().await.unwrap();
    assert_eq!(body["customer_message"], "Invalid Action");

    let rejected = app
        .post_json(&pending_order, &serde_json::json!({"action": "reject"}))
        .await;
    assert_eq!(rejected.status().as_u16(), 200);
    let body: serde_json::Value = rejected.json().await.unwrap();
    assert_eq!(body["customer_message"], "Order Rejected");
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn blank_query_user_id_falls_back_to_body() {
    let app = spawn_app().await;
    let service_center_id = register(&app, &unique_username(), &unique_pincode()).await;

    let response = app
        .put_json(
            "/service_center/profile?user_id=",
            &serde_json::json!({"user_id": service_center_id, "name": "Renamed Hub"}),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Renamed Hub");
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn profile_update_guards_username_and_rehashes_password() {
    let app = spawn_app().await;
    let pincode = unique_pincode();
    let taken_username = unique_username();
    register(&app, &taken_username, &pincode).await;
    let username = unique_username();
    let service_center_id = register(&app, &username, &pincode).await;
    let profile = format!("/service_center/profile?user_id={}", service_center_id);

    let taken = app
        .put_json(&profile, &serde_json::json!({"username": taken_username}))
        .await;
    assert_eq!(taken.status().as_u16(), 400);
    let body: serde_json::Value = taken.json().await.unwrap();
    assert_eq!(body["customer_message"], "Username already taken");

    let changed = app
        .put_json(&profile, &serde_json::json!({"password": "n3w-secret"}))
        .await;
    assert_eq!(changed.status().as_u16(), 200);

    let stored: String = sqlx::query_scalar("SELECT password FROM service_center WHERE id = $1")
        .bind(service_center_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert!(stored.starts_with("$argon2id$"));

    let old_login = app
        .post_json(
            "/service_center/login",
            &serde_json::json!({"username": username, "password": "s3cret-pass"}),
        )
        .await;
    assert_eq!(old_login.status().as_u16(), 401);

    let new_login = app
        .post_json(
            "/service_center/login",
            &serde_json::json!({"username": username, "password": "n3w-secret"}),
        )
        .await;
    assert_eq!(new_login.status().as_u16(), 200);
}

#[actix_web::test]
#[ignore = "requires a migrated postgres database"]
async fn area_listings_follow_district_and_pincode() {
    let app = spawn_app().await;
    let pincode = unique_pincode();
    let service_center_id = register(&app, &unique_username(), &pincode).await;

    let local_customer = insert_customer(&app.db_pool, "ernakulam", &pincode).await;
    let other_district = insert_customer(&app.db_pool, "Thrissur", &pincode).await;
    let order_id = insert_pending_order(&app.db_pool, &pincode).await;
    for (user_id, subject) in [(local_customer, "Late visit"), (other_district, "Wrong part")] {
        sqlx::query(
            "INSERT INTO order_complaint (id, order_id, user_id, subject, message, created_at) VALUES ($1, $2, $3, $4, 'Please check', now())",
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(user_id)
        .bind(subject)
        .execute(&app.db_pool)
        .await
        .unwrap();
    }
    for (rating, offset) in [(3_i16, "2 minutes"), (5_i16, "1 minute")] {
        sqlx::query(
            "INSERT INTO order_feedback (id, order_id, user_id, rating, message, pincode, created_at) VALUES ($1, $2, $3, $4, NULL, $5, now() - $6::interval)",
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(local_customer)
        .bind(rating)
        .bind(&pincode)
        .bind(offset)
        .execute(&app.db_pool)
        .await
        .unwrap();
    }
    for contact_pincode in [pincode.as_str(), "100001"] {
        sqlx::query(
            "INSERT INTO contact (id, name, email, mobile_no, message, pincode, created_at) VALUES ($1, 'Ravi', NULL, '9876500004', 'Need a quote', $2, now())",
        )
        .bind(Uuid::new_v4())
        .bind(contact_pincode)
        .execute(&app.db_pool)
        .await
        .unwrap();
    }

    let orders = app
        .get(&format!("/service_center/orders?user_id={}", service_center_id))
        .await;
    assert_eq!(orders.status().as_u16(), 200);
    let body: serde_json::Value = orders.json().await.unwrap();
    assert_eq!(body["data"]["counts"]["total"], 1);
    assert_eq!(body["data"]["counts"]["pending"], 1);
    let complaints = body["data"]["complaints"].as_array().unwrap();
    assert_eq!(complaints.len(), 1);
    assert_eq!(complaints[0]["subject"], "Late visit");
    assert_eq!(complaints[0]["customer_name"], "Meera Nair");

    let customers = app
        .get(&format!("/service_center/customers?user_id={}", service_center_id))
        .await;
    assert_eq!(customers.status().as_u16(), 200);
    let body: serde_json::Value = customers.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let feedback_contacts = app
        .get(&format!(
            "/service_center/feedback_contacts?user_id={}",
            service_center_id
        ))
        .await;
    assert_eq!(feedback_contacts.status().as_u16(), 200);
    let body: serde_json::Value = feedback_contacts.json().await.unwrap();
    let feedbacks = body["data"]["feedbacks"].as_array().unwrap();
    assert_eq!(feedbacks.len(), 2);
    assert_eq!(feedbacks[0]["rating"], 5);
    assert_eq!(feedbacks[1]["rating"], 3);
    assert_eq!(body["data"]["contacts"].as_array().unwrap().len(), 1);
}
