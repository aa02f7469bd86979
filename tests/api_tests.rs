use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use ideabox::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;
    config.observability.metrics_enabled = false;
    // Cheap hashing keeps the suite fast
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    let state = ideabox::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    ideabox::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn credentials(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

#[tokio::test]
async fn test_register_and_login() {
    let app = spawn_app().await;

    let (status, registered) =
        send(&app, "POST", "/register", Some(credentials("ada", "lovelace"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["username"], "ada");
    assert!(registered["id"].is_string());
    assert!(registered["created"].is_string());
    assert_eq!(registered["token"].as_str().unwrap().len(), 64);

    let (status, logged_in) =
        send(&app, "POST", "/login", Some(credentials("ada", "lovelace"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in, registered);
}

#[tokio::test]
async fn test_register_twice_fails() {
    let app = spawn_app().await;

    let (status, _) = send(&app, "POST", "/register", Some(credentials("ada", "one"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/register", Some(credentials("ada", "two"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = spawn_app().await;
    send(&app, "POST", "/register", Some(credentials("ada", "lovelace"))).await;

    let (wrong_status, wrong_body) =
        send(&app, "POST", "/login", Some(credentials("ada", "babbage"))).await;
    let (unknown_status, unknown_body) =
        send(&app, "POST", "/login", Some(credentials("grace", "lovelace"))).await;

    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "Invalid username/password");
}

#[tokio::test]
async fn test_user_listing_is_sanitized() {
    let app = spawn_app().await;
    send(&app, "POST", "/register", Some(credentials("ada", "lovelace"))).await;
    send(&app, "POST", "/register", Some(credentials("grace", "hopper"))).await;

    let (status, users) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);

    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);

    for user in users {
        let fields: Vec<&str> = user.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(fields.len(), 3, "unexpected fields: {fields:?}");
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
        assert!(user.get("token").is_none());
        assert!(!user.to_string().contains("argon2"));
    }
}

#[tokio::test]
async fn test_user_body_validation() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "POST", "/register", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: No body submitted");

    let (status, body) = send(&app, "POST", "/login", Some(credentials("ada", ""))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: password should not be empty");

    let (status, _) = send(&app, "POST", "/register", Some(json!({ "username": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was stored by the rejected requests
    let (_, users) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_idea_crud() {
    let app = spawn_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/ideas",
        Some(json!({ "idea": "Tea", "description": "Brew more tea" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["idea"], "Tea");
    assert_eq!(created["description"], "Brew more tea");

    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/ideas/{id}");

    let (status, read) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "description": "Brew green tea" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["idea"], "Tea");
    assert_eq!(updated["description"], "Brew green tea");
    assert_eq!(updated["created"], created["created"]);

    let (status, list) = send(&app, "GET", "/api/ideas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([updated]));

    let (status, deleted) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "deleted": true }));

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Idea {id} not found"));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "idea": "Coffee" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_idea_validation() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "POST", "/api/ideas", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: No body submitted");

    let (status, body) = send(
        &app,
        "POST",
        "/api/ideas",
        Some(json!({ "idea": "  ", "description": "blank idea" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: idea should not be empty");

    let (_, created) = send(
        &app,
        "POST",
        "/api/ideas",
        Some(json!({ "idea": "Tea", "description": "Brew more tea" })),
    )
    .await;
    let uri = format!("/api/ideas/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "idea": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "idea": 42 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The stored idea is untouched by rejected updates
    let (_, read) = send(&app, "GET", &uri, None).await;
    assert_eq!(read, created);
}

#[tokio::test]
async fn test_ideas_are_listed_oldest_first() {
    let app = spawn_app().await;

    let mut created_ids = Vec::new();
    for n in 0..8 {
        let (status, created) = send(
            &app,
            "POST",
            "/api/ideas",
            Some(json!({ "idea": format!("Idea {n}"), "description": "queued" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        created_ids.push(created["id"].clone());
    }

    let (status, list) = send(&app, "GET", "/api/ideas", None).await;
    assert_eq!(status, StatusCode::OK);

    let list = list.as_array().unwrap();
    let listed_ids: Vec<Value> = list.iter().map(|idea| idea["id"].clone()).collect();
    assert_eq!(listed_ids, created_ids);

    let created: Vec<&str> = list.iter().map(|idea| idea["created"].as_str().unwrap()).collect();
    assert!(created.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let app = spawn_app().await;

    let description = "x".repeat(3 * 1024 * 1024);
    let body = json!({ "idea": "Huge", "description": description }).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/api/ideas")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 413);
    assert!(!body["error"].as_str().unwrap().starts_with("Validation failed"));

    let (_, list) = send(&app, "GET", "/api/ideas", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_malformed_idea_id() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/ideas/42", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid id"));

    let missing = "/api/ideas/0b6f1f0e-6a43-4f4e-9d4b-1c1d2a3b4c5d";
    let (status, _) = send(&app, "GET", missing, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
