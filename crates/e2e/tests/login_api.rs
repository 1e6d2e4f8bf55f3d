//! End-to-end tests for the login API over real HTTP.

use loginwall_e2e::{ServerConfig, ServerHandle};

async fn spawn() -> ServerHandle {
    ServerHandle::spawn(ServerConfig::default())
        .await
        .expect("server should start")
}

#[tokio::test]
async fn valid_credentials_return_success() {
    let server = spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/login", server.base_url()))
        .json(&serde_json::json!({"userName": "admin", "password": "123"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["user"]["userName"], "admin");
    // The password never comes back.
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn wrong_password_returns_401_with_fixed_body() {
    let server = spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/login", server.base_url()))
        .json(&serde_json::json!({"userName": "admin", "password": "wrong"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "success": false,
            "message": "Username or password is incorrect!"
        })
    );
}

#[tokio::test]
async fn repeated_rejections_do_not_poison_the_server() {
    let server = spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/login", server.base_url());

    for _ in 0..5 {
        let resp = client
            .post(&url)
            .json(&serde_json::json!({"userName": "admin", "password": "nope"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 401);
    }

    // A good request right after a run of bad ones still succeeds.
    let resp = client
        .post(&url)
        .json(&serde_json::json!({"userName": "admin", "password": "123"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn malformed_body_is_rejected_without_crashing() {
    let server = spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/login", server.base_url());

    let resp = client
        .post(&url)
        .header("content-type", "application/json")
        .body("{this is not json")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());

    // The server is still answering afterwards.
    let resp = client
        .post(&url)
        .json(&serde_json::json!({"userName": "admin", "password": "123"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn credentials_in_the_query_string_are_ignored() {
    let server = spawn().await;
    let client = reqwest::Client::new();

    // Credentials travel in the body only; a query string carrying the
    // right pair must not authenticate an empty body.
    let resp = client
        .post(format!(
            "{}/api/login?userName=admin&password=123",
            server.base_url()
        ))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}
