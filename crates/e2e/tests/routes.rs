//! End-to-end tests for the HTTP route surface.

use loginwall_e2e::{ServerConfig, ServerHandle};

async fn spawn() -> ServerHandle {
    ServerHandle::spawn(ServerConfig::default())
        .await
        .expect("server should start")
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let server = spawn().await;

    let resp = reqwest::get(format!("{}/api/health", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "loginwall-web");
}

#[tokio::test]
async fn both_routes_serve_the_spa_shell() {
    let server = spawn().await;

    for path in ["/", "/welcome"] {
        let resp = reqwest::get(format!("{}{}", server.base_url(), path))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "path {}", path);
        let html = resp.text().await.unwrap();
        // Same shell either way; the client-side guard picks the view.
        assert!(html.contains("<div id=\"app\">"), "path {}", path);
    }
}

#[tokio::test]
async fn assets_are_served() {
    let server = spawn().await;

    let resp = reqwest::get(format!("{}/assets/app.js", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"],
        "application/javascript"
    );
    let js = resp.text().await.unwrap();
    assert!(js.contains("isLoggedIn"));
}

#[tokio::test]
async fn unknown_paths_are_404() {
    let server = spawn().await;

    let resp = reqwest::get(format!("{}/no/such/route", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn static_dir_overrides_the_embedded_ui() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<html><body><div id=\"app\">custom shell</div></body></html>",
    )
    .unwrap();

    let server = ServerHandle::spawn(ServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .await
    .expect("server should start");

    let html = reqwest::get(format!("{}/", server.base_url()))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("custom shell"));
}
