mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_admin_info() {
    let server = common::test_server();
    let created = common::create_url(&server, "https://example.com", Some("info")).await;
    let secret_key = created["secret_key"].as_str().unwrap();

    let response = server.get(&format!("/admin/{secret_key}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["key"], "info");
    assert_eq!(json["secret_key"], secret_key);
    assert_eq!(json["target_url"], "https://example.com");
    assert_eq!(json["is_active"], true);
    assert_eq!(json["url"], created["url"]);
    assert_eq!(json["admin_url"], created["admin_url"]);
}

#[tokio::test]
async fn test_admin_info_unknown_secret() {
    let server = common::test_server();

    let response = server.get("/admin/ABCDE_00000000").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        format!(
            "URL '{}/admin/ABCDE_00000000' doesn't exist",
            common::BASE_URL
        )
    );
}

#[tokio::test]
async fn test_public_key_is_not_a_secret() {
    let server = common::test_server();
    common::create_url(&server, "https://example.com", Some("public")).await;

    server.get("/admin/public").await.assert_status_not_found();
    server.delete("/admin/public").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_url() {
    let server = common::test_server();
    let created = common::create_url(&server, "https://example.com", Some("bye")).await;
    let secret_key = created["secret_key"].as_str().unwrap();

    let response = server.delete(&format!("/admin/{secret_key}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Successfully deleted shortened URL for https://example.com"
    );

    server.get("/bye").await.assert_status_not_found();
    server.get("/peek/bye").await.assert_status_not_found();
    server
        .get(&format!("/admin/{secret_key}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_twice() {
    let server = common::test_server();
    let created = common::create_url(&server, "https://example.com", None).await;
    let secret_key = created["secret_key"].as_str().unwrap();

    server
        .delete(&format!("/admin/{secret_key}"))
        .await
        .assert_status_ok();

    let response = server.delete(&format!("/admin/{secret_key}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}
