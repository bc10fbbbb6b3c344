mod common;

use axum::http::{Method, header};

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    let server = common::test_server();

    let response = server
        .method(Method::OPTIONS, "/url")
        .add_header(header::ORIGIN, "https://app.example.com")
        .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .add_header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test]
async fn test_simple_request_gets_cors_header() {
    let server = common::test_server();

    let response = server
        .get("/")
        .add_header(header::ORIGIN, "https://app.example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
