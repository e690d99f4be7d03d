use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, STATS_BODY};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed_get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::AUTHORIZATION, "Bearer K")
        .body(String::new())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_query_and_auth() {
    let app = app();
    let resp = app
        .oneshot(authed_get(
            "/v1/media/like?aweme_id=123&username=alice&proxy=p",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.endpoint, "media/like");
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.query["aweme_id"], "123");
    assert_eq!(echo.query["username"], "alice");
    assert_eq!(echo.query["proxy"], "p");
    assert_eq!(echo.authorization, "Bearer K");
    assert!(echo.body.is_empty());
}

#[tokio::test]
async fn echo_captures_post_body_and_content_type() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/search/general")
                .header(http::header::AUTHORIZATION, "Bearer K")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"keyword":"cats"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.endpoint, "search/general");
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.content_type.as_deref(), Some("application/json"));
    assert_eq!(echo.body, r#"{"keyword":"cats"}"#);
}

#[tokio::test]
async fn echo_without_bearer_token_is_401() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/v1/media/like")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let error: serde_json::Value = body_json(resp).await;
    assert_eq!(error["status_code"], 401);
}

// --- stats ---

#[tokio::test]
async fn stats_serves_canned_payload_verbatim() {
    let app = app();
    let resp = app.oneshot(authed_get("/v1/media/stats")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(body.as_ref(), STATS_BODY.as_bytes());
}

#[tokio::test]
async fn stats_without_bearer_token_is_401() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/v1/media/stats")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
