mod support;

use reqwest::StatusCode;

#[tokio::test]
async fn healthz_returns_empty_json_object() {
    let base_url = support::spawn_server().await;

    let res = reqwest::get(format!("{base_url}/v1/healthz"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.text().await.expect("body"), "{}");
}

#[tokio::test]
async fn err_returns_demo_error_payload() {
    let base_url = support::spawn_server().await;

    let res = reqwest::get(format!("{base_url}/v1/err"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: serde_json::Value = res.json().await.expect("json body");
    assert_eq!(payload, serde_json::json!({ "error": "Something went wrong" }));
}

#[tokio::test]
async fn post_to_healthz_is_rejected_with_405() {
    let base_url = support::spawn_server().await;

    let res = reqwest::Client::new()
        .post(format!("{base_url}/v1/healthz"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn preflight_is_answered_for_any_origin() {
    let base_url = support::spawn_server().await;

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base_url}/v1/err"))
        .header("origin", "https://client.example")
        .header("access-control-request-method", "PUT")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert_eq!(res.headers()["access-control-max-age"], "300");
}
