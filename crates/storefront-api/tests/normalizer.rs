//! Integration tests for the response envelope normalizer.
//!
//! Each test mounts a mock backend and asserts the exact classification
//! the status-code policy promises. The body of 401/404/500/503 responses
//! is deliberately populated with misleading content to prove it is never
//! parsed.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_api::response::messages;
use storefront_api::{ApiClient, ApiConfig, RequestContext};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(&server.uri(), "tenant-1", "en").unwrap();
    ApiClient::new(config)
}

#[tokio::test]
async fn unauthorized_gets_fixed_message_regardless_of_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "you shall not pass" })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api
        .get::<Value>(&RequestContext::guest(), "cart")
        .await
        .unwrap_err();

    assert_eq!(err.error, messages::UNAUTHORIZED);
    assert_eq!(err.status, 401);
}

#[tokio::test]
async fn infrastructure_statuses_get_fixed_mapping() {
    for (status, expected) in [
        (404, messages::NOT_FOUND),
        (500, messages::INTERNAL_SERVER_ERROR),
        (503, messages::SERVICE_UNAVAILABLE),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cart"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({ "message": "body that must be ignored" })),
            )
            .mount(&server)
            .await;

        let api = client_for(&server);
        let err = api
            .get::<Value>(&RequestContext::guest(), "cart")
            .await
            .unwrap_err();

        assert_eq!(err.error, expected, "status {}", status);
        assert_eq!(err.status, status);
    }
}

#[tokio::test]
async fn no_content_becomes_empty_object_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/cart/delete/c1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let res = api
        .delete::<Value>(&RequestContext::guest(), "cart/delete/c1")
        .await
        .unwrap();

    assert_eq!(res.data, json!({}));
    assert_eq!(res.message, messages::SUCCESS);
    assert_eq!(res.status, 204);
}

#[tokio::test]
async fn zero_content_length_becomes_empty_object_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let res = api
        .get::<Value>(&RequestContext::guest(), "cart")
        .await
        .unwrap();

    assert_eq!(res.data, json!({}));
    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn domain_error_surfaces_server_message_and_passthrough_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": ["quantity too low", "options invalid"],
            "code": "CART_VALIDATION",
            "details": { "field": "quantity" },
            "data": { "partial": true },
            "validationErrors": { "quantity": "min 1" }
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api
        .post::<Value, _>(&RequestContext::guest(), "cart/add", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.error, "quantity too low | options invalid");
    assert_eq!(err.status, 422);
    assert_eq!(err.code, Some(json!("CART_VALIDATION")));
    assert_eq!(err.details, Some(json!({ "field": "quantity" })));
    assert_eq!(err.data, json!({ "partial": true }));
    assert_eq!(err.validation_errors, Some(json!({ "quantity": "min 1" })));
}

#[tokio::test]
async fn domain_error_without_message_uses_generic_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "code": "X" })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api
        .get::<Value>(&RequestContext::guest(), "cart")
        .await
        .unwrap_err();

    assert_eq!(err.error, messages::AN_ERROR_OCCURRED);
    assert_eq!(err.data, json!({}));
}

#[tokio::test]
async fn success_unwraps_data_and_defaults_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payment-method"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": [ { "id": "pm-1", "name": "Cash" } ] })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let res = api
        .get::<Value>(&RequestContext::guest(), "payment-method")
        .await
        .unwrap();

    assert_eq!(res.data[0]["id"], "pm-1");
    assert_eq!(res.message, messages::SUCCESS);
}

#[tokio::test]
async fn success_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "message": "Cart fetched",
            "status": 200
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let res = api
        .get::<Value>(&RequestContext::guest(), "cart")
        .await
        .unwrap();

    assert_eq!(res.message, "Cart fetched");
}

#[tokio::test]
async fn transport_failure_becomes_status_500_error() {
    // Nothing listens on the discard port; the connection fails before any
    // status code exists
    let config = ApiConfig::new("http://127.0.0.1:9/", "tenant-1", "en").unwrap();
    let api = ApiClient::new(config);

    let err = api
        .get::<Value>(&RequestContext::guest(), "cart")
        .await
        .unwrap_err();

    assert_eq!(err.status, 500);
    assert!(!err.error.is_empty());
}

#[tokio::test]
async fn undecodable_success_payload_becomes_error_not_panic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": "not-a-list" })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api
        .get::<Vec<storefront_core::CartProduct>>(&RequestContext::guest(), "cart")
        .await
        .unwrap_err();

    assert_eq!(err.status, 500);
}

#[tokio::test]
async fn session_headers_are_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(header("authorization", "Bearer tok-123"))
        .and(header("accept-language", "ar"))
        .and(header("x-tenant-id", "tenant-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let ctx = RequestContext::authenticated("tok-123").with_locale("ar");
    let res = api.get::<Value>(&ctx, "cart").await.unwrap();

    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn default_locale_used_when_context_has_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(header("accept-language", "en"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let res = api
        .get::<Value>(&RequestContext::guest(), "cart")
        .await
        .unwrap();

    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn json_bodies_carry_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {}
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let res = api
        .post::<Value, _>(&RequestContext::guest(), "cart/add", &json!({ "x": 1 }))
        .await
        .unwrap();

    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn multipart_bodies_carry_multipart_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {}
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let form = reqwest::multipart::Form::new().text("quantity", "1");
    let res = api
        .post_form::<Value>(&RequestContext::guest(), "cart/add", form)
        .await
        .unwrap();
    assert_eq!(res.status, 200);

    // The boundary varies per request, so the content-type is asserted on
    // the received request rather than matched
    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}
