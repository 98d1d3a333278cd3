//! Router tests for the payout endpoint, driven in-process against the
//! nullable payout client.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use campaign_nullables::NullPayoutClient;
use campaign_rpc::{router, RpcState};
use campaign_types::{Address, WeiAmount, U256};
use std::sync::Arc;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ALICE: &str = "0x000000000000000000000000000000000000a11c";
const BOB: &str = "0x0000000000000000000000000000000000000b0b";

fn app(client: Arc<NullPayoutClient>) -> Router {
    router(Arc::new(RpcState::new(client)))
}

async fn post_verify(app: Router, address: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/campaign/verify/{address}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Payout flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn one_request_submits_one_fixed_payout() {
    let client = Arc::new(NullPayoutClient::new());
    let (status, body) = post_verify(app(client.clone()), ALICE).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!("Success! Payout triggered for: {ALICE}"));

    let submitted = client.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].recipient, ALICE.parse::<Address>().unwrap());
    assert_eq!(submitted[0].amount.raw(), U256::from(1_000_000_000_000_000u64));
}

#[tokio::test]
async fn repeated_requests_share_one_client() {
    let client = Arc::new(NullPayoutClient::new());
    let app = app(client.clone());

    post_verify(app.clone(), ALICE).await;
    post_verify(app, BOB).await;

    let submitted = client.submitted();
    assert_eq!(submitted.len(), 2);
    assert_eq!(submitted[0].recipient, ALICE.parse::<Address>().unwrap());
    assert_eq!(submitted[1].recipient, BOB.parse::<Address>().unwrap());
}

#[tokio::test]
async fn distinct_recipients_differ_only_in_recipient() {
    let client = Arc::new(NullPayoutClient::new());
    let app = app(client.clone());

    post_verify(app.clone(), ALICE).await;
    post_verify(app, BOB).await;

    let submitted = client.submitted();
    assert_ne!(submitted[0].recipient, submitted[1].recipient);
    assert_eq!(submitted[0].amount, submitted[1].amount);
    assert_eq!(submitted[0].amount, WeiAmount::REWARD);
}

#[tokio::test]
async fn query_string_cannot_change_amount() {
    let client = Arc::new(NullPayoutClient::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/campaign/verify/{ALICE}?amount=999999999999999999999"))
        .body(Body::from("amount=1"))
        .unwrap();
    let response = app(client.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(client.submitted()[0].amount, WeiAmount::REWARD);
}

// ---------------------------------------------------------------------------
// Failure reporting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn downstream_failure_is_reported_as_error_text_with_200() {
    let client = Arc::new(NullPayoutClient::failing("insufficient funds for gas"));
    let (status, body) = post_verify(app(client.clone()), ALICE).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Error: insufficient funds for gas");
    assert!(client.submitted().is_empty());
}

#[tokio::test]
async fn malformed_address_is_reported_as_error_text() {
    let client = Arc::new(NullPayoutClient::new());
    let (status, body) = post_verify(app(client.clone()), "not-an-address").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Error:"), "unexpected body: {body}");
    assert!(body.contains("not-an-address"));
    assert!(client.submitted().is_empty());
}

#[tokio::test]
async fn service_recovers_after_failure() {
    let client = Arc::new(NullPayoutClient::failing("node unreachable"));
    let app = app(client.clone());

    let (_, body) = post_verify(app.clone(), ALICE).await;
    assert!(body.starts_with("Error:"));

    client.fail_with(None);
    let (_, body) = post_verify(app, ALICE).await;
    assert!(body.starts_with("Success!"));
    assert_eq!(client.submitted().len(), 1);
}

// ---------------------------------------------------------------------------
// HTTP surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_is_plain_text() {
    let client = Arc::new(NullPayoutClient::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/campaign/verify/{ALICE}"))
        .body(Body::empty())
        .unwrap();
    let response = app(client).oneshot(request).await.unwrap();

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn get_is_not_allowed() {
    let client = Arc::new(NullPayoutClient::new());
    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/api/campaign/verify/{ALICE}"))
        .body(Body::empty())
        .unwrap();
    let response = app(client.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(client.submitted().is_empty());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let client = Arc::new(NullPayoutClient::new());
    let (status, _) = post_verify(app(client.clone()), "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(client.submitted().is_empty());
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let client = Arc::new(NullPayoutClient::new());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(format!("/api/campaign/verify/{ALICE}"))
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app(client.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(client.submitted().is_empty());
}
