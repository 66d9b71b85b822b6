//! Acknowledge and publish success paths, driven against a canned HTTP
//! transport instead of live SQS.

use aws_sdk_sqs::config::{BehaviorVersion, Credentials, Region, SharedCredentialsProvider};
use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;
use rs_sqs_drainer::drainer::SqsMessageDrainer;
use rs_sqs_drainer::message::Message;
use serde::Serialize;

const QUEUE_URL: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/orders.fifo";

/// A drainer whose client answers its next request with the given body.
fn replaying_drainer(response_body: &str) -> (SqsMessageDrainer, StaticReplayClient) {
    let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
        http::Request::builder()
            .uri(QUEUE_URL)
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .header("content-type", "application/x-amz-json-1.0")
            .body(SdkBody::from(response_body))
            .unwrap(),
    )]);

    let config = aws_sdk_sqs::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
            "test-access-key",
            "test-secret-key",
            None,
            None,
            "replay",
        )))
        .http_client(http_client.clone())
        .build();

    let drainer = SqsMessageDrainer::new(aws_sdk_sqs::Client::from_conf(config), QUEUE_URL);
    (drainer, http_client)
}

#[derive(Serialize)]
struct ErrorReport {
    module: String,
    message: String,
}

#[tokio::test]
async fn acknowledge_returns_a_confirmation_naming_the_message_id() {
    let (drainer, _http_client) = replaying_drainer("{}");

    let message = Message {
        id: Some("id-1".to_string()),
        receipt_handle: Some("rh-1".to_string()),
        body: Some("consumed".to_string()),
    };

    let confirmation = drainer.acknowledge(&message).await.unwrap();
    assert_eq!(confirmation, "Message \"id-1\" acknowledged.");
}

#[tokio::test]
async fn send_returns_the_queue_assigned_receipt() {
    let (drainer, http_client) = replaying_drainer(
        r#"{"MessageId":"11b23c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d","SequenceNumber":"18849496460467696128"}"#,
    );

    let report = ErrorReport {
        module: "orders".to_string(),
        message: "feed sync failed".to_string(),
    };

    let receipt = drainer.send_message(&report, "group-1").await.unwrap();

    assert_eq!(
        receipt.message_id.as_deref(),
        Some("11b23c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d")
    );
    assert_eq!(receipt.sequence_number.as_deref(), Some("18849496460467696128"));

    // The group key and serialized payload must both reach the wire.
    let request = http_client.actual_requests().next().unwrap();
    let wire_body = std::str::from_utf8(request.body().bytes().unwrap()).unwrap();
    assert!(wire_body.contains("group-1"));
    assert!(wire_body.contains("feed sync failed"));
}
