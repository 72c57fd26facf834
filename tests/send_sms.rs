use httpmock::prelude::*;
use serde_json::json;

use infobip_sms::{AccountConfig, FailureKind, SendResult, SmsClient};

const EXPECTED_BODY: &str =
    r#"{"messages":[{"destinations":[{"to":"+15551234567"}],"text":"hello world"}]}"#;

fn test_client() -> SmsClient {
    SmsClient::builder().allow_insecure_http().build().unwrap()
}

fn account_for(server: &MockServer) -> AccountConfig {
    AccountConfig::new(server.address().to_string(), "KEY").unwrap()
}

#[tokio::test]
async fn issues_exactly_one_post_with_expected_body_and_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/sms/2/text/advanced")
                .header("authorization", "App KEY")
                .header("content-type", "application/json")
                .body(EXPECTED_BODY);
            then.status(200).json_body(json!({
                "bulkId": "BULK-1",
                "messages": [{
                    "messageId": "ID1",
                    "to": "+15551234567",
                    "status": {
                        "groupId": 1,
                        "groupName": "PENDING",
                        "id": 26,
                        "name": "PENDING_ACCEPTED",
                        "description": "Message sent to next instance"
                    }
                }]
            }));
        })
        .await;

    let result = test_client()
        .send_sms(&account_for(&server), "+15551234567", "hello world")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": true,
            "messageId": "ID1",
            "status": "PENDING_ACCEPTED",
            "category": "PENDING"
        })
    );
    assert_eq!(
        result.sent().and_then(|sent| sent.bulk_id.as_deref()),
        Some("BULK-1")
    );
}

#[tokio::test]
async fn provider_rejection_is_returned_not_raised() {
    let server = MockServer::start_async().await;
    let error_body = json!({
        "requestError": {
            "serviceException": {
                "messageId": "UNAUTHORIZED",
                "text": "Invalid login details"
            }
        }
    });
    let body = error_body.clone();
    let mock = server
        .mock_async(move |when, then| {
            when.method(Method::POST).path("/sms/2/text/advanced");
            then.status(401).json_body(body);
        })
        .await;

    let result = test_client()
        .send_sms(&account_for(&server), "+15551234567", "hello")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": false,
            "errorMessage": "Invalid login details",
            "errorDetails": error_body
        })
    );
    assert_eq!(
        result.failure().map(|failure| failure.kind),
        Some(FailureKind::Provider { http_status: 401 })
    );
}

#[tokio::test]
async fn empty_input_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST);
            then.status(200);
        })
        .await;

    let client = test_client();
    let config = account_for(&server);
    assert!(client.send_sms(&config, "", "hello").await.is_err());
    assert!(client.send_sms(&config, "+15551234567", "").await.is_err());

    mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn whitespace_text_and_padded_key_are_sent_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/sms/2/text/advanced")
                .header("authorization", "App  KEY ")
                .json_body(json!({
                    "messages": [{ "destinations": [{ "to": "+15551234567" }], "text": "   " }]
                }));
            then.status(200).json_body(json!({
                "messages": [{
                    "messageId": "ID2",
                    "status": { "name": "PENDING_ACCEPTED", "groupName": "PENDING" }
                }]
            }));
        })
        .await;

    let config = AccountConfig::new(server.address().to_string(), " KEY ").unwrap();
    let result = test_client()
        .send_sms(&config, "+15551234567", "   ")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_success());
}

#[tokio::test]
async fn unreachable_host_yields_transport_failure_without_details() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let config = AccountConfig::new(address.to_string(), "KEY").unwrap();
    let result = test_client()
        .send_sms(&config, "+15551234567", "hello")
        .await
        .unwrap();

    let SendResult::Failed(failure) = &result else {
        panic!("expected a failed result, got {result:?}");
    };
    assert_eq!(failure.kind, FailureKind::Transport);
    assert!(!failure.error_message.is_empty());
    assert!(failure.error_details.is_none());
    assert!(
        serde_json::to_value(&result)
            .unwrap()
            .get("errorDetails")
            .is_none()
    );
}
