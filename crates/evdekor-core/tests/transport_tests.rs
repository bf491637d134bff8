mod common;

use std::time::Duration;

use common::{closed_endpoint, spawn_endpoint, valid_draft};
use evdekor_core::{HttpTransport, SubmissionPayload, SubmitTransport, WizardError};

#[tokio::test]
async fn test_http_transport_posts_camel_case_json() {
    let (endpoint, body) = spawn_endpoint(200).await;
    let transport = HttpTransport::new(&endpoint, None).expect("Failed to create transport");

    transport
        .submit(&SubmissionPayload::new(valid_draft(), 2))
        .await
        .expect("Submission should succeed");

    let body: serde_json::Value =
        serde_json::from_str(&body.await.expect("No request received")).unwrap();
    assert_eq!(body["service"], "anahtar-teslim");
    assert_eq!(body["areaSize"], "120");
    assert_eq!(body["scheduleSlot"], "haftaici-sabah");
    assert_eq!(body["fullName"], "Ayşe Yılmaz");
    assert_eq!(body["consent"], true);
    assert_eq!(body["mediaCount"], 2);
    assert!(body.get("media").is_none());
}

#[tokio::test]
async fn test_http_transport_rejects_error_status() {
    let (endpoint, _body) = spawn_endpoint(500).await;
    let transport = HttpTransport::new(&endpoint, None).expect("Failed to create transport");

    let err = transport
        .submit(&SubmissionPayload::new(valid_draft(), 0))
        .await
        .unwrap_err();

    match err {
        WizardError::Transport { message } => assert!(message.contains("500")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_http_transport_reports_unreachable_endpoint() {
    let endpoint = closed_endpoint().await;
    let transport = HttpTransport::new(&endpoint, Some(Duration::from_secs(5)))
        .expect("Failed to create transport");

    let err = transport
        .submit(&SubmissionPayload::new(valid_draft(), 0))
        .await
        .unwrap_err();

    assert!(matches!(err, WizardError::Transport { .. }));
}
