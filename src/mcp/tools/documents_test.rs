//! Tests for Space Document MCP tools

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::mcp::tools::documents::GetSpaceDocumentParams;
use crate::test_upstream::{MockUpstream, text_of};

#[tokio::test]
async fn test_get_space_document() {
    let upstream = MockUpstream::json(
        200,
        json!({"spaceDocumentId": 21, "documentName": "Runbook", "spaceId": 4}),
    )
    .await;

    let text = text_of(
        upstream
            .server()
            .get_space_document(Parameters(GetSpaceDocumentParams {
                document_id: "21".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(upstream.only_request().path, "/space-documents/21");
    assert_eq!(
        text,
        "Space Document: Runbook\n  ID: 21\n  Space ID: 4"
    );
}

#[tokio::test]
async fn test_get_space_document_requires_id() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .get_space_document(Parameters(GetSpaceDocumentParams::default()))
            .await
            .unwrap(),
    );

    assert_eq!(text, "Error: document_id is required");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_get_space_document_timeout() {
    let upstream = MockUpstream::start_with_delay(
        200,
        "{}",
        Some(std::time::Duration::from_secs(3)),
    )
    .await;
    let mut config = upstream.config(Some("test-key"));
    config.timeout = std::time::Duration::from_millis(200);
    let server =
        crate::mcp::RocketlaneServer::new(crate::gateway::Gateway::new(config).unwrap());

    let text = text_of(
        server
            .get_space_document(Parameters(GetSpaceDocumentParams {
                document_id: "21".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert!(text.starts_with("Error: request timed out"));
}
