//! Integration tests for the Watson NLC HTTP client, running the full
//! adapter path against a stub server.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use watson_nlc::{Classification, Credentials, Error, NlcClient, WatsonClassifier};
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creds() -> Credentials {
    Credentials::new("myusername", "mypassword")
}

fn adapter_for(server: &MockServer) -> WatsonClassifier {
    let client = NlcClient::with_base_url(creds(), server.uri());
    WatsonClassifier::with_client("8aff06x106-nlc-11437", Some(creds()), Arc::new(client))
        .expect("valid configuration")
}

#[tokio::test]
async fn classify_posts_once_with_basic_auth_and_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/classifiers/8aff06x106-nlc-11437/classify"))
        .and(basic_auth("myusername", "mypassword"))
        .and(body_json(json!({ "text": "i need help" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifier_id": "8aff06x106-nlc-11437",
            "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/8aff06x106-nlc-11437",
            "text": "i need help",
            "top_class": "help",
            "classes": [
                { "class_name": "help", "confidence": 0.994385165677839 },
                { "class_name": "list_request", "confidence": 0.005614834322161013 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let classifications = adapter_for(&server).classify("i need help").await.unwrap();

    assert_eq!(
        classifications,
        vec![
            Classification {
                label: "help".to_string(),
                value: 0.994385165677839,
            },
            Classification {
                label: "list_request".to_string(),
                value: 0.005614834322161013,
            },
        ]
    );
}

#[tokio::test]
async fn classify_handles_a_response_without_classes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifier_id": "8aff06x106-nlc-11437",
            "text": "unclassifiable",
            "classes": []
        })))
        .mount(&server)
        .await;

    let classifications = adapter_for(&server).classify("unclassifiable").await.unwrap();
    assert!(classifications.is_empty());
}

#[tokio::test]
async fn classify_surfaces_service_errors_as_remote_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500,
            "error": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    let err = adapter_for(&server).classify("hello there").await.unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
    assert!(err.to_string().contains("500"), "unexpected error: {err}");
}

#[tokio::test]
async fn classify_surfaces_auth_rejections_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(basic_auth("myusername", "mypassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "classes": [] })))
        .mount(&server)
        .await;

    // Wrong password never matches the mock above; the 404 fallback must
    // come back as a remote error, not a classification list.
    let client = NlcClient::with_base_url(Credentials::new("myusername", "wrong"), server.uri());
    let classifier =
        WatsonClassifier::with_client("8aff06x106-nlc-11437", Some(creds()), Arc::new(client))
            .unwrap();

    assert!(classifier.classify("hello there").await.is_err());
}
