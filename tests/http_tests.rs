mod common;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use common::{TOKEN, USERNAME, client_for, client_with_interval, setup_mock_server};
use serde_json::json;
use textmagic::{Pagination, SendMessage, Template, TextmagicError};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

#[tokio::test]
async fn get_messages_sends_identity_headers_and_default_pagination() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/messages"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(header("X-TM-Username", USERNAME))
        .and(header("X-TM-Key", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value = client.get_messages(Pagination::default()).await.unwrap();
    assert_eq!(value, json!([{"id": 1}]));
}

#[tokio::test]
async fn send_posts_form_encoded_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/messages"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("text=hi"))
        .and(body_string_contains("phones=%2B1555000111"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 77})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = SendMessage::text_to_phones("hi", ["+1555000111"]).unwrap();
    assert_eq!(client.send(&request).await.unwrap(), json!({"id": 77}));
}

#[tokio::test]
async fn delete_message_returns_true_on_no_content() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/messages/4820993"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.delete_message(4_820_993_u64).await.unwrap());
}

#[tokio::test]
async fn update_template_sends_namespaced_keys() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/templates/9"))
        .and(body_string_contains("template%5Bname%5D=greeting"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let template = Template::new("greeting", "Hello").unwrap();
    client.update_template(9_u64, &template).await.unwrap();
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts/5"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"code": 404, "message": "Contact not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_contact(5_u64).await.unwrap_err();
    match err {
        TextmagicError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Contact not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_id_never_reaches_the_server() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_message("abc").await.unwrap_err();
    assert!(matches!(err, TextmagicError::Argument(_)));
    assert!(err.to_string().contains("should be numeric"));
}

/// Answers `200 {"id":1}` and records when each request arrived.
#[derive(Clone, Default)]
struct ArrivalLog(Arc<Mutex<Vec<Instant>>>);

impl ArrivalLog {
    fn arrivals(&self) -> Vec<Instant> {
        self.0.lock().unwrap().clone()
    }
}

impl Respond for ArrivalLog {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.0.lock().unwrap().push(Instant::now());
        ResponseTemplate::new(200).set_body_json(json!({"id": 1}))
    }
}

#[tokio::test]
async fn consecutive_requests_are_spaced_by_the_interval() {
    let server = setup_mock_server().await;
    let log = ArrivalLog::default();
    Mock::given(method("GET"))
        .and(path("/api/v2/user"))
        .respond_with(log.clone())
        .expect(3)
        .mount(&server)
        .await;

    let client = client_with_interval(&server, Duration::from_millis(500));
    // The first request also opens the pooled connection.
    for _ in 0..3 {
        client.get_user_info().await.unwrap();
    }

    let arrivals = log.arrivals();
    assert_eq!(arrivals.len(), 3);
    assert!(arrivals[2] - arrivals[1] >= Duration::from_millis(500));
}

#[tokio::test]
async fn credentials_changed_between_calls_are_used() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/user"))
        .and(header("X-TM-Username", "someone-else"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_username("someone-else");
    assert_eq!(client.get_user_info().await.unwrap(), json!({"id": 2}));
}
