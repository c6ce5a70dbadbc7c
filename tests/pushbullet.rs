//! Pushbullet delivery against a local mock server

use camply_notify::config::PushbulletConfig;
use camply_notify::models::AvailableCampsite;
use camply_notify::services::NotificationService;
use camply_notify::services::notifications::formatting::{
    compose_campsite_body, compose_campsite_title,
};
use camply_notify::services::notifications::{
    MessageOptions, NotificationError, NotificationProvider, PushbulletProvider,
};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "o.test-token";
const PUSHES_PATH: &str = "/v2/pushes";

async fn start_server() -> MockServer {
    // A dedicated server per test; the shared HTTP client must not reuse
    // pooled connections across test runtimes.
    MockServer::builder().start().await
}

fn provider_for(server: &MockServer) -> PushbulletProvider {
    let config = PushbulletConfig {
        api_token: TOKEN.to_string(),
        api_endpoint: format!("{}{}", server.uri(), PUSHES_PATH),
        ..PushbulletConfig::default()
    };
    PushbulletProvider::new(&config).unwrap()
}

fn campsite(site_name: &str, day: u8) -> AvailableCampsite {
    serde_json::from_value(json!({
        "campsite_id": 1000 + day as i64,
        "booking_date": format!("2023-07-{:02}T00:00:00", day),
        "booking_end_date": format!("2023-07-{:02}T00:00:00", day + 1),
        "booking_nights": 1,
        "campsite_site_name": site_name,
        "campsite_loop_name": "Loop A",
        "campsite_type": "STANDARD NONELECTRIC",
        "campsite_occupancy": [1, 6],
        "campsite_use_type": "Overnight",
        "availability_status": "Available",
        "recreation_area": "Yosemite National Park",
        "recreation_area_id": 2991,
        "facility_name": "Upper Pines",
        "facility_id": 232447,
        "booking_url": format!("https://www.recreation.gov/camping/campsites/{}", 1000 + day as i64),
        "permitted_equipment": null,
        "campsite_attributes": null
    }))
    .unwrap()
}

async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

#[tokio::test]
async fn send_message_posts_default_payload() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .and(header("Access-Token", TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "type": "note",
            "title": "Camply Notification",
            "body": "hello"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .send_message("hello", MessageOptions::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn send_message_merges_extra_options() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .and(body_json(json!({
            "type": "link",
            "title": "Found one",
            "body": "Upper Pines is open",
            "url": "https://www.recreation.gov"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let options = MessageOptions::new()
        .with_type("link")
        .with_title("Found one")
        .with_extra("url", "https://www.recreation.gov")
        .unwrap();

    provider_for(&server)
        .send_message("Upper Pines is open", options)
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_push_reports_status_and_body() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":{"type":"invalid_request"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = provider_for(&server)
        .send_message("hello", MessageOptions::new())
        .await
        .unwrap_err();

    match error {
        NotificationError::Delivery { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_request"));
        }
        other => panic!("Expected Delivery, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_body_is_rejected_without_request() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .send_message("", MessageOptions::new())
        .await;

    assert!(matches!(result, Err(NotificationError::EmptyBody)));
}

#[tokio::test]
async fn configured_access_token_header_is_replaced_not_duplicated() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = PushbulletConfig {
        api_token: TOKEN.to_string(),
        api_endpoint: format!("{}{}", server.uri(), PUSHES_PATH),
        ..PushbulletConfig::default()
    };
    config
        .headers
        .insert("access-token".to_string(), "o.stale".to_string());

    PushbulletProvider::new(&config)
        .unwrap()
        .send_message("hi", MessageOptions::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let tokens: Vec<_> = requests[0]
        .headers
        .get_all("access-token")
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect();
    assert_eq!(tokens, vec![TOKEN.to_string()]);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let config = PushbulletConfig {
        api_token: TOKEN.to_string(),
        api_endpoint: format!("http://127.0.0.1:{}{}", port, PUSHES_PATH),
        ..PushbulletConfig::default()
    };

    let error = PushbulletProvider::new(&config)
        .unwrap()
        .send_message("hello", MessageOptions::new())
        .await
        .unwrap_err();

    match error {
        NotificationError::Transport(source) => assert!(source.is_connect()),
        other => panic!("Expected Transport, got {:?}", other),
    }
}

#[tokio::test]
async fn send_campsites_stops_on_transport_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let config = PushbulletConfig {
        api_token: TOKEN.to_string(),
        api_endpoint: format!("http://127.0.0.1:{}{}", port, PUSHES_PATH),
        ..PushbulletConfig::default()
    };

    let result = PushbulletProvider::new(&config)
        .unwrap()
        .send_campsites(&[campsite("A01", 1), campsite("A02", 2)])
        .await;

    assert!(matches!(result, Err(NotificationError::Transport(_))));
}

#[tokio::test]
async fn send_campsites_posts_one_push_per_record_in_order() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .and(header("Access-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&server)
        .await;

    let campsites = vec![campsite("A01", 1), campsite("A02", 2), campsite("B10", 3)];
    provider_for(&server)
        .send_campsites(&campsites)
        .await
        .unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies.len(), campsites.len());
    for (payload, campsite) in bodies.iter().zip(&campsites) {
        assert_eq!(payload["type"], "note");
        assert_eq!(payload["title"], compose_campsite_title(campsite));
        assert_eq!(payload["body"], compose_campsite_body(campsite));
    }
    assert_eq!(
        bodies[0]["title"],
        "Yosemite National Park | Upper Pines | 2023-07-01"
    );
}

#[tokio::test]
async fn send_campsites_with_empty_batch_makes_no_requests() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    provider_for(&server).send_campsites(&[]).await.unwrap();
}

#[tokio::test]
async fn send_campsites_stops_at_first_failure() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    let campsites = vec![campsite("A01", 1), campsite("A02", 2), campsite("A03", 3)];
    let result = provider_for(&server).send_campsites(&campsites).await;

    assert!(matches!(
        result,
        Err(NotificationError::Delivery { status, .. }) if status == 500
    ));
    assert_eq!(received_bodies(&server).await.len(), 2);
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = PushbulletConfig {
        api_token: String::new(),
        api_endpoint: format!("{}{}", server.uri(), PUSHES_PATH),
        ..PushbulletConfig::default()
    };

    let result = PushbulletProvider::new(&config);
    assert!(matches!(result, Err(NotificationError::NotConfigured { .. })));
}

#[tokio::test]
async fn service_dispatches_through_pushbullet() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path(PUSHES_PATH))
        .and(body_json(json!({
            "type": "note",
            "title": "Camply Notification",
            "body": "via service"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = NotificationService::new().with_provider(Arc::new(provider_for(&server)));
    service
        .send_message("via service", MessageOptions::new())
        .await
        .unwrap();
}
