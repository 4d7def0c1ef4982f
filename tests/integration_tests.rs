use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceExt;

use tailorbot::config::AppConfig;
use tailorbot::handlers;
use tailorbot::models::{Order, OrderStatus};
use tailorbot::services::agent::Agent;
use tailorbot::services::messaging::MessagingProvider;
use tailorbot::state::AppState;
use tailorbot::store::Store;

// ── Mock Provider ──

struct MockMessaging {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl MessagingProvider for MockMessaging {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        whatsapp_api_url: "https://api.interakt.ai/v1/public/message/".to_string(),
        whatsapp_api_key: String::new(),
        shop_name: "Sharma Tailors".to_string(),
        shop_phone: "+91 98765-43210".to_string(),
        shop_address: "Shop No. 5, Malviya Nagar, Jaipur - 302017".to_string(),
    }
}

fn test_state() -> Arc<AppState> {
    test_state_with_sent().0
}

fn test_state_with_sent() -> (Arc<AppState>, Arc<Mutex<Vec<(String, String)>>>) {
    let sent = Arc::new(Mutex::new(vec![]));
    let messaging = MockMessaging {
        sent: Arc::clone(&sent),
    };
    let state = Arc::new(AppState {
        store: Store::new(),
        config: test_config(),
        agent: Agent::new(),
        messaging: Box::new(messaging),
    });
    (state, sent)
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/customer/:phone", get(handlers::customer::get_customer))
        .with_state(state)
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(res: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// ── Chat Endpoint Tests ──

#[tokio::test]
async fn test_chat_price_inquiry() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(chat_request(
            r#"{"phone":"919812345678","message":"price batao"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["response"]["type"], "text");
    assert!(json["response"]["text"]
        .as_str()
        .unwrap()
        .contains("₹800"));
}

#[tokio::test]
async fn test_chat_empty_body_rejected() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = json_body(res).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Phone and message required");
}

#[tokio::test]
async fn test_chat_missing_message_rejected() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(chat_request(r#"{"phone":"919812345678"}"#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = json_body(res).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_chat_empty_fields_rejected() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(chat_request(r#"{"phone":"","message":""}"#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_order_lookup_found() {
    let state = test_state();
    state.store.insert_order(Order {
        order_id: "ORD42".to_string(),
        customer_phone: "919812345678".to_string(),
        status: OrderStatus::Ready,
        amount: Some(2500),
        created_at: chrono::Utc::now(),
        extra: HashMap::new(),
    });

    let app = test_app(state);
    let res = app
        .oneshot(chat_request(
            r#"{"phone":"919812345678","message":"ORD42"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    let text = json["response"]["text"].as_str().unwrap();
    assert!(text.contains("ORD42"));
    assert!(text.contains("Ready"));
    assert!(text.contains("₹2500"));
}

#[tokio::test]
async fn test_chat_order_lookup_missing() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(chat_request(
            r#"{"phone":"919812345678","message":"ORD999"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert!(json["response"]["text"]
        .as_str()
        .unwrap()
        .contains("+91 98765-43210"));
}

#[tokio::test]
async fn test_chat_reply_delivered_outbound() {
    let (state, sent) = test_state_with_sent();
    let app = test_app(state);

    let res = app
        .oneshot(chat_request(
            r#"{"phone":"919812345678","message":"appointment"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    let text = json["response"]["text"].as_str().unwrap().to_string();

    let messages = sent.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "919812345678");
    assert_eq!(messages[0].1, text);
}

// ── Customer Endpoint Tests ──

#[tokio::test]
async fn test_customer_not_found() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/customer/911111111111")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let json = json_body(res).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Customer not found");
}

#[tokio::test]
async fn test_name_learning_then_customer_lookup() {
    let state = test_state();

    // First contact with a short, name-shaped message
    let app = test_app(state.clone());
    let res = app
        .oneshot(chat_request(
            r#"{"phone":"919812345678","message":"Rakesh"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert!(json["response"]["text"].as_str().unwrap().contains("Rakesh"));

    // The name should now be on file
    let app = test_app(state);
    let res = app
        .oneshot(
            Request::builder()
                .uri("/customer/919812345678")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["customer"]["phone"], "919812345678");
    assert_eq!(json["customer"]["name"], "Rakesh");
}

// ── Health Check ──

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["status"], "OK");

    let ts = json["timestamp"].as_str().unwrap();
    assert!(
        chrono::DateTime::parse_from_rfc3339(ts).is_ok(),
        "timestamp should be RFC 3339, got: {ts}"
    );
}
