use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::json;
use tokio::net::TcpListener;

use super::*;

#[derive(Clone)]
struct ServerState {
    reply: Value,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn handle_submit(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .received
        .lock()
        .expect("received lock")
        .push(body);
    (StatusCode::OK, Json(state.reply.clone()))
}

async fn spawn_intake_server(reply: Value) -> (Url, Arc<Mutex<Vec<Value>>>) {
    unsafe { std::env::set_var("NO_PROXY", "127.0.0.1,localhost") };
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        reply,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/submit", post(handle_submit))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let endpoint = Url::parse(&format!("http://{addr}/submit")).expect("endpoint");
    (endpoint, received)
}

fn client(endpoint: Url) -> Web3FormsClient {
    Web3FormsClient::with_endpoint(endpoint, "test-key".to_string(), Duration::from_secs(5))
        .expect("client")
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "833 123 4567".to_string(),
        interest: "Renta".to_string(),
        message: "Hola".to_string(),
        subject: "Nuevo contacto de Ana - Renta".to_string(),
    }
}

#[tokio::test]
async fn success_flag_is_reported_and_payload_carries_access_key() {
    let (endpoint, received) = spawn_intake_server(json!({"success": true})).await;

    let accepted = client(endpoint)
        .submit(&submission())
        .await
        .expect("submit");
    assert!(accepted);

    let received = received.lock().expect("received lock");
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["access_key"], "test-key");
    assert_eq!(received[0]["subject"], "Nuevo contacto de Ana - Renta");
    assert_eq!(received[0]["phone"], "833 123 4567");
}

#[tokio::test]
async fn falsy_success_flag_is_a_rejection() {
    for reply in [
        json!({"success": false}),
        json!({"message": "missing flag"}),
        json!({"success": 0}),
    ] {
        let (endpoint, _) = spawn_intake_server(reply.clone()).await;
        let accepted = client(endpoint)
            .submit(&submission())
            .await
            .expect("submit");
        assert!(!accepted, "{reply}");
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_an_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/submit")).expect("endpoint");
    let result = client(endpoint).submit(&submission()).await;
    assert!(matches!(result, Err(AppError::Request(_))));
}

#[test]
fn truthiness_matches_javascript() {
    assert!(is_truthy(&json!(true)));
    assert!(is_truthy(&json!("true")));
    assert!(is_truthy(&json!(1)));
    assert!(is_truthy(&json!({})));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&Value::Null));
}
