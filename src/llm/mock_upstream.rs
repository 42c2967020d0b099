//! A throwaway Messages API endpoint for tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

pub struct MockUpstream {
    status: StatusCode,
    body: String,
    delay: Duration,
    pub requests: Mutex<Vec<(HeaderMap, Value)>>,
}

impl MockUpstream {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> (HeaderMap, Value) {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

/// Starts a server answering every `POST /v1/messages` with `status` and
/// `body`. Returns the base URL and a handle to the recorded requests.
pub async fn spawn(status: u16, body: &str) -> (String, Arc<MockUpstream>) {
    spawn_with_delay(status, body, Duration::ZERO).await
}

pub async fn spawn_with_delay(
    status: u16,
    body: &str,
    delay: Duration,
) -> (String, Arc<MockUpstream>) {
    let mock = Arc::new(MockUpstream {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        delay,
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/v1/messages", post(messages))
        .with_state(mock.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), mock)
}

async fn messages(
    State(mock): State<Arc<MockUpstream>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let json = serde_json::from_str(&body).unwrap_or(Value::Null);
    mock.requests.lock().unwrap().push((headers, json));
    if !mock.delay.is_zero() {
        tokio::time::sleep(mock.delay).await;
    }
    (
        mock.status,
        [(header::CONTENT_TYPE, "application/json")],
        mock.body.clone(),
    )
}
