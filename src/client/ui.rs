use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::State,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::relay_api::RelayApi;
use super::session::{ ChatSession, SendOutcome };

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Deserialize)]
pub struct SendRequest {
    pub message: String,
}

/// The session mutex is held across the relay round trip, so sends from the
/// page are served one at a time.
#[derive(Clone)]
struct UiState {
    api: Arc<dyn RelayApi>,
    session: Arc<Mutex<ChatSession>>,
}

pub fn router(api: Arc<dyn RelayApi>) -> Router {
    let state = UiState {
        api,
        session: Arc::new(Mutex::new(ChatSession::new())),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/state", get(state_handler))
        .route("/api/send", post(send_handler))
        .route("/api/clear", post(clear_handler))
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn state_handler(State(state): State<UiState>) -> Json<SendOutcome> {
    Json(state.session.lock().await.snapshot())
}

async fn send_handler(
    State(state): State<UiState>,
    Json(req): Json<SendRequest>
) -> Json<SendOutcome> {
    let mut session = state.session.lock().await;
    Json(session.send(state.api.as_ref(), &req.message).await)
}

async fn clear_handler(State(state): State<UiState>) -> Json<SendOutcome> {
    Json(state.session.lock().await.reset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::tests::ScriptedRelay;
    use crate::models::ChatResponse;
    use axum::body::Body;
    use axum::http::{ Request, StatusCode };
    use serde_json::{ json, Value };
    use tower::ServiceExt;

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_chat_page() {
        let app = router(Arc::new(ScriptedRelay::new(Vec::new())));
        let (status, body) = call(&app, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Groq Chatbot"));
    }

    #[tokio::test]
    async fn send_then_clear_round_trip() {
        let relay = ScriptedRelay::new(vec![Ok(ChatResponse::success("hey".to_string(), 5, 0.2))]);
        let app = router(Arc::new(relay));

        let (_, body) = call(&app, "POST", "/api/send", Some(json!({ "message": "hello" }))).await;
        let out: SendOutcome = serde_json::from_str(&body).unwrap();
        assert_eq!(out.history.len(), 1);
        assert_eq!(out.history[0].reply, "hey");
        assert_eq!(out.stats, "Tokens: 5 | Time: 0.20s | Total Tokens: 5");

        let (_, body) = call(&app, "GET", "/api/state", None).await;
        let state: SendOutcome = serde_json::from_str(&body).unwrap();
        assert_eq!(state, out);

        let (_, body) = call(&app, "POST", "/api/clear", None).await;
        let cleared: SendOutcome = serde_json::from_str(&body).unwrap();
        assert!(cleared.history.is_empty());
        assert_eq!(cleared.stats, "");
    }
}
