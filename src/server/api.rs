use crate::error::RelayError;
use crate::models::{ ChatRequest, ChatResponse, ErrorDetail, HealthResponse, InfoResponse };
use crate::relay::RelayService;
use axum::{
    body::Body,
    routing::{ get, post },
    Router,
    Json,
    extract::State,
    response::{ IntoResponse, Response },
    http::{ header, StatusCode },
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{ Any, CorsLayer };
use log::{ error, warn };

#[derive(Clone)]
struct AppState {
    relay: RelayService,
}

pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        let status = match err {
            RelayError::EmptyMessage => StatusCode::BAD_REQUEST,
            RelayError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self { status, detail: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorDetail::new(self.detail))).into_response()
    }
}

pub fn router(relay: RelayService) -> Router {
    let routes = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler));

    with_layers(routes).with_state(AppState { relay })
}

fn with_layers<S: Clone + Send + Sync + 'static>(routes: Router<S>) -> Router<S> {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    routes.layer(CatchPanicLayer::custom(internal_error)).layer(cors)
}

async fn root_handler() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(state.relay.is_available()))
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>
) -> Result<Json<ChatResponse>, ApiError> {
    match state.relay.relay(&req.message, req.conversation_history).await {
        Ok(resp) => Ok(Json(resp)),
        Err(e) => {
            warn!("Rejected chat request: {}", e);
            Err(e.into())
        }
    }
}

fn internal_error(panic: Box<dyn std::any::Any + Send + 'static>) -> Response<Body> {
    let cause = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Error processing chat request: {}", cause);

    let body = serde_json
        ::to_string(&ErrorDetail::new(format!("Internal server error: {}", cause)))
        .unwrap_or_else(|_| r#"{"detail":"Internal server error"}"#.to_string());

    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json")
    );
    resp
}
