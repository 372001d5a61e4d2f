pub mod api;
pub mod chat;

pub use api::{ ErrorDetail, HealthResponse, InfoResponse };
pub use chat::{ ChatRequest, ChatResponse, Message, Role };
