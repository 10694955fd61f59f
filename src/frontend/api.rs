use std::any::Any;

use anyhow::anyhow;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info, warn};

use crate::study_core::{respond, ChatTurn, Error, Result, Role};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidInput(reason) => {
                warn!(%reason, "rejected chat request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid messages format" })),
                )
                    .into_response()
            }
            Error::Internal(err) => {
                error!(error = ?err, "chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

// Only the last turn is read, so earlier turns are taken as they come: an
// odd role becomes `Other` and non-string content becomes `None`.
fn lenient_turn(value: &Value) -> ChatTurn {
    let role = value
        .get("role")
        .and_then(|role| serde_json::from_value(role.clone()).ok())
        .unwrap_or(Role::Other);
    let content = value.get("content").and_then(Value::as_str).map(str::to_owned);
    ChatTurn { role, content }
}

fn parse_request(body: &Value) -> Result<Vec<ChatTurn>> {
    let messages = body
        .as_object()
        .and_then(|object| object.get("messages"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidInput("messages is missing or not an array".into()))?;
    if messages.is_empty() {
        return Err(Error::InvalidInput("messages is empty".into()));
    }
    Ok(messages.iter().map(lenient_turn).collect())
}

async fn chat(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Json<Value>> {
    // A body that is not JSON at all counts as a malformed message list
    // (400) rather than a server fault.
    let Json(body) = payload.map_err(|rejection| Error::InvalidInput(rejection.body_text()))?;
    let messages = parse_request(&body)?;
    info!(turns = messages.len(), "chat request");

    let message = respond(&messages)?;
    Ok(Json(json!({ "message": message })))
}

/// Turns a panic inside a handler into the generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    Error::Internal(anyhow!("handler panicked: {detail}")).into_response()
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .layer(CatchPanicLayer::custom(handle_panic))
}
