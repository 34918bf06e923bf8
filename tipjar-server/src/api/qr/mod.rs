//! QR Token API 模块

mod handler;

use axum::{Router, routing::{get, post}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/qr", post(handler::mint))
        .route("/qr/{token}", get(handler::resolve))
}
