//! Ping Handler
//!
//! 健康检查，同时探测 TTS 引擎

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub engine_healthy: bool,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: state.engine.name(),
        engine_healthy: state.engine.health_check().await,
    })
}
