//! HTTP Routes
//!
//! API Endpoints:
//! - /api/tts      POST  文本合成为 WAV
//! - /api/voices   GET   角色音色映射
//! - /api/ping     GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/tts", post(handlers::synthesize))
        .route("/voices", get(handlers::list_voices))
}
