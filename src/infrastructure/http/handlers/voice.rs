//! Voice Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{VoiceEntryDto, VoicesResponse};
use crate::infrastructure::http::state::AppState;

/// 列出角色音色映射
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    let voices = state
        .voice_map
        .entries()
        .into_iter()
        .map(|(character, voice)| VoiceEntryDto {
            character: character.to_string(),
            voice: voice.to_string(),
        })
        .collect();

    Json(VoicesResponse {
        default_voice: state.voice_map.default_voice().to_string(),
        voices,
    })
}
