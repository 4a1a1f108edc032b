//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// TTS DTOs
// ============================================================================

/// 合成请求体
///
/// `text` 声明为可选，缺失时由 handler 返回统一的 400 信息
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: Option<String>,
    #[serde(rename = "characterName")]
    pub character_name: Option<String>,
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoiceEntryDto {
    pub character: String,
    pub voice: String,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub default_voice: String,
    pub voices: Vec<VoiceEntryDto>,
}
