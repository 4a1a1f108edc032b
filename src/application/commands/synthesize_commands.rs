//! Synthesize Commands - 语音合成命令

use crate::domain::voice::VoiceId;

/// 合成语音命令
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechCommand {
    pub text: String,
    /// 角色名，未提供或未映射时使用默认音色
    pub character_name: Option<String>,
}

/// 合成语音响应
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    /// 完整 WAV 文件内容
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
    pub voice_id: VoiceId,
    pub sentence_count: usize,
    pub duration_ms: u64,
}
