//! Speech Engine Port - TTS 推理引擎抽象
//!
//! 定义 TTS 推理的抽象接口，具体实现在 infrastructure/adapters 层

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::VoiceId;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Process error: {0}")]
    ProcessError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 单句合成请求
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的句子
    pub text: String,
    /// 说话人
    pub voice_id: VoiceId,
}

/// Speech Engine Port
///
/// 预训练多说话人模型的抽象接口。实现不要求可重入，调用方负责串行化
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    /// 将一句文本合成为 WAV 文件，写入 `destination`
    async fn synthesize_to_file(
        &self,
        request: SpeechRequest,
        destination: &Path,
    ) -> Result<(), TtsError>;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }

    /// 引擎名称（用于日志和健康检查）
    fn name(&self) -> &'static str;
}
