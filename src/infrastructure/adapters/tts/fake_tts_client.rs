//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终写出固定时长的静音 WAV，不实际调用模型

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

use crate::application::ports::{SpeechEnginePort, SpeechRequest, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 每句输出的音频时长（毫秒）
    pub duration_ms: u64,
    /// 采样率
    pub sample_rate: u32,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            sample_rate: 22050,
        }
    }
}

/// Fake TTS Client
///
/// 单声道 16 位静音，每句时长相同
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        tracing::info!(
            duration_ms = config.duration_ms,
            sample_rate = config.sample_rate,
            "FakeTtsClient initialized"
        );
        Self { config }
    }

    fn frame_count(&self) -> u64 {
        self.config.sample_rate as u64 * self.config.duration_ms / 1000
    }

    fn write_silence(&self, destination: &Path) -> Result<(), hound::Error> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: self.config.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(destination, spec)?;
        for _ in 0..self.frame_count() {
            writer.write_sample(0i16)?;
        }
        writer.finalize()
    }
}

#[async_trait]
impl SpeechEnginePort for FakeTtsClient {
    async fn synthesize_to_file(
        &self,
        request: SpeechRequest,
        destination: &Path,
    ) -> Result<(), TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "FakeTtsClient: writing silence"
        );

        self.write_silence(destination)
            .map_err(|e| TtsError::IoError(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_writes_silent_clip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let client = FakeTtsClient::new(FakeTtsClientConfig {
            duration_ms: 500,
            sample_rate: 16000,
        });

        client
            .synthesize_to_file(
                SpeechRequest {
                    text: "Hello.".to_string(),
                    voice_id: "p225".into(),
                },
                &path,
            )
            .await
            .unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 16000);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.duration(), 8000);
        assert!(reader.samples::<i16>().all(|s| s.unwrap() == 0));
    }
}
