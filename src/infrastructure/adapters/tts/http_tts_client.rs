//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 SpeechEnginePort trait，对接 Coqui `tts-server`
//!
//! 外部 TTS API:
//! GET http://localhost:5003/api/tts?text=...&speaker_id=p225
//! Response: audio/wav binary

use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

use crate::application::ports::{SpeechEnginePort, SpeechRequest, TtsError};

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5003".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
///
/// 通过 HTTP 调用外部 TTS 服务，把返回的 WAV 写入目标文件
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn tts_url(&self) -> String {
        format!("{}/api/tts", self.config.base_url.trim_end_matches('/'))
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechEnginePort for HttpTtsClient {
    async fn synthesize_to_file(
        &self,
        request: SpeechRequest,
        destination: &Path,
    ) -> Result<(), TtsError> {
        tracing::debug!(
            url = %self.tts_url(),
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "Sending TTS request"
        );

        let response = self
            .client
            .get(self.tts_url())
            .query(&[
                ("text", request.text.as_str()),
                ("speaker_id", request.voice_id.as_str()),
                ("style_wav", ""),
                ("language_id", ""),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::NetworkError(format!("Failed to read audio: {}", e)))?;

        if audio_data.is_empty() {
            return Err(TtsError::ServiceError("Empty audio response".to_string()));
        }

        tokio::fs::write(destination, &audio_data)
            .await
            .map_err(|e| TtsError::IoError(e.to_string()))?;

        tracing::debug!(audio_size = audio_data.len(), "TTS request completed");

        Ok(())
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5003");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::new("http://example.com:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = HttpTtsClient::new(HttpTtsClientConfig::new("http://tts:5003/")).unwrap();
        assert_eq!(client.tts_url(), "http://tts:5003/api/tts");
        assert_eq!(client.health_url(), "http://tts:5003/");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        // 端口 9 (discard) 通常无人监听
        let client = HttpTtsClient::new(
            HttpTtsClientConfig::new("http://127.0.0.1:9").with_timeout(2),
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();

        let result = client
            .synthesize_to_file(
                SpeechRequest {
                    text: "Hello.".to_string(),
                    voice_id: "p225".into(),
                },
                &dir.path().join("out.wav"),
            )
            .await;

        assert!(matches!(
            result,
            Err(TtsError::NetworkError(_)) | Err(TtsError::Timeout)
        ));
        assert!(!client.health_check().await);
    }
}
