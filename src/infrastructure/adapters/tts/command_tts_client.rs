//! Command TTS Client - 以子进程方式调用 TTS 命令行
//!
//! 默认对接 Coqui `tts` CLI:
//! tts --text "..." --model_name tts_models/en/vctk/vits --speaker_idx p225 --out_path out.wav

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::application::ports::{SpeechEnginePort, SpeechRequest, TtsError};

/// stderr 截断长度，避免日志过长
const STDERR_LIMIT: usize = 512;

/// 命令行 TTS 客户端配置
#[derive(Debug, Clone)]
pub struct CommandTtsClientConfig {
    /// 可执行文件
    pub program: PathBuf,
    /// 模型名称
    pub model_name: String,
    /// 是否使用 GPU
    pub use_cuda: bool,
}

impl Default for CommandTtsClientConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("tts"),
            model_name: "tts_models/en/vctk/vits".to_string(),
            use_cuda: false,
        }
    }
}

/// 命令行 TTS 客户端
pub struct CommandTtsClient {
    config: CommandTtsClientConfig,
}

impl CommandTtsClient {
    pub fn new(config: CommandTtsClientConfig) -> Self {
        tracing::info!(
            program = %config.program.display(),
            model = %config.model_name,
            use_cuda = config.use_cuda,
            "CommandTtsClient initialized"
        );
        Self { config }
    }

    fn build_command(&self, request: &SpeechRequest, destination: &Path) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .arg("--text")
            .arg(&request.text)
            .arg("--model_name")
            .arg(&self.config.model_name)
            .arg("--speaker_idx")
            .arg(request.voice_id.as_str())
            .arg("--out_path")
            .arg(destination);

        if self.config.use_cuda {
            command.arg("--use_cuda").arg("true");
        }

        command.kill_on_drop(true);
        command
    }
}

#[async_trait]
impl SpeechEnginePort for CommandTtsClient {
    async fn synthesize_to_file(
        &self,
        request: SpeechRequest,
        destination: &Path,
    ) -> Result<(), TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "Running TTS command"
        );

        let output = self
            .build_command(&request, destination)
            .output()
            .await
            .map_err(|e| {
                TtsError::ProcessError(format!(
                    "Failed to spawn {}: {}",
                    self.config.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr: String = stderr.trim().chars().take(STDERR_LIMIT).collect();
            return Err(TtsError::ServiceError(format!(
                "{} exited with {}: {}",
                self.config.program.display(),
                output.status,
                stderr
            )));
        }

        // 目标文件由调用方预先创建（空文件），命令成功但未写入视为失败
        let written = tokio::fs::metadata(destination)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if written == 0 {
            return Err(TtsError::ServiceError(
                "TTS command produced no audio".to_string(),
            ));
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        Command::new(&self.config.program)
            .arg("--help")
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "command"
    }
}
