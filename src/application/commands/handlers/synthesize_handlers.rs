//! Synthesize Command Handlers
//!
//! 请求处理流程:
//! RECEIVED → SEGMENTED → SYNTHESIZING(i=1..N) → COMBINING → READY → CLEANED_UP
//! 任何阶段失败都直接返回错误；临时文件由 `ScratchFile` 守卫在离开作用域时删除

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::commands::synthesize_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioClip, AudioCombinerPort, ScratchStoragePort, SpeechEnginePort, SpeechRequest,
};
use crate::domain::split_sentences;
use crate::domain::voice::{VoiceId, VoiceMap};

/// 日志中句子预览的最大字符数
const PREVIEW_CHARS: usize = 30;

/// SynthesizeSpeech Handler - 分句、逐句合成、拼接
pub struct SynthesizeSpeechHandler {
    voice_map: Arc<VoiceMap>,
    engine: Arc<dyn SpeechEnginePort>,
    combiner: Arc<dyn AudioCombinerPort>,
    scratch: Arc<dyn ScratchStoragePort>,
    /// 引擎不可重入，整个请求持有此锁
    gate: Mutex<()>,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        voice_map: Arc<VoiceMap>,
        engine: Arc<dyn SpeechEnginePort>,
        combiner: Arc<dyn AudioCombinerPort>,
        scratch: Arc<dyn ScratchStoragePort>,
    ) -> Self {
        Self {
            voice_map,
            engine,
            combiner,
            scratch,
            gate: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        cmd: SynthesizeSpeechCommand,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let voice_id = self.voice_map.resolve(cmd.character_name.as_deref());
        let span = tracing::info_span!(
            "synthesize",
            request_id = %Uuid::new_v4(),
            voice = %voice_id,
        );

        self.process(cmd, voice_id).instrument(span).await
    }

    async fn process(
        &self,
        cmd: SynthesizeSpeechCommand,
        voice_id: VoiceId,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        if cmd.text.is_empty() {
            return Err(ApplicationError::validation("Text is required"));
        }

        let sentences = split_sentences(&cmd.text)?;
        let total = sentences.len();

        tracing::info!(
            character = ?cmd.character_name,
            sentence_count = total,
            "Text segmented"
        );

        let _gate = self.gate.lock().await;

        let mut clips: Vec<AudioClip> = Vec::with_capacity(total);
        for (index, sentence) in sentences.into_iter().enumerate() {
            let file = self.scratch.allocate("clip")?;

            tracing::debug!(
                sentence = index + 1,
                total = total,
                preview = %preview(&sentence),
                "Synthesizing sentence"
            );

            let request = SpeechRequest {
                text: sentence,
                voice_id: voice_id.clone(),
            };

            if let Err(e) = self.engine.synthesize_to_file(request, file.path()).await {
                tracing::error!(
                    sentence = index + 1,
                    total = total,
                    engine = self.engine.name(),
                    error = %e,
                    "Sentence synthesis failed, aborting request"
                );
                return Err(ApplicationError::SynthesisFailed {
                    index,
                    message: e.to_string(),
                });
            }

            clips.push(AudioClip::new(index, file));
        }

        let output = self.scratch.allocate("combined")?;
        let combiner = self.combiner.clone();
        let combined = tokio::task::spawn_blocking(move || combiner.combine(clips, output))
            .await
            .map_err(|e| ApplicationError::internal(format!("Combine task failed: {}", e)))??;

        let audio_data = tokio::fs::read(combined.path())
            .await
            .map_err(|e| ApplicationError::StorageError(e.to_string()))?;
        let duration_ms = combined.duration_ms();

        tracing::info!(
            sentence_count = total,
            spec = %combined.spec,
            frames = combined.frames,
            duration_ms = duration_ms,
            size = audio_data.len(),
            "Speech synthesized"
        );

        Ok(SynthesizeSpeechResponse {
            audio_data,
            content_type: "audio/wav",
            voice_id,
            sentence_count: total,
            duration_ms,
        })
    }
}

fn preview(sentence: &str) -> String {
    sentence.chars().take(PREVIEW_CHARS).collect()
}
