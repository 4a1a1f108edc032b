//! Application State
//!
//! 启动时构建一次，以 `Arc` 注入所有 handler

use std::sync::Arc;

use crate::application::{
    AudioCombinerPort, ScratchStoragePort, SpeechEnginePort, SynthesizeSpeechHandler,
};
use crate::domain::voice::VoiceMap;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub engine: Arc<dyn SpeechEnginePort>,
    pub voice_map: Arc<VoiceMap>,

    // ========== Command Handlers ==========
    pub synthesize_handler: SynthesizeSpeechHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        voice_map: Arc<VoiceMap>,
        engine: Arc<dyn SpeechEnginePort>,
        combiner: Arc<dyn AudioCombinerPort>,
        scratch: Arc<dyn ScratchStoragePort>,
    ) -> Self {
        Self {
            engine: engine.clone(),
            voice_map: voice_map.clone(),
            synthesize_handler: SynthesizeSpeechHandler::new(voice_map, engine, combiner, scratch),
        }
    }
}
