//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_combiner;
mod scratch_storage;
mod speech_engine;

pub use audio_combiner::{
    AudioClip, AudioCombinerPort, AudioSpec, CombineError, CombinedAudio, SampleKind,
};
pub use scratch_storage::{ScratchError, ScratchFile, ScratchStoragePort};
pub use speech_engine::{SpeechEnginePort, SpeechRequest, TtsError};
