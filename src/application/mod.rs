//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechEngine、AudioCombiner、ScratchStorage）
//! - commands: 合成命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::SynthesizeSpeechHandler, SynthesizeSpeechCommand, SynthesizeSpeechResponse,
};

pub use error::ApplicationError;

pub use ports::{
    // Audio combiner
    AudioClip,
    AudioCombinerPort,
    AudioSpec,
    CombineError,
    CombinedAudio,
    SampleKind,
    // Scratch storage
    ScratchError,
    ScratchFile,
    ScratchStoragePort,
    // Speech engine
    SpeechEnginePort,
    SpeechRequest,
    TtsError,
};
