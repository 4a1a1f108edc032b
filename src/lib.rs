//! Narrator - 角色配音 TTS 服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 文本分句
//! - Voice Context: 角色音色映射
//!
//! 应用层 (application/):
//! - Ports: SpeechEngine, AudioCombiner, ScratchStorage
//! - Commands: 合成命令处理器（分句 → 逐句合成 → 拼接 → 清理）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: TTS Client, WAV Combiner, Scratch Storage

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
