//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub engine: EngineConfig,

    /// 临时存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5002
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 引擎类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Coqui tts-server（HTTP）
    #[default]
    Http,
    /// Coqui tts 命令行（子进程）
    Command,
    /// 静音引擎，本地调试用
    Fake,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Http => write!(f, "http"),
            EngineKind::Command => write!(f, "command"),
            EngineKind::Fake => write!(f, "fake"),
        }
    }
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// 引擎类型
    #[serde(default)]
    pub kind: EngineKind,

    /// TTS 服务基础 URL（http）
    #[serde(default = "default_engine_url")]
    pub url: String,

    /// 请求超时时间（秒，http）
    #[serde(default = "default_engine_timeout")]
    pub timeout_secs: u64,

    /// 可执行文件（command）
    #[serde(default = "default_engine_program")]
    pub program: PathBuf,

    /// 模型名称（command）
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// 是否使用 GPU（command）
    #[serde(default)]
    pub use_cuda: bool,

    /// 每句静音时长（毫秒，fake）
    #[serde(default = "default_fake_duration")]
    pub fake_duration_ms: u64,

    /// 静音采样率（fake）
    #[serde(default = "default_fake_sample_rate")]
    pub fake_sample_rate: u32,
}

fn default_engine_url() -> String {
    "http://localhost:5003".to_string()
}

fn default_engine_timeout() -> u64 {
    120
}

fn default_engine_program() -> PathBuf {
    PathBuf::from("tts")
}

fn default_model_name() -> String {
    "tts_models/en/vctk/vits".to_string()
}

fn default_fake_duration() -> u64 {
    1000
}

fn default_fake_sample_rate() -> u32 {
    22050
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: EngineKind::default(),
            url: default_engine_url(),
            timeout_secs: default_engine_timeout(),
            program: default_engine_program(),
            model_name: default_model_name(),
            use_cuda: false,
            fake_duration_ms: default_fake_duration(),
            fake_sample_rate: default_fake_sample_rate(),
        }
    }
}

/// 临时存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 中间音频目录
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,
}

fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir().join("narrator")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            scratch_dir: default_scratch_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5002);
        assert_eq!(config.engine.kind, EngineKind::Http);
        assert_eq!(config.engine.url, "http://localhost:5003");
        assert_eq!(config.engine.model_name, "tts_models/en/vctk/vits");
        assert!(config.storage.scratch_dir.ends_with("narrator"));
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5002");
    }

    #[test]
    fn test_engine_kind_display() {
        assert_eq!(EngineKind::Command.to_string(), "command");
        assert_eq!(EngineKind::Fake.to_string(), "fake");
    }
}
