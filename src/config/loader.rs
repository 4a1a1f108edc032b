//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, EngineKind};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `NARRATOR_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `NARRATOR_SERVER__PORT=8080`
/// - `NARRATOR_ENGINE__KIND=command`
/// - `NARRATOR_ENGINE__URL=http://tts-server:5003`
/// - `NARRATOR_STORAGE__SCRATCH_DIR=/var/tmp/narrator`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5002)?
        .set_default("engine.kind", "http")?
        .set_default("engine.url", "http://localhost:5003")?
        .set_default("engine.timeout_secs", 120)?
        .set_default("engine.program", "tts")?
        .set_default("engine.model_name", "tts_models/en/vctk/vits")?
        .set_default("engine.use_cuda", false)?
        .set_default("engine.fake_duration_ms", 1000)?
        .set_default("engine.fake_sample_rate", 22050)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: NARRATOR_ENGINE__URL=http://tts-server:5003
    builder = builder.add_source(
        Environment::with_prefix("NARRATOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    match config.engine.kind {
        EngineKind::Http => {
            if config.engine.url.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Engine URL cannot be empty".to_string(),
                ));
            }
        }
        EngineKind::Command => {
            if config.engine.program.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Engine program cannot be empty".to_string(),
                ));
            }
        }
        EngineKind::Fake => {
            if config.engine.fake_duration_ms == 0 || config.engine.fake_sample_rate == 0 {
                return Err(ConfigError::ValidationError(
                    "Fake engine duration and sample rate must be positive".to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Engine: {}", config.engine.kind);
    match config.engine.kind {
        EngineKind::Http => {
            tracing::info!("Engine URL: {}", config.engine.url);
            tracing::info!("Engine Timeout: {}s", config.engine.timeout_secs);
        }
        EngineKind::Command => {
            tracing::info!("Engine Program: {}", config.engine.program.display());
            tracing::info!("Engine Model: {}", config.engine.model_name);
            tracing::info!("Engine CUDA: {}", config.engine.use_cuda);
        }
        EngineKind::Fake => {
            tracing::info!(
                "Fake Clip: {}ms @ {}Hz",
                config.engine.fake_duration_ms,
                config.engine.fake_sample_rate
            );
        }
    }
    tracing::info!("Scratch Directory: {:?}", config.storage.scratch_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_engine_url() {
        let mut config = AppConfig::default();
        config.engine.url = String::new();
        assert!(validate_config(&config).is_err());

        // command 引擎不需要 URL
        config.engine.kind = EngineKind::Command;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_fake_rate() {
        let mut config = AppConfig::default();
        config.engine.kind = EngineKind::Fake;
        config.engine.fake_sample_rate = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 6000

[engine]
kind = "fake"
fake_duration_ms = 250

[storage]
scratch_dir = "/tmp/narrator-test"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.engine.kind, EngineKind::Fake);
        assert_eq!(config.engine.fake_duration_ms, 250);
        assert_eq!(config.engine.fake_sample_rate, 22050);
        assert_eq!(
            config.storage.scratch_dir,
            std::path::PathBuf::from("/tmp/narrator-test")
        );
    }

    #[test]
    fn test_load_rejects_unknown_engine_kind() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[engine]\nkind = \"onnx\"").unwrap();

        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
