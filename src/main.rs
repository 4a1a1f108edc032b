//! Narrator - 角色配音 TTS 服务
//!
//! 单线程运行时：TTS 引擎不可重入，所有合成经由同一把锁串行执行

use std::sync::Arc;

use narrator::application::SpeechEnginePort;
use narrator::config::{load_config, print_config, EngineConfig, EngineKind};
use narrator::domain::voice::VoiceMap;
use narrator::infrastructure::adapters::{
    CommandTtsClient, CommandTtsClientConfig, FakeTtsClient, FakeTtsClientConfig, HttpTtsClient,
    HttpTtsClientConfig, TempDirScratchStorage, WavCombiner,
};
use narrator::infrastructure::http::{AppState, HttpServer, ServerConfig};

/// 按配置构建 TTS 引擎（启动时构建一次，之后只读共享）
fn build_engine(config: &EngineConfig) -> anyhow::Result<Arc<dyn SpeechEnginePort>> {
    let engine: Arc<dyn SpeechEnginePort> = match config.kind {
        EngineKind::Http => {
            let http_config =
                HttpTtsClientConfig::new(config.url.clone()).with_timeout(config.timeout_secs);
            Arc::new(HttpTtsClient::new(http_config)?)
        }
        EngineKind::Command => Arc::new(CommandTtsClient::new(CommandTtsClientConfig {
            program: config.program.clone(),
            model_name: config.model_name.clone(),
            use_cuda: config.use_cuda,
        })),
        EngineKind::Fake => Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
            duration_ms: config.fake_duration_ms,
            sample_rate: config.fake_sample_rate,
        })),
    };

    Ok(engine)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},narrator={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Narrator - 角色配音 TTS 服务");
    print_config(&config);

    // 创建 TTS 引擎
    let engine = build_engine(&config.engine)?;
    if !engine.health_check().await {
        tracing::warn!(engine = engine.name(), "TTS engine health check failed at startup");
    }

    // 临时存储与拼接器
    let scratch = Arc::new(TempDirScratchStorage::new(&config.storage.scratch_dir)?);
    let combiner = Arc::new(WavCombiner::new());
    let voice_map = Arc::new(VoiceMap::builtin());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(voice_map, engine, combiner, scratch);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
