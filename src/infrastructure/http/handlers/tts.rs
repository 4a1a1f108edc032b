//! TTS Handlers

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::SynthesizeSpeechCommand;
use crate::infrastructure::http::dto::SynthesizeRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成语音，返回完整 WAV
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let text = req
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Text is required".to_string()))?;

    let cmd = SynthesizeSpeechCommand {
        text,
        character_name: req.character_name,
    };

    let result = state.synthesize_handler.handle(cmd).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .header("X-Voice-Id", result.voice_id.as_str())
        .header("X-Sentence-Count", result.sentence_count)
        .body(Body::from(result.audio_data))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::application::{SpeechEnginePort, SpeechRequest, TtsError};
    use crate::domain::voice::VoiceMap;
    use crate::infrastructure::adapters::{
        FakeTtsClient, FakeTtsClientConfig, TempDirScratchStorage, WavCombiner,
    };
    use crate::infrastructure::http::{create_routes, AppState};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    /// 总是失败的引擎
    struct BrokenEngine;

    #[async_trait]
    impl SpeechEnginePort for BrokenEngine {
        async fn synthesize_to_file(
            &self,
            _request: SpeechRequest,
            _destination: &Path,
        ) -> Result<(), TtsError> {
            Err(TtsError::ServiceError("speaker not found".to_string()))
        }

        async fn health_check(&self) -> bool {
            false
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn create_app(engine: Arc<dyn SpeechEnginePort>) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        let state = AppState::new(
            Arc::new(VoiceMap::builtin()),
            engine,
            Arc::new(WavCombiner::new()),
            Arc::new(TempDirScratchStorage::new(dir.path()).unwrap()),
        );
        (create_routes().with_state(Arc::new(state)), dir)
    }

    fn fake_app() -> (Router, TempDir) {
        create_app(Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default())))
    }

    fn post_tts(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/tts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_body(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn read_error(response: axum::response::Response) -> String {
        let body = read_body(response).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["error"].as_str().unwrap().to_string()
    }

    fn scratch_is_empty(dir: &TempDir) -> bool {
        std::fs::read_dir(dir.path()).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_synthesize_returns_combined_wav() {
        let (app, dir) = fake_app();

        let response = app
            .oneshot(post_tts(
                r#"{"text": "Hi there. Bye now.", "characterName": "Max the Guardian"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/wav");
        assert_eq!(response.headers()["X-Voice-Id"], "p232");
        assert_eq!(response.headers()["X-Sentence-Count"], "2");

        let body = read_body(response).await;
        let reader = hound::WavReader::new(std::io::Cursor::new(body)).unwrap();
        let seconds = reader.duration() as f64 / reader.spec().sample_rate as f64;
        assert!((seconds - 2.0).abs() < 0.01, "unexpected length {}s", seconds);

        assert!(scratch_is_empty(&dir));
    }

    #[tokio::test]
    async fn test_missing_text_is_bad_request() {
        let (app, _dir) = fake_app();

        let response = app
            .oneshot(post_tts(r#"{"characterName": "Luna the Explorer"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await, "Text is required");
    }

    #[tokio::test]
    async fn test_empty_text_is_bad_request() {
        let (app, _dir) = fake_app();

        let response = app.oneshot(post_tts(r#"{"text": ""}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await, "Text is required");
    }

    #[tokio::test]
    async fn test_whitespace_text_has_no_sentences() {
        let (app, dir) = fake_app();

        let response = app.oneshot(post_tts(r#"{"text": "  \n  "}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await, "No valid sentences found in text");
        assert!(scratch_is_empty(&dir));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, _dir) = fake_app();

        let response = app.oneshot(post_tts("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(read_error(response).await.starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_engine_failure_is_internal_error() {
        let (app, dir) = create_app(Arc::new(BrokenEngine));

        let response = app
            .oneshot(post_tts(r#"{"text": "One. Two."}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_error(response).await, "Failed to generate speech");
        assert!(scratch_is_empty(&dir));
    }

    #[tokio::test]
    async fn test_ping_reports_engine() {
        let (app, _dir) = create_app(Arc::new(BrokenEngine));

        let response = app
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["engine"], "broken");
        assert_eq!(json["engine_healthy"], false);
    }

    #[tokio::test]
    async fn test_list_voices() {
        let (app, _dir) = fake_app();

        let response = app
            .oneshot(Request::builder().uri("/api/voices").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(json["default_voice"], "p225");
        assert_eq!(json["voices"].as_array().unwrap().len(), 4);
        assert_eq!(json["voices"][0]["character"], "Luna the Explorer");
        assert_eq!(json["voices"][0]["voice"], "p237");
    }
}
