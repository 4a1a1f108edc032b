//! TTS Adapter - 语音合成引擎实现

mod command_tts_client;
mod fake_tts_client;
mod http_tts_client;

pub use command_tts_client::{CommandTtsClient, CommandTtsClientConfig};
pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use http_tts_client::*;
