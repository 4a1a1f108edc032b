//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 音色标识
///
/// 对应 TTS 模型说话人目录中的一个说话人（如 VCTK 的 `p225`），对本服务是不透明字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<&str> for VoiceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
