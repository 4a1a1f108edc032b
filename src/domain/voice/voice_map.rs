//! Voice Context - 角色到音色的静态映射

use std::collections::HashMap;

use super::VoiceId;

/// 未命中映射时使用的默认音色
pub const DEFAULT_VOICE: &str = "p225";

/// 内置角色音色表（VCTK 说话人）
const BUILTIN_VOICES: &[(&str, &str)] = &[
    ("Max the Guardian", "p232"),
    ("Luna the Explorer", "p237"),
    ("Zara the Inventor", "p240"),
    ("Rio the Nature Guide", "p226"),
];

/// 角色音色映射
///
/// 不变量:
/// - 启动时构建，之后只读
/// - resolve 总是返回一个音色（未命中时返回默认音色）
#[derive(Debug, Clone)]
pub struct VoiceMap {
    voices: HashMap<String, VoiceId>,
    default_voice: VoiceId,
}

impl VoiceMap {
    /// 使用内置角色表构建
    pub fn builtin() -> Self {
        let voices = BUILTIN_VOICES
            .iter()
            .map(|(character, voice)| (character.to_string(), VoiceId::new(*voice)))
            .collect();

        Self {
            voices,
            default_voice: VoiceId::new(DEFAULT_VOICE),
        }
    }

    /// 根据角色名解析音色
    pub fn resolve(&self, character_name: Option<&str>) -> VoiceId {
        character_name
            .and_then(|name| self.voices.get(name))
            .unwrap_or(&self.default_voice)
            .clone()
    }

    pub fn default_voice(&self) -> &VoiceId {
        &self.default_voice
    }

    /// 列出所有映射，按角色名排序
    pub fn entries(&self) -> Vec<(&str, &VoiceId)> {
        let mut entries: Vec<(&str, &VoiceId)> = self
            .voices
            .iter()
            .map(|(character, voice)| (character.as_str(), voice))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for VoiceMap {
    fn default() -> Self {
        Self::builtin()
    }
}
