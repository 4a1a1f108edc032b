//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 角色名到音色的映射
//! - 音色标识值对象

mod value_objects;
mod voice_map;

pub use value_objects::VoiceId;
pub use voice_map::{VoiceMap, DEFAULT_VOICE};
