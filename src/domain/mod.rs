//! Domain Layer - 领域层
//!
//! - Voice Context: 角色音色映射
//! - 文本分句器

pub mod voice;

mod text_segmenter;

pub use text_segmenter::{segment_text, split_sentences, SegmentError};
