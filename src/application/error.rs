//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{CombineError, ScratchError};
use crate::domain::SegmentError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（尚未分配任何资源）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 某一句合成失败，剩余句子不再合成
    #[error("Synthesis failed at sentence {index}: {message}")]
    SynthesisFailed { index: usize, message: String },

    /// 拼接失败
    #[error("Combine failed: {0}")]
    CombineFailed(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<SegmentError> for ApplicationError {
    fn from(err: SegmentError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<CombineError> for ApplicationError {
    fn from(err: CombineError) -> Self {
        Self::CombineFailed(err.to_string())
    }
}

impl From<ScratchError> for ApplicationError {
    fn from(err: ScratchError) -> Self {
        Self::StorageError(err.to_string())
    }
}
