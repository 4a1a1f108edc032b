//! Scratch Storage Port - 请求级临时文件
//!
//! 每个中间音频文件都由一个 `ScratchFile` 持有，守卫被 drop 时删除文件

use std::path::{Path, PathBuf};

use thiserror::Error;

/// 临时存储错误
#[derive(Debug, Error)]
pub enum ScratchError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// 临时文件守卫
///
/// 不变量:
/// - 文件在守卫 drop 时被删除，且只删除一次
/// - 删除失败只记录日志，不向上传播
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// 接管一个已存在的文件
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::trace!(path = %self.path.display(), "Scratch file removed");
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove scratch file"
                );
            }
        }
    }
}

/// Scratch Storage Port
pub trait ScratchStoragePort: Send + Sync {
    /// 分配一个新的唯一临时文件，`prefix` 用于区分用途（clip / combined）
    fn allocate(&self, prefix: &str) -> Result<ScratchFile, ScratchError>;
}
