//! Scratch Storage - 基于目录的请求级临时文件
//!
//! 实现 ScratchStoragePort trait

use std::path::{Path, PathBuf};

use crate::application::ports::{ScratchError, ScratchFile, ScratchStoragePort};

/// 目录临时存储
///
/// 每次分配在目录下创建一个唯一命名的 `.wav` 文件，生命周期交给 `ScratchFile`
pub struct TempDirScratchStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl TempDirScratchStorage {
    /// 创建新的临时存储（确保目录存在）
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, ScratchError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        std::fs::create_dir_all(&base_dir).map_err(|e| ScratchError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ScratchStoragePort for TempDirScratchStorage {
    fn allocate(&self, prefix: &str) -> Result<ScratchFile, ScratchError> {
        let path = tempfile::Builder::new()
            .prefix(&format!("{}-", prefix))
            .suffix(".wav")
            .tempfile_in(&self.base_dir)
            .map_err(|e| ScratchError::IoError(e.to_string()))?
            .into_temp_path()
            .keep()
            .map_err(|e| ScratchError::IoError(e.to_string()))?;

        tracing::trace!(path = %path.display(), "Scratch file allocated");

        Ok(ScratchFile::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_allocate_unique_files() {
        let temp_dir = tempdir().unwrap();
        let storage = TempDirScratchStorage::new(temp_dir.path()).unwrap();

        let a = storage.allocate("clip").unwrap();
        let b = storage.allocate("clip").unwrap();

        assert_ne!(a.path(), b.path());
        assert!(a.path().exists());
        assert!(a.path().starts_with(storage.base_dir()));

        let name = a.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("clip-"));
        assert!(name.ends_with(".wav"));
    }

    #[test]
    fn test_file_removed_on_drop() {
        let temp_dir = tempdir().unwrap();
        let storage = TempDirScratchStorage::new(temp_dir.path()).unwrap();

        let file = storage.allocate("combined").unwrap();
        std::fs::write(file.path(), b"RIFF").unwrap();
        let path = file.path().to_path_buf();

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_tolerates_missing_file() {
        let temp_dir = tempdir().unwrap();
        let storage = TempDirScratchStorage::new(temp_dir.path()).unwrap();

        let file = storage.allocate("clip").unwrap();
        std::fs::remove_file(file.path()).unwrap();

        // 删除失败只记录日志
        drop(file);
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let storage = TempDirScratchStorage::new(&nested).unwrap();
        assert!(nested.is_dir());

        let file = storage.allocate("clip").unwrap();
        assert!(file.path().starts_with(&nested));
    }
}
