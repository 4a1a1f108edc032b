//! Storage Adapter - 请求级临时存储

mod scratch_storage;

pub use scratch_storage::TempDirScratchStorage;
