//! 应用层 - 命令
//!
//! 每个请求都是一次写操作：合成、拼接、清理

mod synthesize_commands;

pub mod handlers;

pub use synthesize_commands::*;
