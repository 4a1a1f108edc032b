//! 文本分割器
//!
//! 按句末标点和换行把输入文本切成有序的句子序列

use thiserror::Error;

/// 分割错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// 分割后没有任何有效句子（如输入只有空白）
    #[error("No valid sentences found in text")]
    EmptyInput,
}

/// 检查是否为句子边界（边界字符保留在前一句末尾）
#[inline]
fn is_boundary(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '\n')
}

/// 对文本进行分句
///
/// 分割规则：
/// 1. 在 `.` `!` `?` 或换行符之后立即断开，紧随其后的空白被吞掉
/// 2. 标点留在前一句
/// 3. 每段去除首尾空白，空段丢弃
///
/// 连续标点（省略号）不做合并，每个标点都是一个边界
pub fn segment_text(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);

        if is_boundary(ch) {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    // 剩余内容（无句末标点的尾句）
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// 分句并要求至少有一句
pub fn split_sentences(text: &str) -> Result<Vec<String>, SegmentError> {
    let sentences = segment_text(text);
    if sentences.is_empty() {
        return Err(SegmentError::EmptyInput);
    }
    Ok(sentences)
}
