//! Audio Combiner Port - 音频拼接抽象
//!
//! 把按句子顺序排列的 WAV 片段首尾相接成一个 WAV

use std::path::Path;

use thiserror::Error;

use super::scratch_storage::ScratchFile;

/// 拼接错误
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("No clips to combine")]
    EmptyClipList,

    #[error("Clip {index} format {found} does not match {expected}")]
    FormatMismatch {
        index: usize,
        expected: AudioSpec,
        found: AudioSpec,
    },

    #[error("WAV error: {0}")]
    Wav(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 采样格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Int,
    Float,
}

/// 音频格式参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_kind: SampleKind,
}

impl std::fmt::Display for AudioSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.sample_kind {
            SampleKind::Int => "int",
            SampleKind::Float => "float",
        };
        write!(
            f,
            "{}Hz/{}ch/{}bit {}",
            self.sample_rate, self.channels, self.bits_per_sample, kind
        )
    }
}

/// 单句合成结果
///
/// 独占一个临时文件，被拼接消费或请求失败时释放
#[derive(Debug)]
pub struct AudioClip {
    /// 句子序号（从 0 开始）
    pub index: usize,
    file: ScratchFile,
}

impl AudioClip {
    pub fn new(index: usize, file: ScratchFile) -> Self {
        Self { index, file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// 拼接结果
#[derive(Debug)]
pub struct CombinedAudio {
    file: ScratchFile,
    /// 输出格式（取自第一个片段）
    pub spec: AudioSpec,
    /// 总帧数
    pub frames: u64,
}

impl CombinedAudio {
    pub fn new(file: ScratchFile, spec: AudioSpec, frames: u64) -> Self {
        Self { file, spec, frames }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// 时长（毫秒）
    pub fn duration_ms(&self) -> u64 {
        if self.spec.sample_rate == 0 {
            return 0;
        }
        self.frames * 1000 / self.spec.sample_rate as u64
    }
}

/// Audio Combiner Port
///
/// 阻塞式文件 IO，调用方应在 blocking 线程上执行
pub trait AudioCombinerPort: Send + Sync {
    /// 拼接片段
    ///
    /// # Arguments
    /// * `clips` - 按句子顺序排列的片段，按值传入，拼接后即释放
    /// * `output` - 输出文件
    fn combine(
        &self,
        clips: Vec<AudioClip>,
        output: ScratchFile,
    ) -> Result<CombinedAudio, CombineError>;
}
