//! WAV Combiner - 基于 hound 的 WAV 拼接器
//!
//! 以第一个片段的格式打开输出，依次写入所有片段的采样帧（逐位拷贝，不重采样）

use std::io::{Read, Seek, Write};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::application::ports::{
    AudioClip, AudioCombinerPort, AudioSpec, CombineError, CombinedAudio, SampleKind,
    ScratchFile,
};

/// WAV 拼接器
#[derive(Debug, Default)]
pub struct WavCombiner;

impl WavCombiner {
    pub fn new() -> Self {
        Self
    }
}

fn wav_error(err: hound::Error) -> CombineError {
    match err {
        hound::Error::IoError(e) => CombineError::IoError(e.to_string()),
        other => CombineError::Wav(other.to_string()),
    }
}

impl From<WavSpec> for AudioSpec {
    fn from(spec: WavSpec) -> Self {
        Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            sample_kind: match spec.sample_format {
                SampleFormat::Int => SampleKind::Int,
                SampleFormat::Float => SampleKind::Float,
            },
        }
    }
}

/// 把 reader 的全部采样写入 writer，返回帧数
fn copy_frames<R, W>(mut reader: WavReader<R>, writer: &mut WavWriter<W>) -> Result<u64, CombineError>
where
    R: Read,
    W: Write + Seek,
{
    let frames = reader.duration() as u64;

    match reader.spec().sample_format {
        SampleFormat::Int => {
            for sample in reader.samples::<i32>() {
                writer.write_sample(sample.map_err(wav_error)?).map_err(wav_error)?;
            }
        }
        SampleFormat::Float => {
            for sample in reader.samples::<f32>() {
                writer.write_sample(sample.map_err(wav_error)?).map_err(wav_error)?;
            }
        }
    }

    Ok(frames)
}

impl AudioCombinerPort for WavCombiner {
    fn combine(
        &self,
        clips: Vec<AudioClip>,
        output: ScratchFile,
    ) -> Result<CombinedAudio, CombineError> {
        let clip_count = clips.len();
        let mut clips = clips.into_iter();
        let first = clips.next().ok_or(CombineError::EmptyClipList)?;

        let reader = WavReader::open(first.path()).map_err(wav_error)?;
        let spec = reader.spec();
        let mut writer = WavWriter::create(output.path(), spec).map_err(wav_error)?;

        let mut frames = copy_frames(reader, &mut writer)?;
        drop(first);

        for clip in clips {
            let reader = WavReader::open(clip.path()).map_err(wav_error)?;
            let found = reader.spec();
            if found != spec {
                return Err(CombineError::FormatMismatch {
                    index: clip.index,
                    expected: spec.into(),
                    found: found.into(),
                });
            }
            frames += copy_frames(reader, &mut writer)?;
        }

        writer.finalize().map_err(wav_error)?;

        tracing::debug!(
            clips = clip_count,
            frames = frames,
            output = %output.path().display(),
            "Clips combined"
        );

        Ok(CombinedAudio::new(output, spec.into(), frames))
    }
}
