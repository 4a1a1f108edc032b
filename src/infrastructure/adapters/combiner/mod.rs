//! Combiner Adapter - WAV 拼接实现

mod wav_combiner;

pub use wav_combiner::WavCombiner;
