//! Offline export of generated buffers to WAV

use anyhow::{Context, Result};
use std::path::Path;

/// Convert f32 samples to 16-bit PCM, clamping to -1.0..=1.0 first
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| {
            let clamped = if s.is_nan() { 0.0 } else { s.clamp(-1.0, 1.0) };
            (clamped * i16::MAX as f32) as i16
        })
        .collect()
}

/// Scale a buffer so its largest magnitude is 1.0.
///
/// Silent buffers, and buffers containing NaN or infinity, come back unchanged.
pub fn peak_normalize(samples: &[f32]) -> Vec<f32> {
    if samples.iter().any(|s| !s.is_finite()) {
        return samples.to_vec();
    }
    let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    if peak == 0.0 {
        return samples.to_vec();
    }
    samples.iter().map(|s| s / peak).collect()
}

/// Write mono 32-bit float WAV. Values are written as-is, even outside ±1.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("failed to finalize {}", path.display()))?;

    log::debug!("bounced {} samples at {} Hz to {}", samples.len(), sample_rate, path.display());
    Ok(())
}

/// Write mono 16-bit PCM WAV, clamping out-of-range samples
pub fn write_wav_i16<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for sample in to_pcm_i16(samples) {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("failed to finalize {}", path.display()))?;

    log::debug!("bounced {} pcm16 samples at {} Hz to {}", samples.len(), sample_rate, path.display());
    Ok(())
}

/// Round a (possibly fractional) rate to the integer a WAV header can hold
pub fn header_sample_rate(sample_rate: f32) -> Result<u32> {
    if !sample_rate.is_finite() || sample_rate < 1.0 || sample_rate > u32::MAX as f32 {
        log::warn!("sample rate {} does not fit a WAV header", sample_rate);
        anyhow::bail!("sample rate {sample_rate} cannot be stored in a WAV header");
    }
    Ok(sample_rate.round() as u32)
}
