//! Closed-form AM / FM / AFM sample generation
//!
//! For sample index `i` and `t = i * dt`:
//!
//! - AM:  `A * (1 + m_a * sin(2π f_a t)) * sin(2π f_c t) / sqrt(1 + m_a² / 2)`
//! - FM:  `A * sin(2π f_c t + (m_f * f_c / (2 f_m)) * sin(2π f_m t))`
//! - AFM: the AM envelope and normalization applied to the FM carrier
//!
//! All three share one loop body; [`Modulation`] decides which terms apply.
//! Nothing is validated or clamped. An FM modulator at 0 Hz divides by zero
//! and yields NaN samples instead of panicking.

use crate::gen::params::WaveformParameters;
use crate::gen::waveform::Modulation;

const TWO_PI: f32 = 2.0 * std::f32::consts::PI;

/// Per-call constants derived from the parameters
#[derive(Clone, Copy, Debug)]
struct ModulationTerms {
    kind: Modulation,
    carrier_frequency: f32,
    amplitude: f32,
    am_frequency: f32,
    am_depth: f32,
    fm_frequency: f32,
    normalization: f32,
    fm_index: f32,
}

impl ModulationTerms {
    fn new(kind: Modulation, params: &WaveformParameters) -> Self {
        Self {
            kind,
            carrier_frequency: params.carrier_frequency,
            amplitude: params.amplitude,
            am_frequency: params.am_frequency,
            am_depth: params.am_depth,
            fm_frequency: params.fm_frequency,
            normalization: (1.0 + params.am_depth.powi(2) / 2.0).sqrt(),
            fm_index: (params.fm_depth * params.carrier_frequency) / (2.0 * params.fm_frequency),
        }
    }

    #[inline]
    fn sample(&self, t: f32) -> f32 {
        let mut phase = TWO_PI * self.carrier_frequency * t;
        if self.kind.modulates_phase() {
            phase += self.fm_index * (TWO_PI * self.fm_frequency * t).sin();
        }

        if self.kind.modulates_amplitude() {
            let envelope = self.amplitude * (1.0 + self.am_depth * (TWO_PI * self.am_frequency * t).sin());
            envelope * phase.sin() / self.normalization
        } else {
            self.amplitude * phase.sin()
        }
    }
}

/// Generate `params.buffer_size` samples of the requested kind
pub fn generate(kind: Modulation, params: &WaveformParameters) -> Vec<f32> {
    let terms = ModulationTerms::new(kind, params);
    let dt = params.dt();
    let samples: Vec<f32> = (0..params.buffer_size)
        .map(|i| terms.sample(i as f32 * dt))
        .collect();

    log::debug!(
        "generated {} {} samples (carrier {} Hz, dt {})",
        samples.len(),
        kind,
        params.carrier_frequency,
        dt
    );
    samples
}

/// Fill a caller-owned buffer.
///
/// Writes `min(buffer.len(), params.buffer_size)` samples starting at index 0
/// and returns how many were written. The rest of the buffer is untouched.
pub fn fill(kind: Modulation, params: &WaveformParameters, buffer: &mut [f32]) -> usize {
    let terms = ModulationTerms::new(kind, params);
    let dt = params.dt();
    let count = buffer.len().min(params.buffer_size);

    for (i, sample) in buffer[..count].iter_mut().enumerate() {
        *sample = terms.sample(i as f32 * dt);
    }
    count
}

/// A single sample at index `index`
pub fn sample_at(kind: Modulation, params: &WaveformParameters, index: usize) -> f32 {
    ModulationTerms::new(kind, params).sample(index as f32 * params.dt())
}

/// Sample times `i * dt` matching [`generate`]
pub fn time_axis(params: &WaveformParameters) -> Vec<f32> {
    let dt = params.dt();
    (0..params.buffer_size).map(|i| i as f32 * dt).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_zero() {
        let params = WaveformParameters::afm_demo();
        for kind in Modulation::ALL {
            assert_eq!(sample_at(kind, &params, 0), 0.0, "{kind} sample 0");
        }
    }

    #[test]
    fn test_fill_respects_shorter_buffer() {
        let params = WaveformParameters::am_demo();
        let mut buffer = vec![9.0; 16];
        assert_eq!(fill(Modulation::Am, &params, &mut buffer), 16);

        let expected = generate(Modulation::Am, &params);
        assert_eq!(&buffer[..], &expected[..16]);
    }

    #[test]
    fn test_fill_leaves_tail_untouched() {
        let params = WaveformParameters::fm_demo().with_buffer_size(4);
        let mut buffer = vec![9.0; 8];
        assert_eq!(fill(Modulation::Fm, &params, &mut buffer), 4);
        assert!(buffer[4..].iter().all(|&s| s == 9.0));
    }

    #[test]
    fn test_am_ignores_fm_terms() {
        // fm_frequency = 0 would poison the phase if AM evaluated it
        let params = WaveformParameters::am_demo().with_fm(0.0, 0.75);
        assert!(generate(Modulation::Am, &params).iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_time_axis() {
        let params = WaveformParameters::am_demo().with_buffer_size(3);
        let axis = time_axis(&params);
        assert_eq!(axis.len(), 3);
        assert_eq!(axis[0], 0.0);
        assert!((axis[2] - 0.0002).abs() < 1e-9);
    }
}
