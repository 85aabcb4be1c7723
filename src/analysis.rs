//! Magnitude spectrum of generated buffers
//!
//! Runs a forward FFT over the whole buffer with no windowing, so a carrier
//! that completes a whole number of cycles lands on a single bin.

use rustfft::{num_complex::Complex, FftPlanner};

/// One-sided magnitude spectrum with its frequency axis
#[derive(Clone, Debug, Default)]
pub struct Spectrum {
    /// `k * sample_rate / N` for each bin
    pub frequencies: Vec<f32>,
    /// `|X[k]|` for each bin
    pub magnitudes: Vec<f32>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Bin with the largest magnitude as `(frequency, magnitude)`.
    ///
    /// DC is skipped unless it is the only bin. NaN magnitudes never win.
    pub fn peak(&self) -> Option<(f32, f32)> {
        let skip = if self.len() > 1 { 1 } else { 0 };
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .skip(skip)
            .filter(|(_, m)| !m.is_nan())
            .fold(None, |best: Option<(f32, f32)>, (&f, &m)| match best {
                Some((_, best_m)) if best_m >= m => best,
                _ => Some((f, m)),
            })
    }
}

/// Frequency axis for an `size`-point transform at `sample_rate`
pub fn frequency_axis(size: usize, sample_rate: f32) -> Vec<f32> {
    let duration = size as f32 / sample_rate;
    (0..size / 2).map(|k| k as f32 / duration).collect()
}

/// Forward FFT of `samples`, first half only
pub fn magnitude_spectrum(samples: &[f32], sample_rate: f32) -> Spectrum {
    let size = samples.len();
    if size == 0 {
        return Spectrum::default();
    }

    let mut buffer: Vec<Complex<f32>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(size);
    fft.process(&mut buffer);

    // Second half mirrors the first for real input
    let num_bins = size / 2;
    let magnitudes = buffer[..num_bins].iter().map(|c| c.norm()).collect();

    Spectrum {
        frequencies: frequency_axis(size, sample_rate),
        magnitudes,
    }
}
