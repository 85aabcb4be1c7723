//! Waveform parameter value
//!
//! A plain `Copy` value holding every scalar the generator reads. Generation
//! takes it by reference, so there is no ordering between setter calls and
//! rendering to worry about.

use anyhow::bail;

/// Default buffer length used by the demonstration programs
pub const DEFAULT_BUFFER_SIZE: usize = 2048;
/// Default sample rate when nothing else is specified
pub const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

/// Time between samples, stored either directly or as a rate
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleSpacing {
    /// Seconds per sample
    Interval(f32),
    /// Samples per second
    Rate(f32),
}

impl SampleSpacing {
    /// Seconds per sample
    pub fn dt(self) -> f32 {
        match self {
            SampleSpacing::Interval(dt) => dt,
            SampleSpacing::Rate(fs) => 1.0 / fs,
        }
    }

    /// Samples per second
    pub fn sample_rate(self) -> f32 {
        match self {
            SampleSpacing::Interval(dt) => 1.0 / dt,
            SampleSpacing::Rate(fs) => fs,
        }
    }
}

/// Parameters for AM, FM and AFM synthesis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformParameters {
    pub carrier_frequency: f32, // Hz
    pub amplitude: f32,
    pub am_frequency: f32, // Hz
    pub am_depth: f32,
    pub fm_frequency: f32, // Hz
    pub fm_depth: f32,
    pub spacing: SampleSpacing,
    pub buffer_size: usize,
}

impl WaveformParameters {
    /// Carrier, amplitude and buffer length; modulation starts switched off
    pub fn new(carrier_frequency: f32, amplitude: f32, buffer_size: usize) -> Self {
        Self {
            carrier_frequency,
            amplitude,
            am_frequency: 0.0,
            am_depth: 0.0,
            fm_frequency: 0.0,
            fm_depth: 0.0,
            spacing: SampleSpacing::Rate(DEFAULT_SAMPLE_RATE),
            buffer_size,
        }
    }

    /// AM demonstration: 60 Hz carrier, 10 Hz modulator, depth 0.5
    pub fn am_demo() -> Self {
        Self::new(60.0, 2.0, DEFAULT_BUFFER_SIZE)
            .with_am(10.0, 0.5)
            .with_dt(0.0001)
    }

    /// FM demonstration: 100 Hz carrier, 40 Hz modulator, depth 0.75
    pub fn fm_demo() -> Self {
        Self::new(100.0, 2.0, DEFAULT_BUFFER_SIZE)
            .with_fm(40.0, 0.75)
            .with_dt(0.0001)
    }

    /// Both demonstration modulators applied to the 60 Hz carrier
    pub fn afm_demo() -> Self {
        Self::am_demo().with_fm(40.0, 0.75)
    }

    /// Values the desktop options panel started with
    pub fn host_default() -> Self {
        Self::new(1000.0, 1.0, DEFAULT_BUFFER_SIZE)
            .with_am(60.0, 1.0)
            .with_sample_rate(200.0)
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "am_demo" => Some(Self::am_demo()),
            "fm_demo" => Some(Self::fm_demo()),
            "afm_demo" => Some(Self::afm_demo()),
            "host_default" => Some(Self::host_default()),
            _ => None,
        }
    }

    pub const PRESET_NAMES: [&'static str; 4] = ["am_demo", "fm_demo", "afm_demo", "host_default"];

    pub fn with_am(mut self, frequency: f32, depth: f32) -> Self {
        self.am_frequency = frequency;
        self.am_depth = depth;
        self
    }

    pub fn with_fm(mut self, frequency: f32, depth: f32) -> Self {
        self.fm_frequency = frequency;
        self.fm_depth = depth;
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.spacing = SampleSpacing::Interval(dt);
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.spacing = SampleSpacing::Rate(sample_rate);
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    // Setters

    pub fn set_carrier_frequency(&mut self, frequency: f32) {
        self.carrier_frequency = frequency;
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    pub fn set_am_frequency(&mut self, frequency: f32) {
        self.am_frequency = frequency;
    }

    pub fn set_am_depth(&mut self, depth: f32) {
        self.am_depth = depth;
    }

    pub fn set_fm_frequency(&mut self, frequency: f32) {
        self.fm_frequency = frequency;
    }

    pub fn set_fm_depth(&mut self, depth: f32) {
        self.fm_depth = depth;
    }

    pub fn set_dt(&mut self, dt: f32) {
        self.spacing = SampleSpacing::Interval(dt);
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.spacing = SampleSpacing::Rate(sample_rate);
    }

    pub fn set_buffer_size(&mut self, buffer_size: usize) {
        self.buffer_size = buffer_size;
    }

    // Getters

    pub fn carrier_frequency(&self) -> f32 {
        self.carrier_frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn am_frequency(&self) -> f32 {
        self.am_frequency
    }

    pub fn am_depth(&self) -> f32 {
        self.am_depth
    }

    pub fn fm_frequency(&self) -> f32 {
        self.fm_frequency
    }

    pub fn fm_depth(&self) -> f32 {
        self.fm_depth
    }

    /// Effective seconds per sample, whichever form was stored
    pub fn dt(&self) -> f32 {
        self.spacing.dt()
    }

    /// Effective samples per second, whichever form was stored
    pub fn sample_rate(&self) -> f32 {
        self.spacing.sample_rate()
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Opt-in sanity check for callers that write files.
    ///
    /// Generation never calls this: zero or negative spacing and empty buffers
    /// are passed straight through to the formulas.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.buffer_size == 0 {
            bail!("buffer size must be greater than zero");
        }
        let dt = self.dt();
        if !dt.is_finite() || dt <= 0.0 {
            bail!("sample spacing must be finite and positive, got dt = {dt}");
        }
        Ok(())
    }
}

impl Default for WaveformParameters {
    fn default() -> Self {
        Self::new(1000.0, 1.0, DEFAULT_BUFFER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_forms_agree() {
        let by_rate = WaveformParameters::default().with_sample_rate(10000.0);
        let by_dt = WaveformParameters::default().with_dt(0.0001);
        assert!((by_rate.dt() - by_dt.dt()).abs() < 1e-9);
        assert!((by_rate.sample_rate() - by_dt.sample_rate()).abs() < 0.01);
    }

    #[test]
    fn test_default_spacing_is_a_rate() {
        let params = WaveformParameters::new(440.0, 1.0, 16);
        assert_eq!(params.spacing, SampleSpacing::Rate(DEFAULT_SAMPLE_RATE));
        assert_eq!(WaveformParameters::default().spacing, SampleSpacing::Rate(44100.0));
    }

    #[test]
    fn test_setters_and_getters() {
        let mut params = WaveformParameters::new(440.0, 0.5, 128);
        params.set_am_frequency(3.0);
        params.set_am_depth(0.25);
        params.set_fm_frequency(5.0);
        params.set_fm_depth(0.1);
        params.set_dt(0.001);
        params.set_buffer_size(64);

        assert_eq!(params.carrier_frequency(), 440.0);
        assert_eq!(params.amplitude(), 0.5);
        assert_eq!(params.am_frequency(), 3.0);
        assert_eq!(params.am_depth(), 0.25);
        assert_eq!(params.fm_frequency(), 5.0);
        assert_eq!(params.fm_depth(), 0.1);
        assert_eq!(params.dt(), 0.001);
        assert_eq!(params.buffer_size(), 64);
    }

    #[test]
    fn test_presets() {
        for name in WaveformParameters::PRESET_NAMES {
            assert!(WaveformParameters::preset(name).is_some(), "missing preset {name}");
        }
        assert!(WaveformParameters::preset("nope").is_none());

        let am = WaveformParameters::am_demo();
        assert_eq!(am.carrier_frequency, 60.0);
        assert_eq!(am.am_frequency, 10.0);
        assert_eq!(am.am_depth, 0.5);
        assert_eq!(am.dt(), 0.0001);
        assert_eq!(am.buffer_size, 2048);
    }

    #[test]
    fn test_validate() {
        assert!(WaveformParameters::am_demo().validate().is_ok());
        assert!(WaveformParameters::default().with_buffer_size(0).validate().is_err());
        assert!(WaveformParameters::default().with_sample_rate(0.0).validate().is_err());
        assert!(WaveformParameters::default().with_dt(-1.0).validate().is_err());
    }
}
