use crate::gen::generator;
use crate::gen::params::{SampleSpacing, WaveformParameters};
use crate::gen::waveform::Modulation;

/// Parameter object with one getter/setter per field and buffer-returning
/// generators, the shape host bindings expect.
///
/// Each generation call snapshots the current parameters, so setter order only
/// matters relative to the next call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AfmWave {
    params: WaveformParameters,
}

impl AfmWave {
    pub fn new(carrier_frequency: f32, amplitude: f32, buffer_size: usize) -> Self {
        Self {
            params: WaveformParameters::new(carrier_frequency, amplitude, buffer_size),
        }
    }

    pub fn with_parameters(params: WaveformParameters) -> Self {
        Self { params }
    }

    /// Copy of the current parameters
    pub fn parameters(&self) -> WaveformParameters {
        self.params
    }

    pub fn set_carrier_frequency(&mut self, frequency: f32) {
        self.params.set_carrier_frequency(frequency);
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.params.set_amplitude(amplitude);
    }

    pub fn set_am_frequency(&mut self, frequency: f32) {
        self.params.set_am_frequency(frequency);
    }

    pub fn set_fm_frequency(&mut self, frequency: f32) {
        self.params.set_fm_frequency(frequency);
    }

    pub fn set_am_depth(&mut self, depth: f32) {
        self.params.set_am_depth(depth);
    }

    pub fn set_fm_depth(&mut self, depth: f32) {
        self.params.set_fm_depth(depth);
    }

    pub fn set_fs(&mut self, fs: f32) {
        self.params.set_sample_rate(fs);
    }

    pub fn set_dt(&mut self, dt: f32) {
        self.params.set_dt(dt);
    }

    pub fn set_buffer_size(&mut self, buffer_size: usize) {
        self.params.set_buffer_size(buffer_size);
    }

    pub fn carrier_frequency(&self) -> f32 {
        self.params.carrier_frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.params.amplitude
    }

    pub fn am_frequency(&self) -> f32 {
        self.params.am_frequency
    }

    pub fn fm_frequency(&self) -> f32 {
        self.params.fm_frequency
    }

    pub fn am_depth(&self) -> f32 {
        self.params.am_depth
    }

    pub fn fm_depth(&self) -> f32 {
        self.params.fm_depth
    }

    pub fn fs(&self) -> f32 {
        self.params.sample_rate()
    }

    pub fn dt(&self) -> f32 {
        self.params.dt()
    }

    /// True when the spacing was last set as a rate rather than an interval
    pub fn uses_sample_rate(&self) -> bool {
        matches!(self.params.spacing, SampleSpacing::Rate(_))
    }

    pub fn buffer_size(&self) -> usize {
        self.params.buffer_size
    }

    pub fn wave(&self, kind: Modulation) -> Vec<f32> {
        generator::generate(kind, &self.params)
    }

    pub fn am_wave(&self) -> Vec<f32> {
        self.wave(Modulation::Am)
    }

    pub fn fm_wave(&self) -> Vec<f32> {
        self.wave(Modulation::Fm)
    }

    pub fn afm_wave(&self) -> Vec<f32> {
        self.wave(Modulation::Afm)
    }

    /// Render into a caller buffer, returning the number of samples written
    pub fn render(&self, kind: Modulation, buffer: &mut [f32]) -> usize {
        generator::fill(kind, &self.params, buffer)
    }
}
