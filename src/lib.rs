//! AM, FM and combined AM+FM waveform synthesis for native, C and WASM hosts

pub mod dump;
pub mod ffi;
pub mod gen;
pub mod utils;

// Offline WAV export
#[cfg(feature = "bounce")]
pub mod bounce;

// Spectrum of generated buffers
#[cfg(feature = "analysis")]
pub mod analysis;

pub use gen::{generate, AfmWave, Modulation, SampleSpacing, WaveformParameters};

// WASM bindings (web)
#[cfg(feature = "web")]
pub mod web {
    use super::gen::{AfmWave, Modulation, WaveformParameters};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    pub struct WasmAfmWave {
        wave: AfmWave,
    }

    #[wasm_bindgen]
    impl WasmAfmWave {
        #[wasm_bindgen(constructor)]
        pub fn new(carrier_frequency: f32, amplitude: f32, buffer_size: usize) -> WasmAfmWave {
            WasmAfmWave {
                wave: AfmWave::new(carrier_frequency, amplitude, buffer_size),
            }
        }

        /// Start from a named preset; unknown names fall back to the defaults
        #[wasm_bindgen]
        pub fn from_preset(preset_name: &str) -> WasmAfmWave {
            let params = WaveformParameters::preset(preset_name).unwrap_or_default();
            WasmAfmWave {
                wave: AfmWave::with_parameters(params),
            }
        }

        #[wasm_bindgen]
        pub fn set_carrier_frequency(&mut self, frequency: f32) {
            self.wave.set_carrier_frequency(frequency);
        }

        #[wasm_bindgen]
        pub fn set_amplitude(&mut self, amplitude: f32) {
            self.wave.set_amplitude(amplitude);
        }

        #[wasm_bindgen]
        pub fn set_am_frequency(&mut self, frequency: f32) {
            self.wave.set_am_frequency(frequency);
        }

        #[wasm_bindgen]
        pub fn set_fm_frequency(&mut self, frequency: f32) {
            self.wave.set_fm_frequency(frequency);
        }

        #[wasm_bindgen]
        pub fn set_am_depth(&mut self, depth: f32) {
            self.wave.set_am_depth(depth);
        }

        #[wasm_bindgen]
        pub fn set_fm_depth(&mut self, depth: f32) {
            self.wave.set_fm_depth(depth);
        }

        #[wasm_bindgen]
        pub fn set_fs(&mut self, fs: f32) {
            self.wave.set_fs(fs);
        }

        #[wasm_bindgen]
        pub fn set_dt(&mut self, dt: f32) {
            self.wave.set_dt(dt);
        }

        #[wasm_bindgen]
        pub fn set_buffer_size(&mut self, buffer_size: usize) {
            self.wave.set_buffer_size(buffer_size);
        }

        #[wasm_bindgen]
        pub fn get_carrier_frequency(&self) -> f32 {
            self.wave.carrier_frequency()
        }

        #[wasm_bindgen]
        pub fn get_amplitude(&self) -> f32 {
            self.wave.amplitude()
        }

        #[wasm_bindgen]
        pub fn get_am_frequency(&self) -> f32 {
            self.wave.am_frequency()
        }

        #[wasm_bindgen]
        pub fn get_fm_frequency(&self) -> f32 {
            self.wave.fm_frequency()
        }

        #[wasm_bindgen]
        pub fn get_am_depth(&self) -> f32 {
            self.wave.am_depth()
        }

        #[wasm_bindgen]
        pub fn get_fm_depth(&self) -> f32 {
            self.wave.fm_depth()
        }

        #[wasm_bindgen]
        pub fn get_fs(&self) -> f32 {
            self.wave.fs()
        }

        #[wasm_bindgen]
        pub fn get_dt(&self) -> f32 {
            self.wave.dt()
        }

        #[wasm_bindgen]
        pub fn get_buffer_size(&self) -> usize {
            self.wave.buffer_size()
        }

        #[wasm_bindgen]
        pub fn get_am_wave(&self) -> Vec<f32> {
            self.wave.am_wave()
        }

        #[wasm_bindgen]
        pub fn get_fm_wave(&self) -> Vec<f32> {
            self.wave.fm_wave()
        }

        #[wasm_bindgen]
        pub fn get_afm_wave(&self) -> Vec<f32> {
            self.wave.afm_wave()
        }

        /// 0 = AM, 1 = FM, 2 = AFM; anything else yields an empty buffer
        #[wasm_bindgen]
        pub fn get_wave(&self, kind: u32) -> Vec<f32> {
            match Modulation::from_index(kind) {
                Some(kind) => self.wave.wave(kind),
                None => Vec::new(),
            }
        }
    }
}
