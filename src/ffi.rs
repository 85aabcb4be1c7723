//! C FFI bindings for the AFM wave generator
//!
//! This module exposes [`AfmWave`] to C and other hosts through an opaque
//! pointer plus per-field getters and setters. Generation writes into a
//! caller-provided float buffer.

use crate::gen::{AfmWave, Modulation};
use std::slice;

// =============================================================================
// Parameter indices (must match the host-side enum)
// =============================================================================

/// Parameter: carrier frequency (Hz)
pub const AFM_PARAM_CARRIER_FREQUENCY: u32 = 0;
/// Parameter: output amplitude
pub const AFM_PARAM_AMPLITUDE: u32 = 1;
/// Parameter: AM modulator frequency (Hz)
pub const AFM_PARAM_AM_FREQUENCY: u32 = 2;
/// Parameter: AM depth
pub const AFM_PARAM_AM_DEPTH: u32 = 3;
/// Parameter: FM modulator frequency (Hz)
pub const AFM_PARAM_FM_FREQUENCY: u32 = 4;
/// Parameter: FM depth
pub const AFM_PARAM_FM_DEPTH: u32 = 5;
/// Parameter: sample rate (Hz); setting it replaces any stored dt
pub const AFM_PARAM_FS: u32 = 6;
/// Parameter: sample spacing (seconds); setting it replaces any stored rate
pub const AFM_PARAM_DT: u32 = 7;

/// Render kind: amplitude modulation
pub const AFM_KIND_AM: u32 = 0;
/// Render kind: frequency modulation
pub const AFM_KIND_FM: u32 = 1;
/// Render kind: combined AM and FM
pub const AFM_KIND_AFM: u32 = 2;

// =============================================================================
// Lifecycle
// =============================================================================

/// Create a new wave generator
///
/// # Arguments
/// * `carrier_frequency` - Carrier frequency in Hz
/// * `amplitude` - Output amplitude
/// * `buffer_size` - Number of samples each render produces
///
/// # Returns
/// Pointer to a new AfmWave. Must be freed with `afm_wave_free`.
#[no_mangle]
pub extern "C" fn afm_wave_new(carrier_frequency: f32, amplitude: f32, buffer_size: u32) -> *mut AfmWave {
    let wave = Box::new(AfmWave::new(carrier_frequency, amplitude, buffer_size as usize));
    Box::into_raw(wave)
}

/// Free a wave generator
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null.
/// After calling this function, the pointer is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn afm_wave_free(wave: *mut AfmWave) {
    if !wave.is_null() {
        drop(Box::from_raw(wave));
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render samples of the given kind into `buffer`
///
/// Writes `min(frames, buffer_size)` samples starting at index 0.
///
/// # Arguments
/// * `wave` - Pointer to an AfmWave
/// * `kind` - One of the AFM_KIND_* constants
/// * `buffer` - Pointer to a buffer of floats to fill
/// * `frames` - Capacity of `buffer` in samples
///
/// # Returns
/// Number of samples written; 0 for null pointers or an unknown kind.
///
/// # Safety
/// - `wave` must be a valid pointer returned by `afm_wave_new`
/// - `buffer` must point to at least `frames` floats of allocated memory
#[no_mangle]
pub unsafe extern "C" fn afm_wave_render(wave: *const AfmWave, kind: u32, buffer: *mut f32, frames: u32) -> u32 {
    if wave.is_null() || buffer.is_null() {
        return 0;
    }
    let Some(kind) = Modulation::from_index(kind) else {
        log::warn!("afm_wave_render: unknown kind {}", kind);
        return 0;
    };

    let wave = &*wave;
    let buffer = slice::from_raw_parts_mut(buffer, frames as usize);
    wave.render(kind, buffer) as u32
}

// =============================================================================
// Parameters by index
// =============================================================================

/// Set a parameter by index
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_param(wave: *mut AfmWave, param: u32, value: f32) {
    let Some(wave) = wave.as_mut() else {
        return;
    };

    match param {
        AFM_PARAM_CARRIER_FREQUENCY => wave.set_carrier_frequency(value),
        AFM_PARAM_AMPLITUDE => wave.set_amplitude(value),
        AFM_PARAM_AM_FREQUENCY => wave.set_am_frequency(value),
        AFM_PARAM_AM_DEPTH => wave.set_am_depth(value),
        AFM_PARAM_FM_FREQUENCY => wave.set_fm_frequency(value),
        AFM_PARAM_FM_DEPTH => wave.set_fm_depth(value),
        AFM_PARAM_FS => wave.set_fs(value),
        AFM_PARAM_DT => wave.set_dt(value),
        _ => {} // Unknown parameter, ignore
    }
}

/// Get a parameter by index, or 0.0 for null pointers and unknown indices
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_param(wave: *const AfmWave, param: u32) -> f32 {
    let Some(wave) = wave.as_ref() else {
        return 0.0;
    };

    match param {
        AFM_PARAM_CARRIER_FREQUENCY => wave.carrier_frequency(),
        AFM_PARAM_AMPLITUDE => wave.amplitude(),
        AFM_PARAM_AM_FREQUENCY => wave.am_frequency(),
        AFM_PARAM_AM_DEPTH => wave.am_depth(),
        AFM_PARAM_FM_FREQUENCY => wave.fm_frequency(),
        AFM_PARAM_FM_DEPTH => wave.fm_depth(),
        AFM_PARAM_FS => wave.fs(),
        AFM_PARAM_DT => wave.dt(),
        _ => 0.0,
    }
}

/// Get the number of float parameters addressable by index
#[no_mangle]
pub extern "C" fn afm_wave_param_count() -> u32 {
    8
}

// =============================================================================
// Named setters and getters
// =============================================================================

/// Set the carrier frequency in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_carrier_frequency(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_CARRIER_FREQUENCY, value);
}

/// Get the carrier frequency in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_carrier_frequency(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_CARRIER_FREQUENCY)
}

/// Set the output amplitude
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_amplitude(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_AMPLITUDE, value);
}

/// Get the output amplitude
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_amplitude(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_AMPLITUDE)
}

/// Set the AM modulator frequency in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_am_frequency(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_AM_FREQUENCY, value);
}

/// Get the AM modulator frequency in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_am_frequency(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_AM_FREQUENCY)
}

/// Set the AM depth
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_am_depth(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_AM_DEPTH, value);
}

/// Get the AM depth
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_am_depth(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_AM_DEPTH)
}

/// Set the FM modulator frequency in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_fm_frequency(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_FM_FREQUENCY, value);
}

/// Get the FM modulator frequency in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_fm_frequency(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_FM_FREQUENCY)
}

/// Set the FM depth
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_fm_depth(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_FM_DEPTH, value);
}

/// Get the FM depth
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_fm_depth(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_FM_DEPTH)
}

/// Set the sample rate in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_fs(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_FS, value);
}

/// Get the sample rate in Hz
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_fs(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_FS)
}

/// Set the sample spacing in seconds
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_dt(wave: *mut AfmWave, value: f32) {
    afm_wave_set_param(wave, AFM_PARAM_DT, value);
}

/// Get the sample spacing in seconds
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_dt(wave: *const AfmWave) -> f32 {
    afm_wave_get_param(wave, AFM_PARAM_DT)
}

/// Set the number of samples each render produces
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_set_buffer_size(wave: *mut AfmWave, buffer_size: u32) {
    if let Some(wave) = wave.as_mut() {
        wave.set_buffer_size(buffer_size as usize);
    }
}

/// Get the number of samples each render produces, or 0 for null
///
/// # Safety
/// `wave` must be a valid pointer returned by `afm_wave_new`, or null
#[no_mangle]
pub unsafe extern "C" fn afm_wave_get_buffer_size(wave: *const AfmWave) -> u32 {
    match wave.as_ref() {
        Some(wave) => wave.buffer_size() as u32,
        None => 0,
    }
}
