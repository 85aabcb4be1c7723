#![cfg(feature = "analysis")]

use afmwave::analysis::magnitude_spectrum;
use afmwave::gen::{generate, Modulation, WaveformParameters};

#[test]
fn test_unmodulated_carrier_peaks_at_carrier() {
    // 100 whole cycles in one second of 1024 samples
    let params = WaveformParameters::new(100.0, 1.0, 1024)
        .with_fm(40.0, 0.0)
        .with_sample_rate(1024.0);
    let samples = generate(Modulation::Fm, &params);
    let spectrum = magnitude_spectrum(&samples, params.sample_rate());

    assert_eq!(spectrum.len(), 512);
    let (frequency, magnitude) = spectrum.peak().unwrap();
    assert_eq!(frequency, 100.0);
    assert!((magnitude - 512.0).abs() < 1.0, "magnitude {magnitude}");
}

#[test]
fn test_am_sidebands_sit_beside_carrier() {
    // 200 Hz carrier, 20 Hz modulator -> lines at 180, 200 and 220 Hz
    let params = WaveformParameters::new(200.0, 1.0, 1024)
        .with_am(20.0, 1.0)
        .with_sample_rate(1024.0);
    let samples = generate(Modulation::Am, &params);
    let spectrum = magnitude_spectrum(&samples, params.sample_rate());

    assert_eq!(spectrum.peak().unwrap().0, 200.0);
    let carrier = spectrum.magnitudes[200];
    for sideband in [180, 220] {
        let ratio = spectrum.magnitudes[sideband] / carrier;
        assert!((ratio - 0.5).abs() < 0.01, "sideband {sideband} ratio {ratio}");
    }
    assert!(spectrum.magnitudes[150] < 1e-2 * carrier);
}

#[test]
fn test_non_finite_input_does_not_panic() {
    let params = WaveformParameters::fm_demo().with_fm(0.0, 0.75);
    let samples = generate(Modulation::Fm, &params);
    let spectrum = magnitude_spectrum(&samples, params.sample_rate());

    assert_eq!(spectrum.len(), 1024);
    assert!(spectrum.magnitudes.iter().all(|m| m.is_nan()));
    assert_eq!(spectrum.peak(), None);
}
