// Integration tests for the two-column text dump

use afmwave::dump::{read_dat_file, write_dat_file};
use afmwave::gen::{generate, Modulation, WaveformParameters};

#[test]
fn test_demo_files_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();

    for (name, kind, params) in [
        ("am.dat", Modulation::Am, WaveformParameters::am_demo()),
        ("fm.dat", Modulation::Fm, WaveformParameters::fm_demo()),
    ] {
        let path = dir.path().join(name);
        let samples = generate(kind, &params);
        write_dat_file(&path, &samples, params.dt()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2048);
        assert!(text.starts_with("0    0\n"), "{name} starts with {:?}", &text[..16]);

        let rows = read_dat_file(&path).unwrap();
        assert_eq!(rows.len(), samples.len());
        for (i, (time, value)) in rows.iter().enumerate() {
            assert!((time - i as f32 * params.dt()).abs() < 1e-6, "{name} row {i} time");
            assert!((value - samples[i]).abs() < 1e-5, "{name} row {i} value");
        }
    }
}

#[test]
fn test_write_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wave.dat");

    let params = WaveformParameters::am_demo();
    write_dat_file(&path, &generate(Modulation::Am, &params), params.dt()).unwrap();
    write_dat_file(&path, &generate(Modulation::Am, &params.with_buffer_size(3)), params.dt()).unwrap();

    assert_eq!(read_dat_file(&path).unwrap().len(), 3);
}

#[test]
fn test_missing_directory_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("wave.dat");

    let err = write_dat_file(&path, &[0.0], 1.0).unwrap_err();
    assert!(err.to_string().contains("wave.dat"), "{err}");
    assert!(read_dat_file(&path).is_err());
}
