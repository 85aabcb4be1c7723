//! Two-column text dump of a sample buffer
//!
//! One line per sample, `time    amplitude`, no header. This is the `am.dat` /
//! `fm.dat` format the demonstration program writes for plotting.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Separator between the time and amplitude columns
pub const COLUMN_SEPARATOR: &str = "    ";

/// Significant digits printed per column
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Format like printf `%g` at [`SIGNIFICANT_DIGITS`] precision: fixed notation
/// for exponents in `-4..6`, scientific otherwise, trailing zeros dropped.
pub fn format_general(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let value = value as f64;
    let precision = SIGNIFICANT_DIGITS - 1;
    // Exponent after rounding to the requested digits, e.g. "9.99999e-1" or "1.00000e0"
    let scientific = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Write `samples` as `i * dt` / value pairs
pub fn write_columns<W: Write>(mut writer: W, samples: &[f32], dt: f32) -> Result<()> {
    for (i, &sample) in samples.iter().enumerate() {
        writeln!(
            writer,
            "{}{}{}",
            format_general(i as f32 * dt),
            COLUMN_SEPARATOR,
            format_general(sample)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the dump into it
pub fn write_dat_file<P: AsRef<Path>>(path: P, samples: &[f32], dt: f32) -> Result<()> {
    let path = path.as_ref();
    let non_finite = samples.iter().filter(|s| !s.is_finite()).count();
    if non_finite > 0 {
        log::warn!("{}: writing {} non-finite samples", path.display(), non_finite);
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_columns(BufWriter::new(file), samples, dt)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::debug!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

/// Parse a dump back into `(time, amplitude)` pairs. Blank lines are skipped.
pub fn read_columns<R: Read>(reader: R) -> Result<Vec<(f32, f32)>> {
    let mut rows = Vec::new();
    for (line_number, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (time, value) = match (fields.next(), fields.next()) {
            (None, _) => continue,
            (Some(time), Some(value)) => (time, value),
            (Some(_), None) => anyhow::bail!("line {}: expected two columns", line_number + 1),
        };
        let time: f32 = time
            .parse()
            .with_context(|| format!("line {}: bad time {:?}", line_number + 1, time))?;
        let value: f32 = value
            .parse()
            .with_context(|| format!("line {}: bad amplitude {:?}", line_number + 1, value))?;
        rows.push((time, value));
    }
    Ok(rows)
}

/// Read a dump file from disk
pub fn read_dat_file<P: AsRef<Path>>(path: P) -> Result<Vec<(f32, f32)>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_columns(file).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let mut out = Vec::new();
        write_columns(&mut out, &[0.0, 1.5, -0.25], 0.5).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0    0\n0.5    1.5\n1    -0.25\n");
    }

    #[test]
    fn test_time_column_uses_six_significant_digits() {
        let mut out = Vec::new();
        write_columns(&mut out, &[0.0; 6], 0.0001).unwrap();
        let times: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| line.split(COLUMN_SEPARATOR).next().unwrap().to_string())
            .collect();
        assert_eq!(times, ["0", "0.0001", "0.0002", "0.0003", "0.0004", "0.0005"]);
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(2.828_427), "2.82843");
        assert_eq!(format_general(-0.25), "-0.25");
        assert_eq!(format_general(0.204_7), "0.2047");
        assert_eq!(format_general(123_456.0), "123456");
        assert_eq!(format_general(1_234_567.0), "1.23457e+06");
        assert_eq!(format_general(0.000_012_5), "1.25e-05");
        assert_eq!(format_general(0.999_999_9), "1");
        assert_eq!(format_general(f32::INFINITY), "inf");
        assert_eq!(format_general(f32::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_read_rejects_single_column() {
        let err = read_columns("0    1\n2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let rows = read_columns("0 1\n\n0.1 -1\n".as_bytes()).unwrap();
        assert_eq!(rows, vec![(0.0, 1.0), (0.1, -1.0)]);
    }

    #[test]
    fn test_nan_is_written_and_read_back() {
        let mut out = Vec::new();
        write_columns(&mut out, &[f32::NAN], 1.0).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "0    nan\n");
        let rows = read_columns(out.as_slice()).unwrap();
        assert!(rows[0].1.is_nan());
    }
}
