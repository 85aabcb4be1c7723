// Command-line front end: writes the demonstration dumps and renders
// arbitrary parameter sets to text, WAV or a spectrum summary.

use std::path::PathBuf;

use afmwave::gen::{generate, Modulation, WaveformParameters};
use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "afmwave", version, about = "AM / FM / AFM waveform synthesis")]
struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write am.dat and fm.dat with the demonstration parameters
    Demo {
        /// Directory to write into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Render one waveform to a two-column text file or WAV
    Render {
        #[command(flatten)]
        wave: WaveArgs,

        /// Output path
        #[arg(short, long)]
        out: PathBuf,

        /// Write a 32-bit float WAV instead of text
        #[arg(long)]
        wav: bool,

        /// Scale the WAV output to a peak of 1.0
        #[arg(long, requires = "wav")]
        normalize: bool,
    },
    /// Print the strongest spectral component of a waveform
    Spectrum {
        #[command(flatten)]
        wave: WaveArgs,
    },
    /// Summarize an existing two-column dump
    Inspect {
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct WaveArgs {
    /// Modulation kind
    #[arg(short, long, value_enum, default_value_t = Modulation::Am)]
    kind: Modulation,

    /// Start from a named preset (am_demo, fm_demo, afm_demo, host_default)
    #[arg(short, long)]
    preset: Option<String>,

    #[arg(long)]
    carrier: Option<f32>,

    #[arg(long)]
    amplitude: Option<f32>,

    #[arg(long)]
    am_frequency: Option<f32>,

    #[arg(long)]
    am_depth: Option<f32>,

    #[arg(long)]
    fm_frequency: Option<f32>,

    #[arg(long)]
    fm_depth: Option<f32>,

    /// Sample spacing in seconds
    #[arg(long, conflicts_with = "sample_rate")]
    dt: Option<f32>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<f32>,

    /// Number of samples
    #[arg(short = 'n', long)]
    samples: Option<usize>,
}

impl WaveArgs {
    fn parameters(&self) -> Result<WaveformParameters> {
        let mut params = match &self.preset {
            Some(name) => WaveformParameters::preset(name).ok_or_else(|| {
                anyhow!(
                    "unknown preset {:?} (expected one of {})",
                    name,
                    WaveformParameters::PRESET_NAMES.join(", ")
                )
            })?,
            None => WaveformParameters::default(),
        };

        if let Some(v) = self.carrier {
            params.set_carrier_frequency(v);
        }
        if let Some(v) = self.amplitude {
            params.set_amplitude(v);
        }
        if let Some(v) = self.am_frequency {
            params.set_am_frequency(v);
        }
        if let Some(v) = self.am_depth {
            params.set_am_depth(v);
        }
        if let Some(v) = self.fm_frequency {
            params.set_fm_frequency(v);
        }
        if let Some(v) = self.fm_depth {
            params.set_fm_depth(v);
        }
        if let Some(v) = self.dt {
            params.set_dt(v);
        }
        if let Some(v) = self.sample_rate {
            params.set_sample_rate(v);
        }
        if let Some(v) = self.samples {
            params.set_buffer_size(v);
        }

        params.validate()?;
        if self.kind.modulates_phase() && params.fm_frequency == 0.0 {
            log::warn!("fm frequency is 0 Hz; {} samples will not be finite", self.kind);
        }
        Ok(params)
    }
}

fn demo(dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    for (file_name, kind, params) in [
        ("am.dat", Modulation::Am, WaveformParameters::am_demo()),
        ("fm.dat", Modulation::Fm, WaveformParameters::fm_demo()),
    ] {
        let path = dir.join(file_name);
        let samples = generate(kind, &params);
        afmwave::dump::write_dat_file(&path, &samples, params.dt())?;
        log::info!("wrote {} ({} samples)", path.display(), samples.len());
    }
    Ok(())
}

fn render(wave: WaveArgs, out: PathBuf, wav: bool, normalize: bool) -> Result<()> {
    let params = wave.parameters()?;
    let samples = generate(wave.kind, &params);

    if wav {
        write_wav(&out, &samples, &params, normalize)?;
    } else {
        afmwave::dump::write_dat_file(&out, &samples, params.dt())?;
    }
    log::info!("wrote {} {} samples to {}", samples.len(), wave.kind, out.display());
    Ok(())
}

#[cfg(feature = "bounce")]
fn write_wav(out: &std::path::Path, samples: &[f32], params: &WaveformParameters, normalize: bool) -> Result<()> {
    let sample_rate = afmwave::bounce::header_sample_rate(params.sample_rate())?;
    if normalize {
        afmwave::bounce::write_wav(out, &afmwave::bounce::peak_normalize(samples), sample_rate)
    } else {
        afmwave::bounce::write_wav(out, samples, sample_rate)
    }
}

#[cfg(not(feature = "bounce"))]
fn write_wav(_: &std::path::Path, _: &[f32], _: &WaveformParameters, _: bool) -> Result<()> {
    anyhow::bail!("WAV output needs the 'bounce' feature")
}

#[cfg(feature = "analysis")]
fn spectrum(wave: WaveArgs) -> Result<()> {
    let params = wave.parameters()?;
    let samples = generate(wave.kind, &params);
    let spectrum = afmwave::analysis::magnitude_spectrum(&samples, params.sample_rate());

    match spectrum.peak() {
        Some((frequency, magnitude)) => {
            println!("peak {:.3} Hz  magnitude {:.3}", frequency, magnitude);
        }
        None => println!("no spectral peak (empty or non-finite buffer)"),
    }
    Ok(())
}

#[cfg(not(feature = "analysis"))]
fn spectrum(_: WaveArgs) -> Result<()> {
    anyhow::bail!("spectrum needs the 'analysis' feature")
}

fn inspect(path: PathBuf) -> Result<()> {
    let rows = afmwave::dump::read_dat_file(&path)?;
    let (min, max) = rows
        .iter()
        .map(|&(_, v)| v)
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let non_finite = rows.iter().filter(|(_, v)| !v.is_finite()).count();

    println!("{}: {} samples", path.display(), rows.len());
    if min <= max {
        println!("min {min}  max {max}");
    }
    if non_finite > 0 {
        println!("{non_finite} non-finite samples");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    afmwave::utils::init_logger(cli.verbose);

    match cli.command {
        Command::Demo { dir } => demo(dir),
        Command::Render { wave, out, wav, normalize } => render(wave, out, wav, normalize),
        Command::Spectrum { wave } => spectrum(wave),
        Command::Inspect { path } => inspect(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave_args(args: &[&str]) -> WaveArgs {
        let mut argv = vec!["afmwave", "spectrum"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Spectrum { wave } => wave,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_preset_fields() {
        let params = wave_args(&["-p", "am_demo", "--carrier", "120", "-n", "16"])
            .parameters()
            .unwrap();

        assert_eq!(params.carrier_frequency, 120.0);
        assert_eq!(params.buffer_size, 16);
        // Untouched fields keep the preset's values
        assert_eq!(params.amplitude, 2.0);
        assert_eq!(params.am_frequency, 10.0);
        assert_eq!(params.am_depth, 0.5);
        assert_eq!(params.dt(), 0.0001);
    }

    #[test]
    fn test_spacing_flag_replaces_preset_spacing() {
        let params = wave_args(&["-p", "fm_demo", "--sample-rate", "8000"]).parameters().unwrap();
        assert_eq!(params.sample_rate(), 8000.0);
        assert_eq!(params.fm_frequency, 40.0);
    }

    #[test]
    fn test_no_preset_starts_from_defaults() {
        let params = wave_args(&["--am-frequency", "5"]).parameters().unwrap();
        assert_eq!(params, WaveformParameters::default().with_am(5.0, 0.0));
    }

    #[test]
    fn test_bad_wave_arguments_are_rejected() {
        assert!(wave_args(&["-p", "nope"]).parameters().is_err());
        assert!(wave_args(&["-n", "0"]).parameters().is_err());
        assert!(Cli::try_parse_from(["afmwave", "spectrum", "--dt", "0.1", "--sample-rate", "10"]).is_err());
    }

    #[test]
    fn test_demo_writes_both_dumps() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        demo(out.clone()).unwrap();

        for name in ["am.dat", "fm.dat"] {
            let text = std::fs::read_to_string(out.join(name)).unwrap();
            assert!(text.starts_with("0    0\n"), "{name}");
            let rows = afmwave::dump::read_dat_file(out.join(name)).unwrap();
            assert_eq!(rows.len(), 2048, "{name}");
            assert!(rows.iter().all(|(_, v)| v.is_finite()), "{name}");
        }
    }
}
