use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use boxcar::save_wav;
use boxcar::simulation::{
    NoiseConfig, SineComponent, apply_noise, composite_signal, default_components, signal_power,
};

#[derive(Parser, Debug)]
#[command(name = "generate_signal")]
#[command(about = "Generate a synthetic multi-tone test signal with optional noise")]
struct Args {
    /// TOML noise configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 2.0)]
    duration: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 1000)]
    sample_rate: u32,

    /// Sine component as "amplitude@frequency_hz", repeatable
    /// (default: 2@10, 1.5@25, 0.8@50)
    #[arg(short = 'C', long = "component", value_parser = parse_component)]
    components: Vec<SineComponent>,

    /// AWGN SNR in dB (CLI override)
    #[arg(long)]
    snr: Option<f64>,

    /// Base seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write a 32-bit float WAV file instead of text samples on stdout
    #[arg(short, long)]
    wav: Option<PathBuf>,
}

fn parse_component(s: &str) -> std::result::Result<SineComponent, String> {
    let (amplitude, frequency) = s
        .split_once('@')
        .ok_or_else(|| format!("expected amplitude@frequency_hz, got: {}", s))?;
    let amplitude: f64 = amplitude
        .trim()
        .parse()
        .map_err(|_| format!("invalid amplitude: {}", amplitude))?;
    let frequency_hz: f64 = frequency
        .trim()
        .parse()
        .map_err(|_| format!("invalid frequency: {}", frequency))?;
    if !amplitude.is_finite() || !frequency_hz.is_finite() {
        return Err("component values must be finite".to_string());
    }
    Ok(SineComponent {
        amplitude,
        frequency_hz,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut noise = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => NoiseConfig::default(),
    };
    if let Some(snr) = args.snr {
        noise = noise.with_awgn(snr);
    }
    if let Some(seed) = args.seed {
        noise = noise.with_seed(seed);
    }

    let components = if args.components.is_empty() {
        default_components()
    } else {
        args.components.clone()
    };

    let mut signal = composite_signal(&components, args.duration, args.sample_rate);
    log::info!(
        "generated {} samples, power {:.4}",
        signal.len(),
        signal_power(&signal)
    );

    apply_noise(&mut signal, &noise);

    match &args.wav {
        Some(path) => {
            save_wav(path, &signal, args.sample_rate)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            for sample in &signal {
                println!("{:.9}", sample);
            }
        }
    }

    Ok(())
}
