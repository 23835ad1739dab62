use anyhow::{Context, Result};
use clap::Parser;
use rolling_stats::Stats;
use std::io::Read;
use std::path::PathBuf;

use boxcar::config::FilterConfig;
use boxcar::filter::{MovingAverageFilter, Warmup};
use boxcar::output::{OutputFormat, SampleRecord, create_formatter};
use boxcar::wav::read_wav_mono;

#[derive(Parser, Debug)]
#[command(name = "boxcar")]
#[command(about = "Smooth a sampled signal with a moving-average filter", long_about = None)]
struct Args {
    /// Input file with one sample per line ('#' starts a comment).
    /// Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Moving-average window length in samples
    #[arg(short, long, default_value_t = boxcar::constants::DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Warm-up behavior before the window is full
    #[arg(long, value_enum, default_value = "partial-window")]
    warmup: Warmup,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Treat the input file as WAV audio (channels averaged to mono)
    #[arg(long)]
    wav: bool,

    /// Print input/output statistics to stderr when done
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = FilterConfig {
        window_size: args.window,
        warmup: args.warmup,
    };
    config.validate()?;

    let samples = read_samples(&args)?;
    log::info!("read {} samples", samples.len());

    let mut filter = MovingAverageFilter::with_warmup(config.window_size, config.warmup)?;
    let filtered = filter.filter_signal(&samples)?;

    let formatter = create_formatter(args.format);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    for (index, (&input, &output)) in samples.iter().zip(&filtered).enumerate() {
        println!(
            "{}",
            formatter.format(&SampleRecord {
                index,
                input,
                output,
            })
        );
    }

    if args.stats {
        print_stats(&samples, &filtered);
    }

    Ok(())
}

fn read_samples(args: &Args) -> Result<Vec<f64>> {
    if args.wav {
        let path = args
            .input
            .as_ref()
            .context("--wav requires an input file")?;
        let (samples, sample_rate) =
            read_wav_mono(path).with_context(|| format!("reading {}", path.display()))?;
        log::debug!("WAV sample rate: {} Hz", sample_rate);
        return Ok(samples);
    }

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let mut samples = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let sample: f64 = line
            .parse()
            .with_context(|| format!("line {}: not a number: {}", line_number + 1, line))?;
        samples.push(sample);
    }
    Ok(samples)
}

fn print_stats(input: &[f64], output: &[f64]) {
    let mut input_stats: Stats<f64> = Stats::new();
    let mut output_stats: Stats<f64> = Stats::new();

    for &sample in input {
        input_stats.update(sample);
    }
    for &sample in output {
        output_stats.update(sample);
    }

    eprintln!(
        "input:  mean {:+.6}  std {:.6}  min {:+.6}  max {:+.6}",
        input_stats.mean, input_stats.std_dev, input_stats.min, input_stats.max
    );
    eprintln!(
        "output: mean {:+.6}  std {:.6}  min {:+.6}  max {:+.6}",
        output_stats.mean, output_stats.std_dev, output_stats.min, output_stats.max
    );
}
