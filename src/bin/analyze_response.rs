use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::f64::consts::PI;

use boxcar::MovingAverageFilter;
use boxcar::config::{NormalizedFrequency, SweepConfig};
use boxcar::constants::DEFAULT_RESPONSE_POINTS;
use boxcar::response::frequency_span;

#[derive(Parser, Debug)]
#[command(name = "analyze_response")]
#[command(about = "Print the impulse and frequency response of a moving-average filter", long_about = None)]
struct Args {
    /// Moving-average window length in samples
    #[arg(short, long)]
    window: usize,

    /// Number of sweep points
    #[arg(short, long, default_value_t = DEFAULT_RESPONSE_POINTS)]
    points: usize,

    /// Upper sweep bound (e.g. "pi", "0.5pi", "1.2", "0.25cyc")
    #[arg(long, default_value = "pi")]
    max_omega: NormalizedFrequency,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Magnitude in dB instead of linear
    #[arg(long)]
    db: bool,

    /// Skip the impulse-response listing
    #[arg(long)]
    no_impulse: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct ResponseReport {
    window_size: usize,
    first_null: f64,
    impulse_response: Vec<f64>,
    frequencies: Vec<f64>,
    magnitude: Vec<f64>,
    phase: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sweep = SweepConfig {
        num_points: args.points,
        max_omega: args.max_omega,
    };
    sweep.validate()?;

    let filter = MovingAverageFilter::new(args.window)?;
    let omegas = frequency_span(sweep.max_omega.as_radians(), sweep.num_points)?;
    let response = filter.frequency_response(&omegas)?;

    let magnitude = if args.db {
        response.magnitude_db()
    } else {
        response.magnitude.clone()
    };

    let report = ResponseReport {
        window_size: filter.window_size(),
        first_null: 2.0 * PI / filter.window_size() as f64,
        impulse_response: filter.impulse_response(),
        frequencies: response.frequencies.clone(),
        magnitude,
        phase: response.phase.clone(),
    };

    match args.format {
        OutputFormat::Text => print_text(&report, &args),
        OutputFormat::Csv => print_csv(&report, &args),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text(report: &ResponseReport, args: &Args) {
    println!("=== Boxcar - Moving Average Response ===");
    println!("Window size: {}", report.window_size);
    println!("First null: {:.6} rad/sample", report.first_null);
    println!();

    if !args.no_impulse {
        println!("Impulse response:");
        for (n, &h) in report.impulse_response.iter().enumerate() {
            println!("  h[{:>3}] = {:.9}", n, h);
        }
        println!();
    }

    let magnitude_label = if args.db { "mag (dB)" } else { "magnitude" };
    println!("{:>12}  {:>12}  {:>12}", "omega", magnitude_label, "phase");
    for i in 0..report.frequencies.len() {
        println!(
            "{:>12.6}  {:>12.6}  {:>12.6}",
            report.frequencies[i], report.magnitude[i], report.phase[i]
        );
    }
}

fn print_csv(report: &ResponseReport, args: &Args) {
    let magnitude_label = if args.db { "magnitude_db" } else { "magnitude" };
    println!("omega,{},phase", magnitude_label);
    for i in 0..report.frequencies.len() {
        println!(
            "{:.9},{:.9},{:.9}",
            report.frequencies[i], report.magnitude[i], report.phase[i]
        );
    }
}
