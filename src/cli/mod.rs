//! Command-line interface for the conversion pipelines.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::{ArrayConfig, PlotConfig};
use crate::PipelineConfig;

#[derive(Parser)]
#[command(name = "csnap-pipeline")]
#[command(about = "CSnap polar export conversion pipeline", version)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Thin out crowded points and write a radius,angle pair listing
    Plot {
        /// Raw export file
        input: PathBuf,
        /// Output pair listing file
        output: PathBuf,
        /// Minimum distance allowed between any two points
        #[arg(short, long)]
        min_distance: Option<f32>,
    },

    /// Dedupe, normalize and cut points into a two-row array listing
    Array {
        /// Raw export file
        input: PathBuf,
        /// Output array listing file
        output: PathBuf,
        /// Largest radius that fits the target surface
        #[arg(short, long)]
        max_radius: Option<f32>,
    },
}

/// Create a spinner for indeterminate operations
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a summary box
fn print_summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ {:<62} ║", title);
    println!("╠══════════════════════════════════════════════════════════════╣");
    for (key, value) in items {
        let display_value = if value.len() > 39 {
            format!("{}...", &value[..36])
        } else {
            value.clone()
        };
        println!("║ {:<20}: {:<39} ║", key, display_value);
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

pub fn run() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity (must come first)
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .init();

    // Load config
    let config = match &cli.config {
        Some(path) => match PipelineConfig::from_yaml(path) {
            Ok(cfg) => {
                info!("Loaded config from: {}", path.display());
                cfg
            }
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                PipelineConfig::default()
            }
        },
        None => PipelineConfig::default(),
    };

    // Dispatch to subcommands
    match cli.command {
        Commands::Plot {
            input,
            output,
            min_distance,
        } => {
            cmd_plot(&input, &output, min_distance, &config);
        }
        Commands::Array {
            input,
            output,
            max_radius,
        } => {
            cmd_array(&input, &output, max_radius, &config);
        }
    }
}

fn cmd_plot(input: &PathBuf, output: &PathBuf, min_distance: Option<f32>, config: &PipelineConfig) {
    use crate::processors::plot;

    let start = Instant::now();

    // Build plot config with CLI overrides
    let plot_config = PlotConfig {
        min_distance: min_distance.unwrap_or(config.plot.min_distance),
        format: config.plot.format,
    };

    println!("Converting export for plotting...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Min distance: {}", plot_config.min_distance);

    let spinner = create_spinner("Simplifying points...");

    match plot::convert_plot_file(input, output, &plot_config) {
        Ok(written) => {
            spinner.finish_and_clear();

            print_summary(
                "Plot Conversion Complete",
                &[
                    ("Input file", input.display().to_string()),
                    ("Output file", output.display().to_string()),
                    ("Min distance", plot_config.min_distance.to_string()),
                    ("Points written", written.to_string()),
                    ("Duration", format!("{:.2?}", start.elapsed())),
                ],
            );
        }
        Err(e) => {
            spinner.finish_and_clear();
            error!("Plot conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_array(input: &PathBuf, output: &PathBuf, max_radius: Option<f32>, config: &PipelineConfig) {
    use crate::processors::array;

    let start = Instant::now();

    // Build array config with CLI overrides
    let array_config = ArrayConfig {
        max_radius: max_radius.unwrap_or(config.array.max_radius),
        format: config.array.format,
    };

    println!("Converting export to array listing...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Max radius: {}", array_config.max_radius);

    let spinner = create_spinner("Cleaning points...");

    match array::convert_array_file(input, output, &array_config) {
        Ok(written) => {
            spinner.finish_and_clear();

            print_summary(
                "Array Conversion Complete",
                &[
                    ("Input file", input.display().to_string()),
                    ("Output file", output.display().to_string()),
                    ("Max radius", array_config.max_radius.to_string()),
                    ("Points surviving", written.to_string()),
                    ("Duration", format!("{:.2?}", start.elapsed())),
                ],
            );
        }
        Err(e) => {
            spinner.finish_and_clear();
            error!("Array conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
