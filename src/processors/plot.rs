//! Export to plot-ready pair listing conversion.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::PlotConfig;
use crate::core::parsers::parse_points;
use crate::core::transforms::simplify;
use crate::core::writers::write_pair_csv;

/// Convert a single raw export into a plot-ready pair listing.
///
/// Reads the export, parses it with the configured token format, drops
/// every point that lies within `min_distance` of another point, and
/// writes one `radius,angle` line per survivor.
///
/// # Arguments
///
/// * `input` - Path to the raw export file
/// * `output` - Path to the pair listing to create
/// * `config` - Plot pipeline settings (threshold and token format)
///
/// # Returns
///
/// The number of points written, after the writer's duplicate pass.
pub fn convert_plot_file(input: &Path, output: &Path, config: &PlotConfig) -> Result<usize> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let points = parse_points(&text, config.format);
    if points.is_empty() {
        warn!("No points parsed from {}", input.display());
    } else {
        info!("Parsed {} points from {}", points.len(), input.display());
    }

    let kept = simplify(&points, config.min_distance);
    info!(
        "Simplify kept {} of {} points (min distance {})",
        kept.len(),
        points.len(),
        config.min_distance
    );

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let out_file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(out_file);

    let written = write_pair_csv(&mut writer, &kept)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    info!("Wrote {} points to {}", written, output.display());

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parsers::TokenFormat;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_export(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_convert_plot_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_export(temp_dir.path(), "export.txt", "10_0,10.5_0,200_90");
        let output = temp_dir.path().join("points.csv");

        let config = PlotConfig {
            min_distance: 5.0,
            format: TokenFormat::UnderscorePairs,
        };
        let written = convert_plot_file(&input, &output, &config).unwrap();

        // The two points near radius 10 are 0.5 apart and both drop.
        assert_eq!(written, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "200,90");
    }

    #[test]
    fn test_zero_threshold_passes_points_through() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_export(temp_dir.path(), "export.txt", "1_2,1_2,3_4");
        let output = temp_dir.path().join("points.csv");

        let config = PlotConfig {
            min_distance: 0.0,
            format: TokenFormat::UnderscorePairs,
        };
        let written = convert_plot_file(&input, &output, &config).unwrap();

        // Simplify keeps everything at threshold zero, but the writer
        // still strips the duplicated point.
        assert_eq!(written, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "3,4");
    }

    #[test]
    fn test_empty_input_writes_empty_listing() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_export(temp_dir.path(), "export.txt", "");
        let output = temp_dir.path().join("points.csv");

        let written = convert_plot_file(&input, &output, &PlotConfig::default()).unwrap();

        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("does_not_exist.txt");
        let output = temp_dir.path().join("points.csv");

        let result = convert_plot_file(&input, &output, &PlotConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_creates_output_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_export(temp_dir.path(), "export.txt", "5_45");
        let output = temp_dir.path().join("nested").join("out").join("points.csv");

        convert_plot_file(&input, &output, &PlotConfig::default()).unwrap();
        assert!(output.exists());
    }
}
