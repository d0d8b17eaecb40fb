//! Export to firmware array listing conversion.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::ArrayConfig;
use crate::core::parsers::parse_points;
use crate::core::transforms::{cut_to_size, dedupe, normalize};
use crate::core::writers::write_array_rows;

/// Convert a single raw export into a two-row array listing.
///
/// Reads the export, parses it with the configured token format,
/// removes exact duplicates, rounds radii and wraps angles, drops
/// points that do not fit `max_radius`, and writes the radii row and
/// angles row to `output`. The surviving point count is reported to
/// the log and returned.
///
/// Duplicates are removed before normalization: rounding can collapse
/// near-identical points into exact copies, and deduping afterwards
/// would throw away every copy instead of leaving distinct points.
pub fn convert_array_file(input: &Path, output: &Path, config: &ArrayConfig) -> Result<usize> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let points = parse_points(&text, config.format);
    if points.is_empty() {
        warn!("No points parsed from {}", input.display());
    } else {
        info!("Parsed {} points from {}", points.len(), input.display());
    }

    let mut cleaned = dedupe(&points);
    info!("Dedupe kept {} of {} points", cleaned.len(), points.len());

    normalize(&mut cleaned);

    let kept = cut_to_size(&cleaned, config.max_radius);
    info!(
        "Cut kept {} of {} points (max radius {})",
        kept.len(),
        cleaned.len(),
        config.max_radius
    );

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let out_file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(out_file);

    let written = write_array_rows(&mut writer, &kept)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    info!("{} points survive; wrote {}", written, output.display());

    Ok(written)
}
