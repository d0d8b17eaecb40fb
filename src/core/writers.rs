//! Writers for cleaned point listings.
//!
//! This module serializes a [`PointSet`] to the two textual layouts
//! consumed downstream:
//! - Pair listing: one `radius,angle` line per point, for plotting
//! - Array listing: two comma-joined rows (radii then angles), pasted
//!   into microcontroller firmware arrays
//!
//! Both writers take any byte sink and return the number of points
//! written. Callers own file creation and buffering.

use std::io::{self, Write};

use super::points::PointSet;
use super::transforms::dedupe;

/// Divisor applied to radii in the array listing, scaling drawing units
/// down to the physical units the firmware expects.
const ARRAY_RADIUS_DIVISOR: f32 = 10.0;

/// Writes the pair listing: one `radius,angle` line per point.
///
/// Exact duplicates are stripped first, using the same all-copies
/// rule as [`dedupe`]; this runs as its own pass at write time, so the
/// output is duplicate-free even when the caller never deduped.
/// Values are written in their natural precision. Lines are separated
/// by `\n` with no trailing newline after the last line.
///
/// Returns the number of points written.
///
/// # Panics
///
/// Panics if the radius and angle vectors differ in length.
pub fn write_pair_csv<W: Write>(writer: &mut W, points: &PointSet) -> io::Result<usize> {
    assert_eq!(
        points.radii.len(),
        points.angles.len(),
        "point set vectors must be equal in length"
    );

    let unique = dedupe(points);

    for (i, (radius, angle)) in unique.pairs().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write!(writer, "{},{}", radius, angle)?;
    }

    Ok(unique.len())
}

/// Writes the array listing: a row of radii, then a row of angles.
///
/// Radii are emitted as `(radius / 10).abs()` with two decimal places;
/// angles as-is with two decimal places. Each row is comma-joined and
/// ends with a newline. No duplicate stripping happens here.
///
/// Returns the number of points written.
///
/// # Panics
///
/// Panics if the radius and angle vectors differ in length.
pub fn write_array_rows<W: Write>(writer: &mut W, points: &PointSet) -> io::Result<usize> {
    assert_eq!(
        points.radii.len(),
        points.angles.len(),
        "point set vectors must be equal in length"
    );

    let radii_row: Vec<String> = points
        .radii
        .iter()
        .map(|r| format!("{:.2}", (r / ARRAY_RADIUS_DIVISOR).abs()))
        .collect();
    let angles_row: Vec<String> = points.angles.iter().map(|a| format!("{:.2}", a)).collect();

    writeln!(writer, "{}", radii_row.join(","))?;
    writeln!(writer, "{}", angles_row.join(","))?;

    Ok(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(f32, f32)]) -> PointSet {
        let mut points = PointSet::with_capacity(pairs.len());
        for &(r, a) in pairs {
            points.push(r, a);
        }
        points
    }

    fn write_pairs_to_string(points: &PointSet) -> (String, usize) {
        let mut buf = Vec::new();
        let written = write_pair_csv(&mut buf, points).unwrap();
        (String::from_utf8(buf).unwrap(), written)
    }

    fn write_rows_to_string(points: &PointSet) -> (String, usize) {
        let mut buf = Vec::new();
        let written = write_array_rows(&mut buf, points).unwrap();
        (String::from_utf8(buf).unwrap(), written)
    }

    #[test]
    fn test_pair_csv_layout() {
        let (out, written) = write_pairs_to_string(&set(&[(1.5, 30.25), (2.0, 90.0)]));
        assert_eq!(out, "1.5,30.25\n2,90");
        assert_eq!(written, 2);
    }

    #[test]
    fn test_pair_csv_no_trailing_newline() {
        let (out, _) = write_pairs_to_string(&set(&[(1.0, 2.0)]));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_pair_csv_strips_all_duplicate_copies() {
        let (out, written) = write_pairs_to_string(&set(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]));
        assert_eq!(out, "2,2");
        assert_eq!(written, 1);
    }

    #[test]
    fn test_pair_csv_empty_set() {
        let (out, written) = write_pairs_to_string(&PointSet::new());
        assert_eq!(out, "");
        assert_eq!(written, 0);
    }

    #[test]
    fn test_array_rows_layout() {
        let (out, written) = write_rows_to_string(&set(&[(12.5, 45.0), (-7.0, 330.0)]));
        assert_eq!(out, "1.25,0.70\n45.00,330.00\n");
        assert_eq!(written, 2);
    }

    #[test]
    fn test_array_rows_radius_is_scaled_and_absolute() {
        let (out, _) = write_rows_to_string(&set(&[(-50.0, 5.0)]));
        assert_eq!(out, "5.00\n5.00\n");
    }

    #[test]
    fn test_array_rows_keep_duplicates() {
        let (out, written) = write_rows_to_string(&set(&[(10.0, 20.0), (10.0, 20.0)]));
        assert_eq!(out, "1.00,1.00\n20.00,20.00\n");
        assert_eq!(written, 2);
    }

    #[test]
    #[should_panic(expected = "equal in length")]
    fn test_pair_csv_rejects_misaligned_set() {
        let points = PointSet {
            radii: vec![1.0],
            angles: Vec::new(),
        };
        let mut buf = Vec::new();
        let _ = write_pair_csv(&mut buf, &points);
    }

    #[test]
    #[should_panic(expected = "equal in length")]
    fn test_array_rows_rejects_misaligned_set() {
        let points = PointSet {
            radii: vec![1.0, 2.0],
            angles: vec![3.0],
        };
        let mut buf = Vec::new();
        let _ = write_array_rows(&mut buf, &points);
    }
}
