//! Conversion pipeline for CSnap polar coordinate exports.
//!
//! This crate turns the raw polar coordinate dumps produced by CSnap
//! drawing projects into cleaned point listings ready for downstream
//! use. It provides tools for:
//! - Parsing raw exports in both delimiter conventions (underscore
//!   pairs and comma streams)
//! - Thinning out crowded points with a minimum-distance filter
//! - Removing exact duplicates, rounding radii, and wrapping angles
//! - Cutting points down to a maximum radius
//! - Writing plot-ready `radius,angle` listings and two-row array
//!   listings for microcontroller firmware
//!
//! # Example
//!
//! ```no_run
//! use csnap_pipeline::config::PlotConfig;
//! use csnap_pipeline::processors::plot::convert_plot_file;
//! use std::path::Path;
//!
//! let config = PlotConfig::default();
//! let written = convert_plot_file(
//!     Path::new("spiral_export.txt"),
//!     Path::new("spiral_points.csv"),
//!     &config,
//! ).unwrap();
//! println!("{} points written", written);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod processors;

pub use config::{ArrayConfig, PipelineConfig, PlotConfig};
pub use crate::core::parsers::TokenFormat;
pub use crate::core::points::PointSet;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
