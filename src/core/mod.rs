//! Core data types and point operations.

pub mod geometry;
pub mod parsers;
pub mod points;
pub mod transforms;
pub mod writers;

pub use parsers::{parse_points, TokenFormat};
pub use points::PointSet;
pub use writers::{write_array_rows, write_pair_csv};
