//! File-level conversion pipelines.

pub mod array;
pub mod plot;

// Re-export key functions for convenience
pub use array::convert_array_file;
pub use plot::convert_plot_file;
