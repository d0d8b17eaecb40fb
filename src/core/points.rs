//! The polar point set container shared by every pipeline stage.

/// Container for polar point data.
///
/// Points are stored as two index-aligned vectors: `radii[i]` and
/// `angles[i]` together form one point, with the angle in degrees.
/// The vectors are always equal in length, and insertion order is
/// meaningful: filtering transforms preserve the relative order of
/// surviving points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    /// Radii of all points.
    pub radii: Vec<f32>,
    /// Angles of all points, in degrees.
    pub angles: Vec<f32>,
}

impl PointSet {
    /// Creates a new empty point set.
    pub fn new() -> Self {
        Self {
            radii: Vec::new(),
            angles: Vec::new(),
        }
    }

    /// Creates a new point set from radius and angle vectors.
    pub fn from_parts(radii: Vec<f32>, angles: Vec<f32>) -> Self {
        debug_assert_eq!(radii.len(), angles.len());
        Self { radii, angles }
    }

    /// Creates a new point set with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            radii: Vec::with_capacity(capacity),
            angles: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Returns true if the point set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Adds a point to the set.
    #[inline]
    pub fn push(&mut self, radius: f32, angle: f32) {
        self.radii.push(radius);
        self.angles.push(angle);
    }

    /// Iterates over `(radius, angle)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.radii.iter().copied().zip(self.angles.iter().copied())
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}
