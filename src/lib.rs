//! Classifies four planar points as a trapezoid, parallelogram, rectangle or
//! square, and computes the area of the result.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ConfigError, GeometryError, QuadrilisError, Result};
pub use geometry::{CanonicalQuad, PlanarPoint, Quadrilateral, ShapeKind};
pub use math::{Point2, Tolerance, EPSILON};

use operations::{Area, Classify};

/// Classifies four points given in any order.
///
/// Returns the most specific kind together with the points in canonical
/// order, which is what [`area`] expects.
///
/// # Errors
///
/// Returns `GeometryError::DuplicatePoints`, `GeometryError::CollinearPoints`
/// or `GeometryError::NoParallelSides` if the points do not form at least a
/// trapezoid.
pub fn classify<P: PlanarPoint>(p1: P, p2: P, p3: P, p4: P) -> Result<(ShapeKind, [Point2; 4])> {
    let quad = quadrilateral(p1, p2, p3, p4)?;
    Ok((quad.kind(), *quad.vertices()))
}

/// Classifies four points and returns the resulting [`Quadrilateral`].
///
/// # Errors
///
/// See [`classify`].
pub fn quadrilateral<P: PlanarPoint>(p1: P, p2: P, p3: P, p4: P) -> Result<Quadrilateral> {
    let points = [p1, p2, p3, p4].map(|p| p.to_point2());
    Classify::new(points).execute()
}

/// Computes the area of canonical points classified as `kind`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSide` if a side has zero length, which
/// cannot happen for the output of [`classify`].
pub fn area(kind: ShapeKind, canonical_points: &[Point2; 4]) -> Result<f64> {
    Area::new(kind, *canonical_points).execute()
}
