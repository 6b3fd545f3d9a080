use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::CanonicalQuad;
use crate::math::polygon_2d::{centroid, rotate_start};
use crate::math::predicates::{are_collinear4, are_duplicates, is_parallel_order};
use crate::math::{Point2, Tolerance};

/// Puts four unordered points into canonical cyclic order.
///
/// The points are first screened: duplicates and collinear triples are
/// rejected, since they cannot bound a quadrilateral. The survivors are
/// sorted by angle around their centroid, which traces the boundary of any
/// convex quadrilateral. If sides `(0,1)` and `(2,3)` are not parallel the
/// cycle is rotated by one vertex and tested again, so that any parallel pair
/// of opposite sides lands in the `(0,1)`/`(2,3)` slots.
pub struct Canonicalize {
    points: [Point2; 4],
    tolerance: Tolerance,
}

impl Canonicalize {
    /// Creates a new `Canonicalize` operation with the default tolerance.
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DuplicatePoints` if two points coincide, or
    /// `GeometryError::CollinearPoints` if any three points are collinear.
    pub fn execute(&self) -> Result<CanonicalQuad> {
        let tol = self.tolerance;
        let [a, b, c, d] = &self.points;

        if are_duplicates(&self.points, tol) {
            return Err(GeometryError::DuplicatePoints.into());
        }
        if are_collinear4(a, b, c, d, tol) {
            return Err(GeometryError::CollinearPoints.into());
        }

        let sorted = sort_cyclic(&self.points);
        if is_parallel_order(&sorted, tol) {
            return Ok(CanonicalQuad::new(sorted, true));
        }

        let rotated = rotate_start(&sorted);
        if is_parallel_order(&rotated, tol) {
            trace!("parallel sides found after rotating start vertex");
            return Ok(CanonicalQuad::new(rotated, true));
        }

        trace!("no parallel pair of opposite sides");
        Ok(CanonicalQuad::new(sorted, false))
    }
}

/// Sorts points by their angle around the centroid, ascending from `-π`.
///
/// The sort is stable, so exact angle ties keep input order.
fn sort_cyclic(points: &[Point2; 4]) -> [Point2; 4] {
    let center = centroid(points);
    let mut keyed = points.map(|p| ((p.y - center.y).atan2(p.x - center.x), p));
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.map(|(_, p)| p)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuadrilisError;

    fn pts(raw: [(f64, f64); 4]) -> [Point2; 4] {
        raw.map(|(x, y)| Point2::new(x, y))
    }

    #[test]
    fn sorts_crossed_input_into_boundary_order() {
        // (0,0),(4,0),(0,3),(4,3) crosses itself when read in input order.
        let quad = Canonicalize::new(pts([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0), (4.0, 3.0)]))
            .execute()
            .unwrap();
        assert_eq!(
            quad.points(),
            &pts([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)])
        );
        assert!(quad.has_parallel_pair());
    }

    #[test]
    fn rotates_so_parallel_pair_is_first() {
        // Parallel sides are the vertical ones; the angular sort starts at
        // (0,0) which puts a slanted side in slot (0,1).
        let quad = Canonicalize::new(pts([(0.0, 0.0), (4.0, 1.0), (4.0, 3.0), (0.0, 4.0)]))
            .execute()
            .unwrap();
        assert!(quad.has_parallel_pair());
        assert_eq!(
            quad.points(),
            &pts([(4.0, 1.0), (4.0, 3.0), (0.0, 4.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn reports_missing_parallel_pair() {
        let quad = Canonicalize::new(pts([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (1.0, 2.0)]))
            .execute()
            .unwrap();
        assert!(!quad.has_parallel_pair());
        assert_eq!(
            quad.points(),
            &pts([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (1.0, 2.0)])
        );
    }

    #[test]
    fn rejects_duplicates() {
        let err = Canonicalize::new(pts([(0.0, 0.0), (4.0, 0.0), (0.0, 0.0), (1.0, 2.0)]))
            .execute()
            .unwrap_err();
        assert_eq!(err, QuadrilisError::Geometry(GeometryError::DuplicatePoints));
    }

    #[test]
    fn rejects_collinear_triple() {
        let err = Canonicalize::new(pts([(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (1.0, 2.0)]))
            .execute()
            .unwrap_err();
        assert_eq!(err, QuadrilisError::Geometry(GeometryError::CollinearPoints));
    }

    #[test]
    fn output_does_not_depend_on_input_order() {
        let a = Canonicalize::new(pts([(0.0, 0.0), (4.0, 0.0), (3.0, 3.0), (1.0, 3.0)]))
            .execute()
            .unwrap();
        let b = Canonicalize::new(pts([(3.0, 3.0), (0.0, 0.0), (1.0, 3.0), (4.0, 0.0)]))
            .execute()
            .unwrap();
        assert_eq!(a, b);
    }
}
