use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{Quadrilateral, ShapeKind};
use crate::math::predicates::{
    are_all_right_angles, are_all_sides_equal, are_collinear4, are_duplicates, are_equal_length,
    are_parallel, is_parallel_order, side_lengths, sides,
};
use crate::math::{Point2, Tolerance};

use super::Canonicalize;

/// A refinement gate: the extra constraint a kind adds over the one below it.
type Gate = fn(&[Point2; 4], Tolerance) -> bool;

/// Non-fatal gates, applied in order once the points are known to form a
/// trapezoid. The first failing gate caps the classification.
const REFINEMENTS: [(ShapeKind, Gate); 3] = [
    (ShapeKind::Parallelogram, opposite_sides_parallel_and_congruent),
    (ShapeKind::Rectangle, are_all_right_angles),
    (ShapeKind::Square, are_all_sides_equal),
];

/// Classifies four points as the most specific quadrilateral kind they form.
///
/// Gates run strictest-last. The quadrilateral screen (no duplicates, no
/// collinear triple) and the trapezoid gate (a parallel pair of opposite
/// sides) are fatal; parallelogram, rectangle and square gates only cap the
/// result at the last passing level.
pub struct Classify {
    points: [Point2; 4],
    tolerance: Tolerance,
}

impl Classify {
    /// Creates a new `Classify` operation with the default tolerance.
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the tolerance used by every gate.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the classification.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DuplicatePoints` or
    /// `GeometryError::CollinearPoints` if the points do not bound a
    /// quadrilateral, and `GeometryError::NoParallelSides` if no pair of
    /// opposite sides is parallel.
    pub fn execute(&self) -> Result<Quadrilateral> {
        let tol = self.tolerance;
        let quad = Canonicalize::new(self.points)
            .with_tolerance(tol)
            .execute()?;
        if !quad.has_parallel_pair() {
            return Err(GeometryError::NoParallelSides.into());
        }

        let points = quad.into_points();
        let mut kind = ShapeKind::Trapezoid;
        for (next, gate) in REFINEMENTS {
            if !gate(&points, tol) {
                trace!(%kind, rejected = %next, "classification capped");
                break;
            }
            kind = next;
        }

        debug!(%kind, ?points, "classified");
        Ok(Quadrilateral::new(kind, points, tol))
    }
}

/// Returns `true` if canonical `points` meet every constraint of `kind`.
///
/// Constraints are cumulative, so a `true` for one kind implies `true` for
/// every weaker kind. `Invalid` holds for any input.
#[must_use]
pub fn satisfies(kind: ShapeKind, points: &[Point2; 4], tol: Tolerance) -> bool {
    let [a, b, c, d] = points;
    match kind {
        ShapeKind::Invalid => true,
        ShapeKind::Quadrilateral => {
            !are_duplicates(points, tol) && !are_collinear4(a, b, c, d, tol)
        }
        ShapeKind::Trapezoid => {
            satisfies(ShapeKind::Quadrilateral, points, tol) && is_parallel_order(points, tol)
        }
        ShapeKind::Parallelogram => {
            satisfies(ShapeKind::Trapezoid, points, tol)
                && opposite_sides_parallel_and_congruent(points, tol)
        }
        ShapeKind::Rectangle => {
            satisfies(ShapeKind::Parallelogram, points, tol) && are_all_right_angles(points, tol)
        }
        ShapeKind::Square => {
            satisfies(ShapeKind::Rectangle, points, tol) && are_all_sides_equal(points, tol)
        }
    }
}

fn opposite_sides_parallel_and_congruent(points: &[Point2; 4], tol: Tolerance) -> bool {
    let [s01, s12, s23, s30] = sides(points);
    let [l01, l12, l23, l30] = side_lengths(points);
    are_parallel(&s01, &s23, tol)
        && are_parallel(&s12, &s30, tol)
        && are_equal_length(l01, l23, tol)
        && are_equal_length(l12, l30, tol)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuadrilisError;

    fn classify(raw: [(f64, f64); 4]) -> Result<Quadrilateral> {
        Classify::new(raw.map(|(x, y)| Point2::new(x, y))).execute()
    }

    fn kind_of(raw: [(f64, f64); 4]) -> ShapeKind {
        classify(raw).unwrap().kind()
    }

    #[test]
    fn trapezoid() {
        let kind = kind_of([(0.0, 0.0), (4.0, 0.0), (3.0, 3.0), (1.0, 3.0)]);
        assert_eq!(kind, ShapeKind::Trapezoid);
    }

    #[test]
    fn parallelogram() {
        let kind = kind_of([(0.0, 0.0), (4.0, 0.0), (5.0, 3.0), (1.0, 3.0)]);
        assert_eq!(kind, ShapeKind::Parallelogram);
    }

    #[test]
    fn rectangle() {
        let kind = kind_of([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0), (4.0, 3.0)]);
        assert_eq!(kind, ShapeKind::Rectangle);
    }

    #[test]
    fn square() {
        let kind = kind_of([(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
        assert_eq!(kind, ShapeKind::Square);
    }

    #[test]
    fn tilted_square() {
        let kind = kind_of([(0.0, 0.0), (1.0, 1.0), (0.0, 2.0), (-1.0, 1.0)]);
        assert_eq!(kind, ShapeKind::Square);
    }

    #[test]
    fn rhombus_reports_as_parallelogram() {
        let kind = kind_of([(0.0, 0.0), (2.0, -1.0), (4.0, 0.0), (2.0, 1.0)]);
        assert_eq!(kind, ShapeKind::Parallelogram);
    }

    #[test]
    fn isosceles_trapezoid_with_equal_legs_is_not_parallelogram() {
        // Legs are congruent but not parallel.
        let kind = kind_of([(0.0, 0.0), (6.0, 0.0), (4.0, 2.0), (2.0, 2.0)]);
        assert_eq!(kind, ShapeKind::Trapezoid);
    }

    #[test]
    fn right_trapezoid_is_not_rectangle() {
        let kind = kind_of([(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (0.0, 3.0)]);
        assert_eq!(kind, ShapeKind::Trapezoid);
    }

    #[test]
    fn fatal_gates() {
        let err = classify([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap_err();
        assert_eq!(err, QuadrilisError::Geometry(GeometryError::CollinearPoints));

        let err = classify([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (1.0, 2.0)]).unwrap_err();
        assert_eq!(err, QuadrilisError::Geometry(GeometryError::NoParallelSides));

        let err = classify([(1.0, 1.0), (4.0, 0.0), (1.0, 1.0), (1.0, 2.0)]).unwrap_err();
        assert_eq!(err, QuadrilisError::Geometry(GeometryError::DuplicatePoints));
    }

    #[test]
    fn duplicates_win_over_collinearity() {
        // Every triple containing both copies is trivially collinear.
        let err = classify([(0.0, 0.0), (0.0, 0.0), (4.0, 0.0), (1.0, 2.0)]).unwrap_err();
        assert_eq!(err.geometry(), Some(GeometryError::DuplicatePoints));
    }

    #[test]
    fn satisfies_is_cumulative() {
        let square = *classify([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
            .unwrap()
            .vertices();
        for kind in ShapeKind::ALL {
            assert!(satisfies(kind, &square, Tolerance::default()), "{kind}");
        }

        let trapezoid = *classify([(0.0, 0.0), (4.0, 0.0), (3.0, 3.0), (1.0, 3.0)])
            .unwrap()
            .vertices();
        assert!(satisfies(ShapeKind::Trapezoid, &trapezoid, Tolerance::default()));
        assert!(!satisfies(ShapeKind::Parallelogram, &trapezoid, Tolerance::default()));
        assert!(!satisfies(ShapeKind::Square, &trapezoid, Tolerance::default()));
    }

    #[test]
    fn satisfies_rejects_degenerate_points() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(satisfies(ShapeKind::Invalid, &pts, Tolerance::default()));
        assert!(!satisfies(ShapeKind::Quadrilateral, &pts, Tolerance::default()));
        assert!(!satisfies(ShapeKind::Trapezoid, &pts, Tolerance::default()));
    }

    #[test]
    fn wider_tolerance_accepts_near_square() {
        let raw = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.000_001), (0.0, 2.000_001)];
        assert_eq!(kind_of(raw), ShapeKind::Rectangle);

        let tol = Tolerance::new(1e-5).unwrap();
        let quad = Classify::new(raw.map(|(x, y)| Point2::new(x, y)))
            .with_tolerance(tol)
            .execute()
            .unwrap();
        assert_eq!(quad.kind(), ShapeKind::Square);
    }
}
