use crate::error::{GeometryError, Result};
use crate::geometry::ShapeKind;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::predicates::{distance, perpendicular_height, side_lengths};
use crate::math::{Point2, Tolerance};

/// Computes the area of a classified quadrilateral.
///
/// The formula is picked by kind. For trapezoids and stronger, sides `(0,1)`
/// and `(2,3)` of the canonical sequence are the parallel bases.
pub struct Area {
    kind: ShapeKind,
    points: [Point2; 4],
    tolerance: Tolerance,
}

impl Area {
    /// Creates a new `Area` query over canonical points.
    #[must_use]
    pub fn new(kind: ShapeKind, points: [Point2; 4]) -> Self {
        Self {
            kind,
            points,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the tolerance below which a side counts as zero-length.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning a non-negative area.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSide` if any side has zero length,
    /// or `GeometryError::UnclassifiedShape` for `ShapeKind::Invalid`.
    pub fn execute(&self) -> Result<f64> {
        let pts = &self.points;
        match self.kind {
            ShapeKind::Invalid => Err(GeometryError::UnclassifiedShape.into()),
            ShapeKind::Quadrilateral => {
                ensure_sides(pts, self.tolerance)?;
                Ok(signed_area_2d(pts).abs())
            }
            ShapeKind::Trapezoid => trapezoid_area(pts, self.tolerance),
            ShapeKind::Parallelogram => parallelogram_area(pts, self.tolerance),
            ShapeKind::Rectangle | ShapeKind::Square => rectangle_area(pts, self.tolerance),
        }
    }
}

/// `((base1 + base2) / 2) * height` with bases `(0,1)` and `(2,3)`.
///
/// Valid for every kind from trapezoid up, so it doubles as a cross-check for
/// the specialized formulas.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSide` if any side has zero length.
pub fn trapezoid_area(points: &[Point2; 4], tol: Tolerance) -> Result<f64> {
    ensure_sides(points, tol)?;
    let [p0, p1, p2, p3] = points;
    let base1 = distance(p0, p1);
    let base2 = distance(p2, p3);
    Ok((base1 + base2) / 2.0 * perpendicular_height(p0, p1, p2))
}

/// `base * height` with base `(0,1)`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSide` if any side has zero length.
pub fn parallelogram_area(points: &[Point2; 4], tol: Tolerance) -> Result<f64> {
    ensure_sides(points, tol)?;
    let [p0, p1, p2, _] = points;
    Ok(distance(p0, p1) * perpendicular_height(p0, p1, p2))
}

/// `length * width` of the adjacent sides `(0,1)` and `(1,2)`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSide` if any side has zero length.
pub fn rectangle_area(points: &[Point2; 4], tol: Tolerance) -> Result<f64> {
    let [length, width, _, _] = ensure_sides(points, tol)?;
    Ok(length * width)
}

fn ensure_sides(points: &[Point2; 4], tol: Tolerance) -> Result<[f64; 4]> {
    let lengths = side_lengths(points);
    if lengths.iter().any(|&l| tol.is_zero(l)) {
        return Err(GeometryError::DegenerateSide.into());
    }
    Ok(lengths)
}
