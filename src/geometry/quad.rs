use std::fmt;

use crate::error::Result;
use crate::math::{predicates, Point2, Tolerance};
use crate::operations::Area;

/// Classification lattice for four points.
///
/// Variants are ordered from weakest to strictest; each level implies every
/// level below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Invalid,
    Quadrilateral,
    Trapezoid,
    Parallelogram,
    Rectangle,
    Square,
}

impl ShapeKind {
    /// Every kind, weakest first.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Invalid,
        ShapeKind::Quadrilateral,
        ShapeKind::Trapezoid,
        ShapeKind::Parallelogram,
        ShapeKind::Rectangle,
        ShapeKind::Square,
    ];

    /// Returns `true` if a shape of this kind is also a shape of kind `other`.
    #[must_use]
    pub fn refines(self, other: ShapeKind) -> bool {
        self >= other
    }

    /// Lower-case display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Invalid => "invalid shape",
            ShapeKind::Quadrilateral => "quadrilateral",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four points in canonical cyclic order.
///
/// Walking `0 → 1 → 2 → 3 → 0` traces the boundary. When the points admit a
/// pair of parallel opposite sides, sides `(0,1)` and `(2,3)` are that pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalQuad {
    points: [Point2; 4],
    parallel_pair: bool,
}

impl CanonicalQuad {
    pub(crate) fn new(points: [Point2; 4], parallel_pair: bool) -> Self {
        Self {
            points,
            parallel_pair,
        }
    }

    /// The points in canonical order.
    #[must_use]
    pub fn points(&self) -> &[Point2; 4] {
        &self.points
    }

    /// Whether sides `(0,1)` and `(2,3)` are parallel.
    #[must_use]
    pub fn has_parallel_pair(&self) -> bool {
        self.parallel_pair
    }

    #[must_use]
    pub fn into_points(self) -> [Point2; 4] {
        self.points
    }
}

/// A classified quadrilateral: its most specific kind and canonical vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral {
    kind: ShapeKind,
    vertices: [Point2; 4],
    tolerance: Tolerance,
}

impl Quadrilateral {
    pub(crate) fn new(kind: ShapeKind, vertices: [Point2; 4], tolerance: Tolerance) -> Self {
        Self {
            kind,
            vertices,
            tolerance,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The vertices in canonical order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 4] {
        &self.vertices
    }

    /// Returns the vertex at `index`, or `None` if `index > 3`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Point2> {
        self.vertices.get(index)
    }

    /// Side lengths, starting with side `(0,1)`.
    #[must_use]
    pub fn side_lengths(&self) -> [f64; 4] {
        predicates::side_lengths(&self.vertices)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    /// Computes the area with the formula for this shape's kind.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSide` if a base has zero length.
    pub fn area(&self) -> Result<f64> {
        Area::new(self.kind, self.vertices)
            .with_tolerance(self.tolerance)
            .execute()
    }
}

const ORDINALS: [&str; 4] = ["first", "second", "third", "fourth"];

impl fmt::Display for Quadrilateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The four vertices of this {} are:", self.kind)?;
        for (ordinal, v) in ORDINALS.iter().zip(&self.vertices) {
            writeln!(f, "{ordinal} vertex : Point({:.1}, {:.1})", v.x, v.y)?;
        }
        Ok(())
    }
}
