//! Tolerance-aware predicates over planar points and displacement vectors.
//!
//! Every comparison goes through a [`Tolerance`], so callers can tighten or
//! widen the zero test without touching the geometry.

use super::{Point2, Tolerance, Vector2};

/// Displacement from `p1` to `p2`.
#[must_use]
pub fn to_vector(p1: &Point2, p2: &Point2) -> Vector2 {
    p2 - p1
}

/// Cross product in the `v1.y * v2.x - v2.y * v1.x` orientation.
#[must_use]
pub fn cross(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.y * v2.x - v2.y * v1.x
}

#[must_use]
pub fn dot(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Returns `true` if `value` is within tolerance of zero.
#[must_use]
pub fn is_zero(value: f64, tol: Tolerance) -> bool {
    tol.is_zero(value)
}

/// Returns `true` if the two vectors are parallel.
///
/// A zero-length vector is parallel to everything; duplicate points must be
/// rejected before this is used on polygon sides.
#[must_use]
pub fn are_parallel(v1: &Vector2, v2: &Vector2, tol: Tolerance) -> bool {
    tol.is_zero(cross(v1, v2))
}

/// Returns `true` if the two vectors are perpendicular.
#[must_use]
pub fn are_perpendicular(v1: &Vector2, v2: &Vector2, tol: Tolerance) -> bool {
    tol.is_zero(dot(v1, v2))
}

/// Returns `true` if the two lengths are equal within tolerance.
#[must_use]
pub fn are_equal_length(a: f64, b: f64, tol: Tolerance) -> bool {
    tol.is_zero(a - b)
}

/// Component-wise point equality.
#[must_use]
pub fn points_equal(p: &Point2, q: &Point2, tol: Tolerance) -> bool {
    tol.is_zero(p.x - q.x) && tol.is_zero(p.y - q.y)
}

/// Returns `true` if the three points lie on one line.
#[must_use]
pub fn are_collinear(p1: &Point2, p2: &Point2, p3: &Point2, tol: Tolerance) -> bool {
    are_parallel(&to_vector(p1, p2), &to_vector(p1, p3), tol)
}

/// Returns `true` if any three of the four points lie on one line.
///
/// All four triples are tested. Near the tolerance boundary the fourth
/// triple is not implied by the other three.
#[must_use]
pub fn are_collinear4(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    tol: Tolerance,
) -> bool {
    are_collinear(p1, p2, p3, tol)
        || are_collinear(p1, p2, p4, tol)
        || are_collinear(p1, p3, p4, tol)
        || are_collinear(p2, p3, p4, tol)
}

/// Returns `true` if any two of the points are equal.
#[must_use]
pub fn are_duplicates(points: &[Point2], tol: Tolerance) -> bool {
    points.iter().enumerate().any(|(i, p)| {
        points[i + 1..]
            .iter()
            .any(|q| points_equal(p, q, tol))
    })
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    to_vector(p1, p2).norm()
}

/// Distance from `p3` to the infinite line through `p1` and `p2`.
///
/// Not finite when `p1 == p2`.
#[must_use]
pub fn perpendicular_height(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    let line = to_vector(p1, p2);
    let to_point = to_vector(p1, p3);
    cross(&to_point, &line).abs() / distance(p1, p2)
}

/// Returns `true` if sides (0,1) and (2,3) of a cyclic 4-sequence are parallel.
#[must_use]
pub fn is_parallel_order(points: &[Point2; 4], tol: Tolerance) -> bool {
    are_parallel(
        &to_vector(&points[0], &points[1]),
        &to_vector(&points[2], &points[3]),
        tol,
    )
}

/// The four sides of a cyclic 4-sequence as vectors, starting with (0,1).
#[must_use]
pub fn sides(points: &[Point2; 4]) -> [Vector2; 4] {
    std::array::from_fn(|i| to_vector(&points[i], &points[(i + 1) % 4]))
}

/// The four side lengths of a cyclic 4-sequence, starting with (0,1).
#[must_use]
pub fn side_lengths(points: &[Point2; 4]) -> [f64; 4] {
    std::array::from_fn(|i| distance(&points[i], &points[(i + 1) % 4]))
}

/// Returns `true` if every pair of consecutive sides is perpendicular.
#[must_use]
pub fn are_all_right_angles(points: &[Point2; 4], tol: Tolerance) -> bool {
    let s = sides(points);
    (0..4).all(|i| are_perpendicular(&s[i], &s[(i + 1) % 4], tol))
}

/// Returns `true` if all four sides have the same length.
#[must_use]
pub fn are_all_sides_equal(points: &[Point2; 4], tol: Tolerance) -> bool {
    let [a, b, c, d] = side_lengths(points);
    are_equal_length(a, b, tol) && are_equal_length(b, c, tol) && are_equal_length(c, d, tol)
}
