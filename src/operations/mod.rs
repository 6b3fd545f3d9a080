mod area;
mod canonicalize;
mod classify;

pub use area::{parallelogram_area, rectangle_area, trapezoid_area, Area};
pub use canonicalize::Canonicalize;
pub use classify::{satisfies, Classify};
