pub mod point;
pub mod quad;

pub use point::PlanarPoint;
pub use quad::{CanonicalQuad, Quadrilateral, ShapeKind};
