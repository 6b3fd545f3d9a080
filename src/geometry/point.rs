use crate::math::Point2;

/// Minimal read-only view of a planar point.
///
/// Anything exposing `x` and `y` coordinates can be fed to the classifier;
/// it is converted to a [`Point2`] once at the boundary.
pub trait PlanarPoint {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    /// Converts to the crate's point type.
    fn to_point2(&self) -> Point2 {
        Point2::new(self.x(), self.y())
    }
}

impl PlanarPoint for Point2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn to_point2(&self) -> Point2 {
        *self
    }
}

impl PlanarPoint for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl PlanarPoint for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl<P: PlanarPoint + ?Sized> PlanarPoint for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_agree() {
        let expected = Point2::new(1.5, -2.0);
        assert_eq!([1.5_f64, -2.0].to_point2(), expected);
        assert_eq!((1.5_f64, -2.0_f64).to_point2(), expected);
        assert_eq!(expected.to_point2(), expected);
        assert_eq!((&(1.5_f64, -2.0_f64)).to_point2(), expected);
    }
}
