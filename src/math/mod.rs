pub mod polygon_2d;
pub mod predicates;

use crate::error::{ConfigError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Largest epsilon accepted by [`Tolerance::new`].
const MAX_EPSILON: f64 = 1.0;

/// Tolerance threaded through every predicate.
///
/// Values whose magnitude is strictly below `epsilon` count as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Creates a tolerance with a custom epsilon.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` if `epsilon` is not a
    /// finite value in `(0, 1]`.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 || epsilon > MAX_EPSILON {
            return Err(ConfigError::ParameterOutOfRange {
                parameter: "epsilon",
                value: epsilon,
                min: 0.0,
                max: MAX_EPSILON,
            }
            .into());
        }
        Ok(Self { epsilon })
    }

    /// Returns the epsilon.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        self.epsilon
    }

    /// Returns `true` if `value` is within epsilon of zero.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() < self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}
