use thiserror::Error;

/// Top-level error type for quadrilateral classification.
#[derive(Debug, Error, PartialEq)]
pub enum QuadrilisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised when four points cannot be classified or measured.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("two of the four points coincide")]
    DuplicatePoints,

    #[error("three or more of the points lie on one line")]
    CollinearPoints,

    #[error("no pair of opposite sides is parallel")]
    NoParallelSides,

    #[error("zero-length side in canonical point sequence")]
    DegenerateSide,

    #[error("shape is not a classified quadrilateral")]
    UnclassifiedShape,
}

/// Errors related to configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`QuadrilisError`].
pub type Result<T> = std::result::Result<T, QuadrilisError>;

impl QuadrilisError {
    /// Returns the geometry error, if this is one.
    #[must_use]
    pub fn geometry(&self) -> Option<GeometryError> {
        match self {
            Self::Geometry(e) => Some(*e),
            Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_error_is_transparent() {
        let err: QuadrilisError = GeometryError::NoParallelSides.into();
        assert_eq!(err.to_string(), "no pair of opposite sides is parallel");
        assert_eq!(err.geometry(), Some(GeometryError::NoParallelSides));
    }

    #[test]
    fn config_error_message() {
        let err: QuadrilisError = ConfigError::ParameterOutOfRange {
            parameter: "epsilon",
            value: -1.0,
            min: 0.0,
            max: 1.0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "parameter epsilon = -1 is out of range [0, 1]"
        );
        assert_eq!(err.geometry(), None);
    }
}
