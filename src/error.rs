use thiserror::Error;

use crate::sim::units::Float;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or stepping a system.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or non-physical initial state. Raised at construction only.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Two bodies coincide, or are so close that their attraction is not representable.
    #[error("degenerate configuration: bodies {first} and {second} are coincident or too close")]
    DegenerateConfiguration { first: usize, second: usize },

    /// A step would leave a body with an infinite or NaN acceleration, velocity or position.
    #[error("step would leave body {index} with a non-finite state")]
    NonFiniteState { index: usize },

    /// Time step or speed scale that is NaN or infinite.
    #[error("invalid time step: {0} (must be finite)")]
    InvalidTimeStep(Float),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for a scenario.
    #[error("malformed scenario file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidConfiguration("mass of body 2 must be positive".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("body 2"));

        let e = Error::DegenerateConfiguration {
            first: 0,
            second: 3,
        };
        assert_eq!(
            e.to_string(),
            "degenerate configuration: bodies 0 and 3 are coincident or too close"
        );
    }

    #[test]
    fn non_finite_state_names_the_body() {
        let e = Error::NonFiniteState { index: 4 };
        assert_eq!(e.to_string(), "step would leave body 4 with a non-finite state");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
    }
}
