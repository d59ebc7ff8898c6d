//! Application-level error type.

use fc_core::CoreError;
use fc_fluids::{FluidError, UnitError};
use thiserror::Error;

/// Anything that can go wrong while driving a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Units(#[from] UnitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluid_errors_convert() {
        let err: AppError = FluidError::QualityOutOfRange { value: 1.5 }.into();
        assert!(matches!(err, AppError::Fluid(_)));
    }

    #[test]
    fn unit_parse_errors_convert() {
        use fc_fluids::{Quantity, parse_quantity};

        let parse_failure = parse_quantity("not a number", Quantity::Pressure).unwrap_err();
        let err: AppError = parse_failure.into();
        assert!(matches!(err, AppError::Units(_)));
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn display_passes_through() {
        let err: AppError = FluidError::Backend {
            message: "input pair is invalid".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Backend error: input pair is invalid");
    }
}
