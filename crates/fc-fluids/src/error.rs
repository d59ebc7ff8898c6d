//! Fluid property errors.

use crate::params::ParamKind;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while specifying or computing a fluid state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, zero absolute temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Vapor quality outside [0, 1], rejected before any backend call.
    #[error("Vapor quality {value} is outside [0, 1]")]
    QualityOutOfRange { value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Both state parameters share the same kind.
    #[error("State parameters must differ in kind, got {kind} twice")]
    DuplicateParamKind { kind: ParamKind },

    /// Operation not supported (e.g., fluid missing from the backend).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) rejection; the engine's message is kept verbatim.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::QualityOutOfRange { value: 1.5 };
        assert!(err.to_string().contains("1.5"));

        let err = FluidError::DuplicateParamKind {
            kind: ParamKind::Pressure,
        };
        assert!(err.to_string().contains("pressure"));

        let err = FluidError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }
}
