//! Phase indicator reported by the backend.

use std::fmt;

use serde::Serialize;

/// Phase of a computed fluid state.
///
/// Mirrors CoolProp's phase index so backend output maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Liquid,
    Supercritical,
    SupercriticalGas,
    SupercriticalLiquid,
    CriticalPoint,
    Gas,
    TwoPhase,
    Unknown,
}

impl Phase {
    /// Map CoolProp's `Phase` output (a float-encoded index) to a variant.
    pub fn from_index(index: f64) -> Self {
        match index as i64 {
            0 => Self::Liquid,
            1 => Self::Supercritical,
            2 => Self::SupercriticalGas,
            3 => Self::SupercriticalLiquid,
            4 => Self::CriticalPoint,
            5 => Self::Gas,
            6 => Self::TwoPhase,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Supercritical => "supercritical",
            Self::SupercriticalGas => "supercritical gas",
            Self::SupercriticalLiquid => "supercritical liquid",
            Self::CriticalPoint => "critical point",
            Self::Gas => "vapor",
            Self::TwoPhase => "two-phase",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this state needs a vapor quality to be fully specified.
    pub fn is_two_phase(self) -> bool {
        matches!(self, Self::TwoPhase)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
