//! State parameter kinds, validated parameter pairs, and vapor quality.
//!
//! The mapping from parameter kinds to backend input pairs is a fixed lookup
//! over a closed enum; there is no string-keyed dispatch anywhere.

use std::fmt;
use std::str::FromStr;

use fc_core::units::{Density, Pressure, Temperature};
use rfluids::io::FluidInputPair;
use uom::si::{
    mass_density::kilogram_per_cubic_meter, pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::error::{FluidError, FluidResult};

/// The kinds of state parameter a user may specify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Pressure,
    Temperature,
    Enthalpy,
    Entropy,
    Density,
}

impl ParamKind {
    pub const ALL: [ParamKind; 5] = [
        ParamKind::Pressure,
        ParamKind::Temperature,
        ParamKind::Enthalpy,
        ParamKind::Entropy,
        ParamKind::Density,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::Enthalpy => "enthalpy",
            Self::Entropy => "entropy",
            Self::Density => "density",
        }
    }

    pub fn si_unit(self) -> &'static str {
        match self {
            Self::Pressure => "Pa",
            Self::Temperature => "K",
            Self::Enthalpy => "J/kg",
            Self::Entropy => "J/(kg·K)",
            Self::Density => "kg/m³",
        }
    }

    /// Candidate kinds for the second parameter once `self` is the first.
    ///
    /// Picking the same kind twice is ruled out structurally: the returned
    /// set never contains `self`.
    pub fn complement(self) -> impl Iterator<Item = ParamKind> {
        Self::ALL.into_iter().filter(move |kind| *kind != self)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(query))
            .ok_or_else(|| format!("unknown parameter kind '{s}'"))
    }
}

/// A single named state parameter with its value in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateParam {
    pub kind: ParamKind,
    pub value: f64,
}

impl StateParam {
    pub fn new(kind: ParamKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn pressure(p: Pressure) -> Self {
        Self::new(ParamKind::Pressure, p.get::<pascal>())
    }

    pub fn temperature(t: Temperature) -> Self {
        Self::new(ParamKind::Temperature, t.get::<kelvin>())
    }

    pub fn enthalpy(h_j_per_kg: f64) -> Self {
        Self::new(ParamKind::Enthalpy, h_j_per_kg)
    }

    pub fn entropy(s_j_per_kg_k: f64) -> Self {
        Self::new(ParamKind::Entropy, s_j_per_kg_k)
    }

    pub fn density(rho: Density) -> Self {
        Self::new(ParamKind::Density, rho.get::<kilogram_per_cubic_meter>())
    }
}

/// Two state parameters of distinct kinds.
///
/// Construction is the only way to obtain a pair, so the `param1 != param2`
/// invariant holds everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamPair {
    first: StateParam,
    second: StateParam,
}

impl ParamPair {
    pub fn new(first: StateParam, second: StateParam) -> FluidResult<Self> {
        if first.kind == second.kind {
            return Err(FluidError::DuplicateParamKind { kind: first.kind });
        }
        if !first.value.is_finite() || !second.value.is_finite() {
            return Err(FluidError::InvalidArg {
                what: "parameter values must be finite",
            });
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> StateParam {
        self.first
    }

    pub fn second(&self) -> StateParam {
        self.second
    }

    /// The CoolProp input pair and its two argument values, in the argument
    /// order the backend expects for that pair.
    pub fn backend_input(&self) -> (FluidInputPair, f64, f64) {
        use ParamKind::*;

        let f = self.first.value;
        let s = self.second.value;

        match (self.first.kind, self.second.kind) {
            (Pressure, Temperature) => (FluidInputPair::PT, f, s),
            (Temperature, Pressure) => (FluidInputPair::PT, s, f),
            (Pressure, Enthalpy) => (FluidInputPair::HMassP, s, f),
            (Enthalpy, Pressure) => (FluidInputPair::HMassP, f, s),
            (Pressure, Entropy) => (FluidInputPair::PSMass, f, s),
            (Entropy, Pressure) => (FluidInputPair::PSMass, s, f),
            (Pressure, Density) => (FluidInputPair::DMassP, s, f),
            (Density, Pressure) => (FluidInputPair::DMassP, f, s),
            (Temperature, Enthalpy) => (FluidInputPair::HMassT, s, f),
            (Enthalpy, Temperature) => (FluidInputPair::HMassT, f, s),
            (Temperature, Entropy) => (FluidInputPair::SMassT, s, f),
            (Entropy, Temperature) => (FluidInputPair::SMassT, f, s),
            (Temperature, Density) => (FluidInputPair::DMassT, s, f),
            (Density, Temperature) => (FluidInputPair::DMassT, f, s),
            (Enthalpy, Entropy) => (FluidInputPair::HMassSMass, f, s),
            (Entropy, Enthalpy) => (FluidInputPair::HMassSMass, s, f),
            (Enthalpy, Density) => (FluidInputPair::DMassHMass, s, f),
            (Density, Enthalpy) => (FluidInputPair::DMassHMass, f, s),
            (Entropy, Density) => (FluidInputPair::DMassSMass, s, f),
            (Density, Entropy) => (FluidInputPair::DMassSMass, f, s),
            // Unreachable: the constructor rejects equal kinds.
            (a, _) => unreachable!("duplicate parameter kind {a} in validated pair"),
        }
    }
}

/// Mass fraction of vapor in a two-phase mixture, validated to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporQuality(f64);

impl VaporQuality {
    pub fn new(value: f64) -> FluidResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(FluidError::QualityOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub const SATURATED_LIQUID: VaporQuality = VaporQuality(0.0);
    pub const SATURATED_VAPOR: VaporQuality = VaporQuality(1.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Backend input for re-specifying a state from one base parameter plus
/// vapor quality (two-phase resolution).
pub fn quality_backend_input(
    base: StateParam,
    quality: VaporQuality,
) -> (FluidInputPair, f64, f64) {
    let v = base.value;
    let q = quality.value();

    match base.kind {
        ParamKind::Pressure => (FluidInputPair::PQ, v, q),
        ParamKind::Temperature => (FluidInputPair::QT, q, v),
        ParamKind::Enthalpy => (FluidInputPair::HMassQ, v, q),
        ParamKind::Entropy => (FluidInputPair::QSMass, q, v),
        ParamKind::Density => (FluidInputPair::DMassQ, v, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::units::{k, pa};
    use proptest::prelude::*;

    #[test]
    fn pair_rejects_duplicate_kinds() {
        let err = ParamPair::new(
            StateParam::pressure(pa(101_325.0)),
            StateParam::new(ParamKind::Pressure, 2.0e5),
        )
        .unwrap_err();

        assert_eq!(
            err,
            FluidError::DuplicateParamKind {
                kind: ParamKind::Pressure
            }
        );
    }

    #[test]
    fn pair_rejects_non_finite_values() {
        let result = ParamPair::new(
            StateParam::new(ParamKind::Pressure, f64::NAN),
            StateParam::temperature(k(300.0)),
        );
        assert!(matches!(result, Err(FluidError::InvalidArg { .. })));
    }

    #[test]
    fn pair_order_does_not_change_backend_input() {
        let p = StateParam::pressure(pa(101_325.0));
        let t = StateParam::temperature(k(300.0));

        let pt = ParamPair::new(p, t).unwrap().backend_input();
        let tp = ParamPair::new(t, p).unwrap().backend_input();
        assert_eq!(pt, tp);
    }

    #[test]
    fn complement_has_four_kinds() {
        for kind in ParamKind::ALL {
            assert_eq!(kind.complement().count(), 4);
        }
    }

    #[test]
    fn quality_bounds() {
        assert!(VaporQuality::new(0.0).is_ok());
        assert!(VaporQuality::new(1.0).is_ok());
        assert!(VaporQuality::new(-0.01).is_err());
        assert!(VaporQuality::new(1.01).is_err());
        assert!(VaporQuality::new(f64::NAN).is_err());
    }

    #[test]
    fn parse_kind_labels() {
        assert_eq!("Pressure".parse::<ParamKind>().unwrap(), ParamKind::Pressure);
        assert_eq!("entropy".parse::<ParamKind>().unwrap(), ParamKind::Entropy);
        assert!("volume".parse::<ParamKind>().is_err());
    }

    fn kind_strategy() -> impl Strategy<Value = ParamKind> {
        prop::sample::select(ParamKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn complement_never_contains_first(kind in kind_strategy()) {
            prop_assert!(kind.complement().all(|other| other != kind));
        }

        #[test]
        fn any_distinct_finite_pair_is_accepted(
            first in kind_strategy(),
            second in kind_strategy(),
            a in -1.0e6f64..1.0e6,
            b in -1.0e6f64..1.0e6,
        ) {
            let result = ParamPair::new(StateParam::new(first, a), StateParam::new(second, b));
            if first == second {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
            }
        }

        #[test]
        fn quality_accepts_exactly_unit_interval(q in -2.0f64..3.0) {
            let result = VaporQuality::new(q);
            prop_assert_eq!(result.is_ok(), (0.0..=1.0).contains(&q));
        }
    }
}
