//! CoolProp-backed property provider.

use fc_core::units::MolarMass;
use rfluids::io::{FluidParam, FluidTrivialParam};
use rfluids::native::AbstractState;
use uom::si::molar_mass::kilogram_per_mole;

use crate::error::{FluidError, FluidResult};
use crate::model::PropertyProvider;
use crate::params::{ParamPair, StateParam, VaporQuality, quality_backend_input};
use crate::phase::Phase;
use crate::species::Species;
use crate::state::{FluidState, PropertyValue};

const BACKEND: &str = "HEOS";

/// Always-queried property rows, in render order.
const PROPERTY_ROWS: [(&str, FluidParam, &str); 8] = [
    ("pressure", FluidParam::P, "Pa"),
    ("temperature", FluidParam::T, "K"),
    ("density", FluidParam::DMass, "kg/m³"),
    ("specific enthalpy", FluidParam::HMass, "J/kg"),
    ("specific entropy", FluidParam::SMass, "J/(kg·K)"),
    ("cp", FluidParam::CpMass, "J/(kg·K)"),
    ("cv", FluidParam::CvMass, "J/(kg·K)"),
    ("internal energy", FluidParam::UMass, "J/kg"),
];

/// CoolProp backend for fluid properties.
///
/// A fresh `AbstractState` is created per computation: each interaction cycle
/// is independent and there is nothing to share or cache between them.
pub struct CoolPropProvider {}

impl CoolPropProvider {
    pub fn new() -> Self {
        Self {}
    }

    fn open(&self, species: Species) -> FluidResult<AbstractState> {
        AbstractState::new(BACKEND, species.coolprop_name()).map_err(backend_err)
    }

    /// Molar mass of a fluid, for catalog listings.
    pub fn molar_mass(&self, species: Species) -> FluidResult<MolarMass> {
        let state = self.open(species)?;
        let molar_mass = state
            .keyed_output(FluidTrivialParam::MolarMass)
            .map_err(backend_err)?;
        Ok(MolarMass::new::<kilogram_per_mole>(molar_mass))
    }

    /// Read phase and property rows from an updated backend state.
    fn read_state(state: &AbstractState) -> FluidResult<FluidState> {
        let phase_index = state.keyed_output(FluidParam::Phase).map_err(backend_err)?;
        let phase = Phase::from_index(phase_index);

        let mut properties = Vec::with_capacity(PROPERTY_ROWS.len() + 2);
        for (name, param, unit) in PROPERTY_ROWS {
            let value = state.keyed_output(param).map_err(backend_err)?;
            properties.push(PropertyValue { name, value, unit });
        }

        // Undefined inside the two-phase dome; skip rather than fail.
        if let Ok(value) = state.keyed_output(FluidParam::SoundSpeed) {
            properties.push(PropertyValue {
                name: "speed of sound",
                value,
                unit: "m/s",
            });
        }

        let quality = if phase.is_two_phase() {
            let q = state.keyed_output(FluidParam::Q).map_err(backend_err)?;
            properties.push(PropertyValue {
                name: "vapor quality",
                value: q,
                unit: "-",
            });
            Some(q)
        } else {
            None
        };

        Ok(FluidState::new(phase, quality, properties))
    }
}

impl Default for CoolPropProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyProvider for CoolPropProvider {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, _species: Species) -> bool {
        // The catalog only lists species with HEOS equations of state.
        true
    }

    fn state(&self, species: Species, pair: &ParamPair) -> FluidResult<FluidState> {
        let (input, a, b) = pair.backend_input();
        let mut state = self.open(species)?;
        state.update(input, a, b).map_err(backend_err)?;
        Self::read_state(&state)
    }

    fn state_with_quality(
        &self,
        species: Species,
        base: StateParam,
        quality: VaporQuality,
    ) -> FluidResult<FluidState> {
        if !base.value.is_finite() {
            return Err(FluidError::InvalidArg {
                what: "base parameter value must be finite",
            });
        }

        let (input, a, b) = quality_backend_input(base, quality);
        let mut state = self.open(species)?;
        state.update(input, a, b).map_err(backend_err)?;
        Self::read_state(&state)
    }
}

fn backend_err(e: rfluids::native::CoolPropError) -> FluidError {
    FluidError::Backend {
        message: e.to_string(),
    }
}
