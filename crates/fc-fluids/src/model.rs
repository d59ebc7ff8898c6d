//! The narrow interface to the external fluid-property engine.

use crate::error::FluidResult;
use crate::params::{ParamPair, StateParam, VaporQuality};
use crate::species::Species;
use crate::state::FluidState;

/// Fluid-property engine boundary.
///
/// Everything above this trait treats property computation as a black box:
/// two distinct named inputs go in, a phase-tagged property listing comes
/// out, and physically inconsistent inputs come back as errors. The rest of
/// fluidcalc never talks to a backend directly.
pub trait PropertyProvider {
    /// Backend name for logs and listings.
    fn name(&self) -> &str;

    /// Whether the backend can compute states for this species.
    fn supports(&self, species: Species) -> bool;

    /// Construct a state from two distinct named parameters.
    fn state(&self, species: Species, pair: &ParamPair) -> FluidResult<FluidState>;

    /// Re-specify a state from one base parameter plus vapor quality.
    ///
    /// Used to disambiguate a two-phase result; quality is validated before
    /// this is ever called.
    fn state_with_quality(
        &self,
        species: Species,
        base: StateParam,
        quality: VaporQuality,
    ) -> FluidResult<FluidState>;
}
