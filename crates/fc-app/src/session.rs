//! The interaction cycle: enter parameters, compute, disambiguate, render.
//!
//! A [`Session`] is a small state machine. Each cycle runs
//! `Idle -> ParametersEntered -> Computed -> Rendered`, with a detour through
//! `TwoPhaseNeedsQuality -> Resolved` when the computed state lands inside
//! the saturation dome. Any failure records the message verbatim and returns
//! the session to `Idle`; the next cycle starts clean.

use fc_core::CoreError;
use fc_fluids::{
    FluidCatalogEntry, FluidState, ParamKind, ParamPair, PropertyProvider, Species, VaporQuality,
    available_fluids,
};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Where a session currently stands in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Nothing entered, nothing computed.
    Idle,
    /// Fluid and a validated parameter pair are staged.
    ParametersEntered,
    /// A single-phase state was computed and awaits rendering.
    Computed,
    /// The computed state is two-phase; a vapor quality is required.
    TwoPhaseNeedsQuality,
    /// The two-phase state was re-specified with a quality.
    Resolved,
    /// The result has been handed off for display.
    Rendered,
}

/// What a successful [`Session::compute`] call means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeOutcome {
    /// The state is unambiguous; render it.
    Ready,
    /// The state is two-phase; ask for a vapor quality, then
    /// [`Session::resolve_quality`].
    NeedsQuality,
}

/// One user's calculator context.
pub struct Session {
    provider: Box<dyn PropertyProvider>,
    phase: CyclePhase,
    species: Option<Species>,
    pair: Option<ParamPair>,
    result: Option<FluidState>,
    last_error: Option<String>,
}

impl Session {
    pub fn new(provider: Box<dyn PropertyProvider>) -> Self {
        Self {
            provider,
            phase: CyclePhase::Idle,
            species: None,
            pair: None,
            result: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn species(&self) -> Option<Species> {
        self.species
    }

    pub fn pair(&self) -> Option<&ParamPair> {
        self.pair.as_ref()
    }

    /// The computed state, if one is pending display.
    pub fn state(&self) -> Option<&FluidState> {
        self.result.as_ref()
    }

    /// Message of the most recent failure, verbatim from its source.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fluids selectable in this session.
    pub fn available_fluids(&self) -> &'static [FluidCatalogEntry] {
        available_fluids()
    }

    /// Candidate kinds for the second parameter given the first.
    pub fn second_parameter_choices(&self, first: ParamKind) -> Vec<ParamKind> {
        first.complement().collect()
    }

    /// Stage a fluid and a validated parameter pair for computation.
    ///
    /// Permitted from any phase; starting over mid-cycle abandons whatever
    /// was in flight.
    pub fn begin(&mut self, species: Species, pair: ParamPair) {
        debug!(
            fluid = %species,
            first = %pair.first().kind,
            second = %pair.second().kind,
            "parameters entered"
        );
        self.species = Some(species);
        self.pair = Some(pair);
        self.result = None;
        self.last_error = None;
        self.phase = CyclePhase::ParametersEntered;
    }

    /// Compute the state for the staged inputs.
    pub fn compute(&mut self) -> AppResult<ComputeOutcome> {
        if self.phase != CyclePhase::ParametersEntered {
            return Err(CoreError::Invariant {
                what: "compute requires staged parameters",
            }
            .into());
        }
        let (species, pair) = match (self.species, self.pair) {
            (Some(species), Some(pair)) => (species, pair),
            _ => {
                return Err(CoreError::Invariant {
                    what: "staged session is missing fluid or parameters",
                }
                .into());
            }
        };

        let state = match self.provider.state(species, &pair) {
            Ok(state) => state,
            Err(e) => return Err(self.fail(e)),
        };

        if state.phase().is_two_phase() {
            debug!(fluid = %species, "two-phase state, quality needed");
            self.result = Some(state);
            self.phase = CyclePhase::TwoPhaseNeedsQuality;
            Ok(ComputeOutcome::NeedsQuality)
        } else {
            debug!(fluid = %species, phase = %state.phase(), "state computed");
            self.result = Some(state);
            self.phase = CyclePhase::Computed;
            Ok(ComputeOutcome::Ready)
        }
    }

    /// Disambiguate a two-phase result with a vapor quality in [0, 1].
    ///
    /// The state is re-specified from the first entered parameter plus the
    /// quality; the second parameter played its part in locating the dome and
    /// is dropped here.
    pub fn resolve_quality(&mut self, quality: f64) -> AppResult<()> {
        if self.phase != CyclePhase::TwoPhaseNeedsQuality {
            return Err(CoreError::Invariant {
                what: "no two-phase state awaiting a quality",
            }
            .into());
        }
        let (species, pair) = match (self.species, self.pair) {
            (Some(species), Some(pair)) => (species, pair),
            _ => {
                return Err(CoreError::Invariant {
                    what: "staged session is missing fluid or parameters",
                }
                .into());
            }
        };

        let quality = match VaporQuality::new(quality) {
            Ok(q) => q,
            Err(e) => return Err(self.fail(e)),
        };

        match self
            .provider
            .state_with_quality(species, pair.first(), quality)
        {
            Ok(state) => {
                debug!(fluid = %species, quality = quality.value(), "two-phase state resolved");
                self.result = Some(state);
                self.phase = CyclePhase::Resolved;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Hand the computed state off for display, ending the cycle.
    pub fn render_properties(&mut self) -> AppResult<FluidState> {
        if !matches!(self.phase, CyclePhase::Computed | CyclePhase::Resolved) {
            return Err(CoreError::Invariant {
                what: "no computed state to render",
            }
            .into());
        }
        // Phase check above guarantees a result is present.
        let state = match self.result.take() {
            Some(state) => state,
            None => {
                return Err(CoreError::Invariant {
                    what: "computed phase without a stored state",
                }
                .into());
            }
        };
        self.phase = CyclePhase::Rendered;
        Ok(state)
    }

    /// Abandon the cycle and return to `Idle`, clearing staged inputs,
    /// results, and the recorded error.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.species = None;
        self.pair = None;
        self.result = None;
        self.last_error = None;
        self.phase = CyclePhase::Idle;
    }

    /// Record a failure verbatim and fall back to `Idle`.
    fn fail(&mut self, error: fc_fluids::FluidError) -> AppError {
        debug!(error = %error, "cycle failed");
        self.last_error = Some(error.to_string());
        self.species = None;
        self.pair = None;
        self.result = None;
        self.phase = CyclePhase::Idle;
        error.into()
    }
}
