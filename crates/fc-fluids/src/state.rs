//! Computed fluid state: phase indicator plus an ordered property listing.

use serde::Serialize;

use crate::phase::Phase;

/// One named property row, in SI base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyValue {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Result of one successful state computation.
///
/// Created by a single provider call, rendered once, then discarded; nothing
/// mutates it after construction.
#[derive(Debug, Clone, Serialize)]
pub struct FluidState {
    phase: Phase,
    quality: Option<f64>,
    properties: Vec<PropertyValue>,
}

impl FluidState {
    /// Assemble a state from a provider's raw outputs.
    pub fn new(phase: Phase, quality: Option<f64>, properties: Vec<PropertyValue>) -> Self {
        Self {
            phase,
            quality,
            properties,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Vapor quality, present only when the state lies in the two-phase
    /// region (or was resolved with one).
    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    /// Property rows in the order the backend was queried.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyValue> {
        self.properties.iter()
    }

    /// Consume the state and yield its rows once; finite and not restartable.
    pub fn into_properties(self) -> impl Iterator<Item = PropertyValue> {
        self.properties.into_iter()
    }

    /// Look up a property row by name. Intended for tests and summaries.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.properties
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> FluidState {
        FluidState::new(
            Phase::Liquid,
            None,
            vec![
                PropertyValue {
                    name: "pressure",
                    value: 101_325.0,
                    unit: "Pa",
                },
                PropertyValue {
                    name: "temperature",
                    value: 298.15,
                    unit: "K",
                },
            ],
        )
    }

    #[test]
    fn rows_preserve_backend_order() {
        let state = sample_state();
        let names: Vec<_> = state.properties().map(|row| row.name).collect();
        assert_eq!(names, ["pressure", "temperature"]);
    }

    #[test]
    fn lookup_by_name() {
        let state = sample_state();
        assert_eq!(state.get("pressure"), Some(101_325.0));
        assert_eq!(state.get("density"), None);
    }

    #[test]
    fn consuming_iteration_is_finite() {
        let rows: Vec<_> = sample_state().into_properties().collect();
        assert_eq!(rows.len(), 2);
    }
}
