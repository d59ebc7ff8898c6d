//! fc-fluids: the fluid-property boundary for fluidcalc.
//!
//! Provides:
//! - A fixed catalog of supported fluids
//! - State parameter kinds and validated parameter pairs
//! - Vapor quality for two-phase disambiguation
//! - The `PropertyProvider` trait that isolates the rest of fluidcalc from
//!   backend dependencies
//! - A CoolProp backend (via `rfluids`) implementing that trait
//!
//! # Example
//!
//! ```no_run
//! use fc_core::units::{k, pa};
//! use fc_fluids::{CoolPropProvider, ParamPair, PropertyProvider, Species, StateParam};
//!
//! let provider = CoolPropProvider::new();
//! let pair = ParamPair::new(
//!     StateParam::pressure(pa(101_325.0)),
//!     StateParam::temperature(k(298.15)),
//! )
//! .unwrap();
//!
//! let state = provider.state(Species::Water, &pair).unwrap();
//! println!("phase: {}", state.phase());
//! for row in state.properties() {
//!     println!("{}: {} {}", row.name, row.value, row.unit);
//! }
//! ```

pub mod catalog;
pub mod coolprop;
pub mod error;
pub mod model;
pub mod params;
pub mod phase;
pub mod species;
pub mod state;
pub mod units;

// Re-exports for ergonomics
pub use catalog::{FluidCatalogEntry, available_fluids, filter_fluids};
pub use coolprop::CoolPropProvider;
pub use error::{FluidError, FluidResult};
pub use model::PropertyProvider;
pub use params::{ParamKind, ParamPair, StateParam, VaporQuality};
pub use phase::Phase;
pub use species::Species;
pub use state::{FluidState, PropertyValue};
pub use units::{Quantity, UnitError, parse_quantity};
