//! fc-core: shared error and unit types for fluidcalc.

pub mod error;
pub mod units;

pub use error::{CoreError, CoreResult};
