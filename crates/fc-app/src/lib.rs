//! fc-app: the interaction cycle behind every fluidcalc surface.
//!
//! A [`Session`](session::Session) owns the selected fluid, the entered
//! parameters, and the computed result, and walks them through one
//! compute/disambiguate/render cycle at a time. The CLI and the UI are thin
//! shells over this crate.

pub mod error;
pub mod session;

pub use error::{AppError, AppResult};
pub use session::{ComputeOutcome, CyclePhase, Session};
