//! SmartFolio Core - portfolio scoring and what-if simulation.
//!
//! This crate holds the pure domain logic: the input model, the scoring
//! engine, the simulation engine and the screen flow that ties them
//! together. It performs no I/O; the HTTP surface lives in `apps/server`.

pub mod constants;
pub mod errors;
pub mod flow;
pub mod portfolio;
pub mod utils;

// Re-export the engine types at the crate root
pub use flow::{AnalyzerFlow, FlowStep};
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
