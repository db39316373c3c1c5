//! Portfolio input model and the two engines that read it.

pub mod holdings;
pub mod scoring;
pub mod simulation;

pub use holdings::*;
pub use scoring::*;
pub use simulation::*;
