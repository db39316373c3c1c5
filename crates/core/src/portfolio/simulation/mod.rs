//! Simulation engine - projects the effect of one additional holding.

mod simulation_model;
mod simulation_service;
mod simulation_traits;


pub use simulation_model::{
    ComparisonPoint, PortfolioComparison, ProjectionPoint, ProposedHolding, SimulationBaseline,
    SimulationInput, SimulationResult,
};
pub use simulation_service::{simulate, SimulationService};
pub use simulation_traits::SimulationServiceTrait;
