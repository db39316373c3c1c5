use crate::errors::Result;
use crate::portfolio::simulation::{SimulationBaseline, SimulationInput, SimulationResult};

/// Trait for simulation service operations
pub trait SimulationServiceTrait: Send + Sync {
    fn run(&self, baseline: &SimulationBaseline, input: &SimulationInput) -> Result<SimulationResult>;
}
