//! Screen navigation for the analyzer.
//!
//! The presentation layer moves through four screens:
//!
//! ```text
//! LANDING ──start──▶ INPUT ──submit──▶ RESULTS ──open_simulator──▶ SIMULATION
//!    ▲                 │  ▲               │  ▲                        │
//!    └──────back───────┘  └─────back──────┘  └──────────back──────────┘
//! ```
//!
//! [`AnalyzerFlow`] holds the engine output for the current screen. The
//! engines themselves know nothing about navigation.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Error, Result};
use crate::portfolio::holdings::Portfolio;
use crate::portfolio::scoring::{score, PortfolioAnalysis};
use crate::portfolio::simulation::{simulate, SimulationBaseline, SimulationInput, SimulationResult};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStep {
    #[default]
    Landing,
    Input,
    Results,
    Simulation,
}

impl FlowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStep::Landing => "LANDING",
            FlowStep::Input => "INPUT",
            FlowStep::Results => "RESULTS",
            FlowStep::Simulation => "SIMULATION",
        }
    }
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Navigation state plus the analysis and simulation it produced.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerFlow {
    step: FlowStep,
    analysis: Option<PortfolioAnalysis>,
    simulation: Option<SimulationResult>,
}

impl AnalyzerFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn analysis(&self) -> Option<&PortfolioAnalysis> {
        self.analysis.as_ref()
    }

    pub fn simulation(&self) -> Option<&SimulationResult> {
        self.simulation.as_ref()
    }

    /// LANDING → INPUT.
    pub fn start(&mut self) -> Result<()> {
        self.require_step(FlowStep::Landing, "start")?;
        self.goto(FlowStep::Input);
        Ok(())
    }

    /// INPUT → RESULTS. On a validation error the flow stays on INPUT.
    pub fn submit(&mut self, portfolio: &Portfolio) -> Result<&PortfolioAnalysis> {
        self.require_step(FlowStep::Input, "submit")?;
        let analysis = score(portfolio)?;
        self.simulation = None;
        self.goto(FlowStep::Results);
        Ok(self.analysis.insert(analysis))
    }

    /// RESULTS → SIMULATION.
    pub fn open_simulator(&mut self) -> Result<()> {
        self.require_step(FlowStep::Results, "open simulator")?;
        self.goto(FlowStep::Simulation);
        Ok(())
    }

    /// Runs a simulation against the held analysis; may be repeated.
    pub fn run_simulation(&mut self, input: &SimulationInput) -> Result<&SimulationResult> {
        self.require_step(FlowStep::Simulation, "run simulation")?;
        let analysis = self.analysis.as_ref().ok_or_else(|| {
            Error::InvalidTransition("no analysis available to simulate against".to_string())
        })?;
        let result = simulate(&SimulationBaseline::from(analysis), input)?;
        Ok(self.simulation.insert(result))
    }

    /// Returns to the previous screen. Leaving the simulator discards its result.
    pub fn back(&mut self) -> FlowStep {
        let previous = match self.step {
            FlowStep::Landing | FlowStep::Input => FlowStep::Landing,
            FlowStep::Results => FlowStep::Input,
            FlowStep::Simulation => {
                self.simulation = None;
                FlowStep::Results
            }
        };
        self.goto(previous);
        previous
    }

    fn require_step(&self, required: FlowStep, action: &str) -> Result<()> {
        if self.step == required {
            Ok(())
        } else {
            Err(Error::InvalidTransition(format!(
                "cannot {} from {} (requires {})",
                action, self.step, required
            )))
        }
    }

    fn goto(&mut self, next: FlowStep) {
        debug!("Analyzer flow {} -> {}", self.step, next);
        self.step = next;
    }
}
