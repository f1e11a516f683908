// Main module declarations for the wind plant cost model

// Estimation pipeline stages
pub mod core {
    pub mod aep;
    pub mod bos;
    pub mod finance;
    pub mod om;
    pub mod pipeline;
    pub mod power_curve;
    pub mod turbine;
}

// Configuration modules
pub mod config {
    pub mod const_funcs;
    pub mod constants;
    pub mod scenario;
    pub mod site;
}

// Component models
pub mod models {
    pub mod blade;
    pub mod drivetrain;
    pub mod hub;
    pub mod nacelle;
    pub mod tower;
}

// Cost data
pub mod data {
    pub mod cost_index;
    pub mod foundation;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

pub mod error;

// Re-export commonly used types
pub use crate::config::scenario::Scenario;
pub use crate::config::site::SiteClass;
pub use crate::core::pipeline::{evaluate, evaluate_with_defaults, EstimateReport};
pub use crate::data::cost_index::{EscalationIndex, IndexDate, PpiTable, UnitIndex};
pub use crate::data::foundation::{FoundationModel, ScalingFoundation};
pub use crate::error::ModelError;
