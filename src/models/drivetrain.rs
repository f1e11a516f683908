use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Drivetrain configurations covered by the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveTrain {
    ThreeStage,
    SingleStage,
    MultiPath,
    DirectDrive,
}

impl DriveTrain {
    /// Loss-curve constants (constant, linear, quadratic) fitted per
    /// design.
    fn loss_constants(&self) -> (f64, f64, f64) {
        match self {
            DriveTrain::ThreeStage => (0.01289, 0.08510, 0.0),
            DriveTrain::SingleStage => (0.01331, 0.03655, 0.06107),
            DriveTrain::MultiPath => (0.01547, 0.04463, 0.05790),
            DriveTrain::DirectDrive => (0.01007, 0.02000, 0.06899),
        }
    }

    /// Efficiency at rated output.
    pub fn max_efficiency(&self) -> f64 {
        let (constant, linear, quadratic) = self.loss_constants();
        1.0 - (constant + linear + quadratic)
    }

    /// Efficiency at a part-load fraction of rated hub power. Zero at or
    /// below zero output.
    pub fn efficiency(&self, output_fraction: f64) -> f64 {
        if output_fraction <= 0.0 {
            return 0.0;
        }
        let fraction = output_fraction.min(1.0);
        let (constant, linear, quadratic) = self.loss_constants();
        let efficiency = 1.0 - (constant / fraction + linear + quadratic * fraction);
        efficiency.clamp(0.0, self.max_efficiency())
    }
}

impl FromStr for DriveTrain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ThreeStage" => Ok(DriveTrain::ThreeStage),
            "SingleStage" => Ok(DriveTrain::SingleStage),
            "MultiPath" => Ok(DriveTrain::MultiPath),
            "DirectDrive" => Ok(DriveTrain::DirectDrive),
            _ => Err(format!("Unknown drivetrain design: {}", s)),
        }
    }
}

impl fmt::Display for DriveTrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveTrain::ThreeStage => write!(f, "ThreeStage"),
            DriveTrain::SingleStage => write!(f, "SingleStage"),
            DriveTrain::MultiPath => write!(f, "MultiPath"),
            DriveTrain::DirectDrive => write!(f, "DirectDrive"),
        }
    }
}
