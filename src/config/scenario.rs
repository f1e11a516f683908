use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::site::SiteClass;
use crate::data::cost_index::IndexDate;
use crate::error::ModelError;
use crate::models::drivetrain::DriveTrain;
use crate::models::nacelle::BedplateDesign;

/// Every input the estimation pipeline consumes, with defaults matching
/// the 5 MW offshore reference turbine. Scenario files may override any
/// subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    // Machine configuration
    pub machine_rating: f64, // kW
    pub rotor_diameter: f64, // m
    pub hub_height: f64,     // m
    pub blade_count: u32,
    pub drivetrain: DriveTrain,
    pub advanced_blade: bool,
    pub bedplate_design: BedplateDesign,
    pub advanced_tower: bool,
    pub has_crane: bool,

    // Rotor aerodynamics
    pub max_tip_speed: f64, // m/s
    pub max_power_coefficient: f64,
    pub max_tip_speed_ratio: f64,
    pub thrust_coefficient: f64,
    pub cut_in_wind_speed: f64,  // m/s
    pub cut_out_wind_speed: f64, // m/s

    // Site and wind resource
    pub altitude: f64,            // m
    pub air_density: Option<f64>, // kg/m^3, overrides the barometric value
    pub shear_exponent: f64,
    pub wind_speed_50m: f64, // m/s
    pub weibull_shape: f64,
    pub soiling_losses: f64,
    pub array_losses: f64,
    pub availability: f64,
    pub sea_depth: f64, // m, zero for land

    // Cost year
    pub year: u32,
    pub month: u32,

    // Finance
    pub fixed_charge_rate: f64,
    pub tax_rate: f64,
    pub discount_rate: f64,
    pub construction_time: f64,  // years
    pub project_lifetime: f64,   // years
    pub turbine_count: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            machine_rating: 5000.0,
            rotor_diameter: 126.0,
            hub_height: 90.0,
            blade_count: 3,
            drivetrain: DriveTrain::ThreeStage,
            advanced_blade: true,
            bedplate_design: BedplateDesign::Standard,
            advanced_tower: false,
            has_crane: true,
            max_tip_speed: 80.0,
            max_power_coefficient: 0.488,
            max_tip_speed_ratio: 7.525,
            thrust_coefficient: 0.50,
            cut_in_wind_speed: 3.0,
            cut_out_wind_speed: 25.0,
            altitude: 0.0,
            air_density: None,
            shear_exponent: 0.1,
            wind_speed_50m: 8.02,
            weibull_shape: 2.15,
            soiling_losses: 0.0,
            array_losses: 0.10,
            availability: 0.941,
            sea_depth: 20.0,
            year: 2009,
            month: 12,
            fixed_charge_rate: 0.12,
            tax_rate: 0.40,
            discount_rate: 0.07,
            construction_time: 1.0,
            project_lifetime: 20.0,
            turbine_count: 100,
        }
    }
}

impl Scenario {
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scenario file {}", path.display()))?;
        Ok(scenario)
    }

    pub fn site_class(&self) -> SiteClass {
        SiteClass::from_sea_depth(self.sea_depth)
    }

    pub fn current_date(&self) -> IndexDate {
        IndexDate::new(self.year, self.month)
    }

    /// Rejects physically or financially meaningless inputs before any
    /// stage runs.
    pub fn validate(&self) -> Result<(), ModelError> {
        let fail = |message: String| Err(ModelError::InvalidInput(message));
        if self.machine_rating <= 0.0 {
            return fail(format!("machine_rating {} must be positive", self.machine_rating));
        }
        if self.rotor_diameter <= 0.0 {
            return fail(format!("rotor_diameter {} must be positive", self.rotor_diameter));
        }
        if self.hub_height <= 0.0 {
            return fail(format!("hub_height {} must be positive", self.hub_height));
        }
        if self.blade_count == 0 {
            return fail("blade_count must be at least 1".to_string());
        }
        if self.max_tip_speed <= 0.0 {
            return fail(format!("max_tip_speed {} must be positive", self.max_tip_speed));
        }
        if self.max_power_coefficient <= 0.0 {
            return fail(format!(
                "max_power_coefficient {} must be positive",
                self.max_power_coefficient
            ));
        }
        if self.cut_in_wind_speed < 0.0 || self.cut_in_wind_speed >= self.cut_out_wind_speed {
            return fail(format!(
                "cut-in wind speed {} must be non-negative and below cut-out {}",
                self.cut_in_wind_speed, self.cut_out_wind_speed
            ));
        }
        if let Some(density) = self.air_density {
            if density <= 0.0 {
                return fail(format!("air_density override {} must be positive", density));
            }
        }
        if self.weibull_shape <= 0.0 {
            return fail(format!("weibull_shape {} must be positive", self.weibull_shape));
        }
        for (name, fraction) in [
            ("soiling_losses", self.soiling_losses),
            ("array_losses", self.array_losses),
            ("availability", self.availability),
        ] {
            if !(0.0..=1.0).contains(&fraction) {
                return fail(format!("{} {} must lie in [0, 1]", name, fraction));
            }
        }
        if self.sea_depth < 0.0 {
            return fail(format!("sea_depth {} must be non-negative", self.sea_depth));
        }
        if self.month == 0 || self.month > 12 {
            return fail(format!("month {} is not in 1..=12", self.month));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return fail(format!("tax_rate {} must lie in [0, 1]", self.tax_rate));
        }
        if self.discount_rate <= 0.0 {
            return fail(format!("discount_rate {} must be positive", self.discount_rate));
        }
        if self.construction_time < 0.0 {
            return fail(format!(
                "construction_time {} must be non-negative",
                self.construction_time
            ));
        }
        if self.project_lifetime <= 0.0 {
            return fail(format!(
                "project_lifetime {} must be positive",
                self.project_lifetime
            ));
        }
        if self.turbine_count == 0 {
            return fail("turbine_count must be at least 1".to_string());
        }
        Ok(())
    }
}
