use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::const_funcs::calc_air_density;
use crate::config::constants::POWER_CURVE_BIN_WIDTH;
use crate::error::ModelError;
use crate::models::drivetrain::DriveTrain;

/// One sampled point of a power curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerPoint {
    pub wind_speed: f64, // m/s
    pub power: f64,      // kW
}

/// Discretized turbine power curve. Either synthesized from the rotor
/// and drivetrain description or built from measured points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurve {
    points: Vec<PowerPoint>,
    bin_width: f64,
    rated_wind_speed: f64,
    air_density: f64,
}

impl PowerCurve {
    /// Wraps an externally supplied curve. Points must be strictly
    /// increasing in wind speed with non-negative power.
    pub fn from_points(
        points: Vec<PowerPoint>,
        bin_width: f64,
        rated_wind_speed: f64,
        air_density: f64,
    ) -> Result<Self, ModelError> {
        if points.is_empty() {
            return Err(ModelError::InvalidInput(
                "power curve needs at least one point".to_string(),
            ));
        }
        if bin_width <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "bin width {} must be positive",
                bin_width
            )));
        }
        for pair in points.windows(2) {
            if pair[1].wind_speed <= pair[0].wind_speed {
                return Err(ModelError::InvalidInput(format!(
                    "wind speeds must increase: {} then {}",
                    pair[0].wind_speed, pair[1].wind_speed
                )));
            }
        }
        if let Some(point) = points.iter().find(|point| point.power < 0.0) {
            return Err(ModelError::InvalidInput(format!(
                "negative power {} at {} m/s",
                point.power, point.wind_speed
            )));
        }
        Ok(PowerCurve {
            points,
            bin_width,
            rated_wind_speed,
            air_density,
        })
    }

    pub fn points(&self) -> &[PowerPoint] {
        &self.points
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Lowest sampled wind speed at which the turbine produces rated
    /// power.
    pub fn rated_wind_speed(&self) -> f64 {
        self.rated_wind_speed
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }
}

/// Synthesizes the power curve on 0.25 m/s bins from zero to cut-out.
/// Below rating the aerodynamic power is shaved by the drivetrain loss
/// curve; at and above rating the output clips to the nameplate value.
/// `max_tip_speed` and `max_tip_speed_ratio` are accepted for interface
/// compatibility; the fixed-Cp model does not consume them.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    drivetrain: DriveTrain,
    machine_rating: f64,
    rotor_diameter: f64,
    max_power_coefficient: f64,
    _max_tip_speed: f64,
    _max_tip_speed_ratio: f64,
    cut_in_wind_speed: f64,
    cut_out_wind_speed: f64,
    hub_height: f64,
    altitude: f64,
    air_density: Option<f64>,
) -> Result<PowerCurve, ModelError> {
    if machine_rating <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "machine rating {} must be positive",
            machine_rating
        )));
    }
    if rotor_diameter <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "rotor diameter {} must be positive",
            rotor_diameter
        )));
    }
    if max_power_coefficient <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "power coefficient {} must be positive",
            max_power_coefficient
        )));
    }
    if cut_in_wind_speed < 0.0 || cut_in_wind_speed >= cut_out_wind_speed {
        return Err(ModelError::InvalidInput(format!(
            "cut-in wind speed {} must be non-negative and below cut-out {}",
            cut_in_wind_speed, cut_out_wind_speed
        )));
    }
    let density = match air_density {
        Some(value) if value <= 0.0 => {
            return Err(ModelError::InvalidInput(format!(
                "air density override {} must be positive",
                value
            )))
        }
        Some(value) => value,
        None => calc_air_density(altitude + hub_height),
    };

    let rated_hub_power = machine_rating / drivetrain.max_efficiency();
    let swept_area = PI * (rotor_diameter / 2.0).powi(2);
    let bin_count = (cut_out_wind_speed / POWER_CURVE_BIN_WIDTH).round() as usize;

    let mut points = Vec::with_capacity(bin_count + 1);
    let mut rated_wind_speed = None;
    for step in 0..=bin_count {
        let wind_speed = step as f64 * POWER_CURVE_BIN_WIDTH;
        let power = if wind_speed < cut_in_wind_speed || wind_speed > cut_out_wind_speed {
            0.0
        } else {
            let aero_power =
                0.5 * density * swept_area * max_power_coefficient * wind_speed.powi(3) / 1000.0;
            if aero_power >= rated_hub_power {
                if rated_wind_speed.is_none() {
                    rated_wind_speed = Some(wind_speed);
                }
                machine_rating
            } else {
                let efficiency = drivetrain.efficiency(aero_power / rated_hub_power);
                (aero_power * efficiency).min(machine_rating)
            }
        };
        points.push(PowerPoint { wind_speed, power });
    }

    let rated_wind_speed = rated_wind_speed.ok_or_else(|| {
        ModelError::InvalidInput(format!(
            "rotor never reaches rated hub power {:.1} kW below cut-out",
            rated_hub_power
        ))
    })?;
    debug!(
        rated_wind_speed,
        air_density = density,
        bins = points.len(),
        "synthesized power curve"
    );

    Ok(PowerCurve {
        points,
        bin_width: POWER_CURVE_BIN_WIDTH,
        rated_wind_speed,
        air_density: density,
    })
}
