use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::const_funcs::{calc_hub_wind_speed, ln_gamma, weibull_pdf};
use crate::config::constants::HOURS_PER_YEAR;
use crate::core::power_curve::PowerCurve;
use crate::error::ModelError;

/// Net annual energy production for one turbine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AepResult {
    pub aep: f64, // kWh/yr
    pub capacity_factor: f64,
    pub hub_wind_speed: f64, // m/s
    pub weibull_scale: f64,  // m/s
}

/// Integrates the power curve against the site Weibull distribution and
/// applies soiling, array and availability losses.
#[allow(clippy::too_many_arguments)]
pub fn compute(
    curve: &PowerCurve,
    rated_power: f64,
    hub_height: f64,
    shear_exponent: f64,
    wind_speed_50m: f64,
    weibull_shape: f64,
    soiling_losses: f64,
    array_losses: f64,
    availability: f64,
) -> Result<AepResult, ModelError> {
    if rated_power <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "rated power {} must be positive",
            rated_power
        )));
    }
    if weibull_shape <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "Weibull shape {} must be positive",
            weibull_shape
        )));
    }
    for (name, fraction) in [
        ("soiling losses", soiling_losses),
        ("array losses", array_losses),
        ("availability", availability),
    ] {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ModelError::InvalidInput(format!(
                "{} {} must lie in [0, 1]",
                name, fraction
            )));
        }
    }

    let hub_wind_speed = calc_hub_wind_speed(wind_speed_50m, hub_height, shear_exponent);
    let weibull_scale = hub_wind_speed / ln_gamma(1.0 + 1.0 / weibull_shape).exp();

    let energy: f64 = curve
        .points()
        .iter()
        .map(|point| point.power * weibull_pdf(point.wind_speed, weibull_shape, weibull_scale))
        .sum();
    let aep = energy
        * (1.0 - soiling_losses)
        * (1.0 - array_losses)
        * (availability * HOURS_PER_YEAR)
        * curve.bin_width();
    let capacity_factor = aep / (HOURS_PER_YEAR * rated_power);
    debug!(aep, capacity_factor, hub_wind_speed, "computed annual energy");

    Ok(AepResult {
        aep,
        capacity_factor,
        hub_wind_speed,
        weibull_scale,
    })
}
