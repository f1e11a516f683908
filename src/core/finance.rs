use serde::{Deserialize, Serialize};

use crate::config::constants::{HOURS_PER_YEAR, MARINIZATION_RATE, OFFSHORE_WARRANTY_PREMIUM};
use crate::config::scenario::Scenario;
use crate::config::site::SiteClass;
use crate::core::om::OmResult;
use crate::error::ModelError;

/// Cost-of-energy figures for the plant. Both metrics are in dollars
/// per kWh; the installed capital cost is per turbine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinanceResult {
    pub coe: f64,
    pub lcoe: f64,
    pub installed_capital_cost: f64,
    pub amortization_factor: f64,
}

fn amortization_factor(discount_rate: f64, construction_time: f64, project_lifetime: f64) -> f64 {
    (1.0 + 0.5 * ((1.0 + discount_rate).powf(construction_time) - 1.0))
        * (discount_rate / (1.0 - (1.0 + discount_rate).powf(-project_lifetime)))
}

/// Folds turbine, station and operating costs into COE and LCOE.
/// Offshore projects carry a warranty premium on the turbine price,
/// quoted against the pre-marinization cost.
pub fn compute(
    scenario: &Scenario,
    turbine_capital_cost: f64,
    bos_cost: f64,
    om: &OmResult,
    aep: f64,
) -> Result<FinanceResult, ModelError> {
    if aep <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "annual energy production {} must be positive",
            aep
        )));
    }
    if scenario.discount_rate <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "discount_rate {} must be positive",
            scenario.discount_rate
        )));
    }
    if scenario.project_lifetime <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "project_lifetime {} must be positive",
            scenario.project_lifetime
        )));
    }
    if scenario.turbine_count == 0 {
        return Err(ModelError::InvalidInput(
            "turbine_count must be at least 1".to_string(),
        ));
    }

    let offshore = SiteClass::from_sea_depth(scenario.sea_depth).is_offshore();
    let installed_capital_cost = if offshore {
        turbine_capital_cost * (1.0 + OFFSHORE_WARRANTY_PREMIUM / (1.0 + MARINIZATION_RATE))
            + bos_cost
    } else {
        turbine_capital_cost + bos_cost
    };

    let coe = installed_capital_cost * scenario.fixed_charge_rate / aep
        + (om.cost * (1.0 - scenario.tax_rate) + om.land_lease + om.levelized_replacement) / aep;

    let amortization_factor = amortization_factor(
        scenario.discount_rate,
        scenario.construction_time,
        scenario.project_lifetime,
    );
    let plant_rating = scenario.machine_rating * scenario.turbine_count as f64;
    let capital_per_kw = installed_capital_cost / plant_rating;
    let capacity_factor = aep / (HOURS_PER_YEAR * plant_rating);
    let lcoe =
        capital_per_kw * amortization_factor / (HOURS_PER_YEAR * capacity_factor) + om.cost / aep;

    Ok(FinanceResult {
        coe,
        lcoe,
        installed_capital_cost,
        amortization_factor,
    })
}
