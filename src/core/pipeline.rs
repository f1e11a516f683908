use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::scenario::Scenario;
use crate::config::site::SiteClass;
use crate::core::aep::{self, AepResult};
use crate::core::bos::{self, BosResult};
use crate::core::finance::{self, FinanceResult};
use crate::core::om::{self, OmResult};
use crate::core::power_curve::{self, PowerCurve};
use crate::core::turbine::{self, TurbineResult};
use crate::data::cost_index::{EscalationIndex, PpiTable};
use crate::data::foundation::{FoundationModel, ScalingFoundation};
use crate::error::ModelError;

/// Output of one complete estimation run, stage by stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub scenario: Scenario,
    pub site_class: SiteClass,
    pub power_curve: PowerCurve,
    pub aep: AepResult,
    pub turbine: TurbineResult,
    pub bos: BosResult,
    pub om: OmResult,
    pub finance: FinanceResult,
}

/// Runs the whole chain: power curve, energy production, turbine
/// capital, balance of station, operating charges, cost of energy.
pub fn evaluate(
    scenario: &Scenario,
    index: &dyn EscalationIndex,
    foundation: &dyn FoundationModel,
) -> Result<EstimateReport, ModelError> {
    scenario.validate()?;
    let site_class = scenario.site_class();
    let current = scenario.current_date();
    debug!(
        site = %site_class,
        year = scenario.year,
        month = scenario.month,
        "starting estimate"
    );

    let power_curve = power_curve::synthesize(
        scenario.drivetrain,
        scenario.machine_rating,
        scenario.rotor_diameter,
        scenario.max_power_coefficient,
        scenario.max_tip_speed,
        scenario.max_tip_speed_ratio,
        scenario.cut_in_wind_speed,
        scenario.cut_out_wind_speed,
        scenario.hub_height,
        scenario.altitude,
        scenario.air_density,
    )?;
    let aep = aep::compute(
        &power_curve,
        scenario.machine_rating,
        scenario.hub_height,
        scenario.shear_exponent,
        scenario.wind_speed_50m,
        scenario.weibull_shape,
        scenario.soiling_losses,
        scenario.array_losses,
        scenario.availability,
    )?;
    debug!(
        aep = aep.aep,
        capacity_factor = aep.capacity_factor,
        "energy production settled"
    );

    let turbine = turbine::compute(scenario, &power_curve, index)?;
    let bos = bos::compute(
        scenario.sea_depth,
        scenario.machine_rating,
        scenario.hub_height,
        scenario.rotor_diameter,
        turbine.total_cost,
        scenario.turbine_count,
        current,
        index,
        foundation,
    )?;
    let om = om::compute(
        aep.aep,
        scenario.sea_depth,
        scenario.machine_rating,
        current,
        index,
    )?;
    let finance = finance::compute(scenario, turbine.total_cost, bos.cost, &om, aep.aep)?;
    info!(
        coe = finance.coe,
        lcoe = finance.lcoe,
        turbine_capital = turbine.total_cost,
        station_capital = bos.cost,
        "estimate complete"
    );

    Ok(EstimateReport {
        scenario: scenario.clone(),
        site_class,
        power_curve,
        aep,
        turbine,
        bos,
        om,
        finance,
    })
}

/// The chain with the bundled index table and the standard foundation
/// scaling model.
pub fn evaluate_with_defaults(scenario: &Scenario) -> Result<EstimateReport, ModelError> {
    evaluate(scenario, &PpiTable::new(), &ScalingFoundation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_evaluates() {
        let report = evaluate_with_defaults(&Scenario::default()).unwrap();
        assert_eq!(report.site_class, SiteClass::ShallowOffshore);
        assert!(report.finance.coe > 0.0);
        assert!(report.bos.surety_bond > 0.0);
    }

    #[test]
    fn invalid_scenario_fails_before_any_stage() {
        let scenario = Scenario {
            machine_rating: 0.0,
            ..Scenario::default()
        };
        assert!(matches!(
            evaluate_with_defaults(&scenario),
            Err(ModelError::InvalidInput(_))
        ));
    }

    #[test]
    fn deep_water_fails_at_the_station_stage() {
        let scenario = Scenario {
            sea_depth: 75.0,
            ..Scenario::default()
        };
        assert_eq!(
            evaluate_with_defaults(&scenario),
            Err(ModelError::UnsupportedSiteClass(SiteClass::DeepOffshore))
        );
    }
}
