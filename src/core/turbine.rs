use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::{MARINIZATION_RATE, RAD_PER_SEC_TO_RPM, RPM_TO_RAD_PER_SEC};
use crate::config::scenario::Scenario;
use crate::core::power_curve::PowerCurve;
use crate::data::cost_index::EscalationIndex;
use crate::error::ModelError;
use crate::models::blade::{self, BladeEstimate};
use crate::models::hub::{self, HubSystem};
use crate::models::nacelle::{self, Nacelle};
use crate::models::tower::{self, TowerEstimate};

/// Component-level mass and cost rollup for one turbine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineResult {
    pub blade: BladeEstimate,
    pub hub_system: HubSystem,
    pub nacelle: Nacelle,
    pub tower: TowerEstimate,
    pub rotor_mass: f64,
    pub rotor_cost: f64,
    pub rated_rotor_speed: f64, // rpm
    pub rotor_torque: f64,      // kN m
    pub rated_thrust: f64,      // N
    pub marinization_cost: f64,
    pub total_mass: f64,
    pub total_cost: f64,
}

/// Prices one complete turbine from the scenario and its synthesized
/// power curve. Offshore machines carry a marinization surcharge on the
/// whole assembly.
pub fn compute(
    scenario: &Scenario,
    curve: &PowerCurve,
    index: &dyn EscalationIndex,
) -> Result<TurbineResult, ModelError> {
    let current = scenario.current_date();
    let offshore = scenario.site_class().is_offshore();
    let diameter = scenario.rotor_diameter;

    let blade = blade::compute(diameter, scenario.advanced_blade, index, current)?;
    let hub_system = hub::compute(blade.mass, diameter, scenario.blade_count, index, current)?;

    let rated_hub_power = scenario.machine_rating / scenario.drivetrain.max_efficiency();
    let rated_rotor_speed = scenario.max_tip_speed / (diameter / 2.0) * RAD_PER_SEC_TO_RPM;
    let rotor_torque = rated_hub_power / (rated_rotor_speed * RPM_TO_RAD_PER_SEC);
    let rated_wind_speed = curve.rated_wind_speed();
    let rated_thrust = curve.air_density() * scenario.thrust_coefficient * PI
        * diameter.powi(2)
        * rated_wind_speed.powi(2)
        / 8.0;

    let nacelle = nacelle::compute(
        diameter,
        scenario.machine_rating,
        rotor_torque,
        scenario.drivetrain,
        scenario.bedplate_design,
        scenario.has_crane,
        offshore,
        index,
        current,
    )?;
    let tower = tower::compute(
        diameter,
        scenario.hub_height,
        scenario.advanced_tower,
        index,
        current,
    )?;

    let rotor_mass = blade.mass * scenario.blade_count as f64 + hub_system.total_mass();
    let rotor_cost = blade.cost * scenario.blade_count as f64 + hub_system.total_cost();
    let base_cost = rotor_cost + nacelle.total_cost() + tower.cost;
    let marinization_cost = if offshore {
        MARINIZATION_RATE * base_cost
    } else {
        0.0
    };
    let total_mass = rotor_mass + nacelle.total_mass() + tower.mass;
    let total_cost = base_cost + marinization_cost;
    debug!(
        total_mass,
        total_cost, rated_rotor_speed, rotor_torque, "assembled turbine"
    );

    Ok(TurbineResult {
        blade,
        hub_system,
        nacelle,
        tower,
        rotor_mass,
        rotor_cost,
        rated_rotor_speed,
        rotor_torque,
        rated_thrust,
        marinization_cost,
        total_mass,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::power_curve::synthesize;
    use crate::data::cost_index::UnitIndex;
    use approx::assert_relative_eq;

    fn reference_inputs() -> (Scenario, PowerCurve) {
        let scenario = Scenario::default();
        let curve = synthesize(
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
        )
        .unwrap();
        (scenario, curve)
    }

    #[test]
    fn drivetrain_kinematics_for_the_reference_machine() {
        let (scenario, curve) = reference_inputs();
        let turbine = compute(&scenario, &curve, &UnitIndex).unwrap();
        assert_relative_eq!(turbine.rated_rotor_speed, 12.126091, max_relative = 1e-6);
        assert_relative_eq!(turbine.rotor_torque, 4365.250940, max_relative = 1e-8);
        assert_relative_eq!(turbine.rated_thrust, 500373.154464, max_relative = 1e-8);
    }

    #[test]
    fn reference_masses_are_index_independent() {
        let (scenario, curve) = reference_inputs();
        let turbine = compute(&scenario, &curve, &UnitIndex).unwrap();
        assert_relative_eq!(turbine.rotor_mass, 87595.919336, max_relative = 1e-8);
        assert_relative_eq!(turbine.total_mass, 664070.445475, max_relative = 1e-8);
    }

    #[test]
    fn reference_cost_in_reference_dollars() {
        let (scenario, curve) = reference_inputs();
        let turbine = compute(&scenario, &curve, &UnitIndex).unwrap();
        assert_relative_eq!(turbine.rotor_cost, 984217.593777, max_relative = 1e-8);
        assert_relative_eq!(turbine.total_cost, 4390749.777123, max_relative = 1e-8);
        assert_relative_eq!(
            turbine.marinization_cost,
            (turbine.total_cost / 1.1) * 0.1,
            max_relative = 1e-9
        );
    }

    #[test]
    fn land_machines_skip_marinization() {
        let (mut scenario, curve) = reference_inputs();
        scenario.sea_depth = 0.0;
        let turbine = compute(&scenario, &curve, &UnitIndex).unwrap();
        assert_eq!(turbine.marinization_cost, 0.0);
        // Land also swaps in the cheaper control system
        assert_relative_eq!(turbine.nacelle.control_system.cost, 35000.0);
    }
}
