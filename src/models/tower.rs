use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::error::ModelError;

const STEEL_RATE: f64 = 1.5; // $/kg

/// Mass and cost of the tower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerEstimate {
    pub mass: f64,
    pub cost: f64,
}

/// Tower mass (kg) from swept area times hub height. The advanced tower
/// trades wall thickness against active damping.
pub fn calc_tower_mass(rotor_diameter: f64, hub_height: f64, advanced: bool) -> f64 {
    let swept_area = PI * (rotor_diameter / 2.0).powi(2);
    if advanced {
        0.269380169 * swept_area * hub_height + 1779.328183
    } else {
        0.397251147546925 * swept_area * hub_height - 1414.381881
    }
}

pub fn calc_tower_cost(
    mass_override: Option<f64>,
    rotor_diameter: f64,
    hub_height: f64,
    advanced: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<f64, ModelError> {
    let mass =
        mass_override.unwrap_or_else(|| calc_tower_mass(rotor_diameter, hub_height, advanced));
    Ok(mass
        * STEEL_RATE
        * index.escalator(CostCategory::Tower, IndexDate::default_reference(), current)?)
}

pub fn compute(
    rotor_diameter: f64,
    hub_height: f64,
    advanced: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<TowerEstimate, ModelError> {
    Ok(TowerEstimate {
        mass: calc_tower_mass(rotor_diameter, hub_height, advanced),
        cost: calc_tower_cost(None, rotor_diameter, hub_height, advanced, index, current)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::UnitIndex;
    use approx::assert_relative_eq;

    const DIAMETER: f64 = 126.0;
    const HUB_HEIGHT: f64 = 90.0;
    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    #[test]
    fn reference_masses() {
        assert_relative_eq!(
            calc_tower_mass(DIAMETER, HUB_HEIGHT, false),
            444384.157764,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            calc_tower_mass(DIAMETER, HUB_HEIGHT, true),
            304079.992866,
            max_relative = 1e-9
        );
    }

    #[test]
    fn advanced_tower_is_lighter_at_scale() {
        assert!(
            calc_tower_mass(DIAMETER, HUB_HEIGHT, true) < calc_tower_mass(DIAMETER, HUB_HEIGHT, false)
        );
    }

    #[test]
    fn cost_in_reference_dollars() {
        let cost = calc_tower_cost(None, DIAMETER, HUB_HEIGHT, false, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(cost, 666576.236646, max_relative = 1e-9);
    }

    #[test]
    fn mass_override_drives_the_cost() {
        let cost =
            calc_tower_cost(Some(200000.0), DIAMETER, HUB_HEIGHT, false, &UnitIndex, CURRENT)
                .unwrap();
        assert_relative_eq!(cost, 300000.0, max_relative = 1e-12);
        let zero =
            calc_tower_cost(Some(0.0), DIAMETER, HUB_HEIGHT, false, &UnitIndex, CURRENT).unwrap();
        assert_eq!(zero, 0.0);
    }
}
