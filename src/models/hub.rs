use serde::{Deserialize, Serialize};

use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::error::ModelError;

/// Masses and costs of the hub system: hub casting, pitch mechanism with
/// its bearings, and nose cone. Pitch bearing mass is folded into the
/// pitch system total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HubSystem {
    pub hub_mass: f64,
    pub pitch_bearing_mass: f64,
    pub pitch_system_mass: f64,
    pub spinner_mass: f64,
    pub hub_cost: f64,
    pub pitch_system_cost: f64,
    pub spinner_cost: f64,
}

impl HubSystem {
    pub fn total_mass(&self) -> f64 {
        self.hub_mass + self.pitch_system_mass + self.spinner_mass
    }

    pub fn total_cost(&self) -> f64 {
        self.hub_cost + self.pitch_system_cost + self.spinner_cost
    }
}

pub fn calc_pitch_bearing_mass(blade_mass: f64, blade_count: u32) -> f64 {
    0.1295 * blade_mass * blade_count as f64 + 491.31
}

/// Pitch system mass includes the bearing plus actuation hardware.
pub fn calc_pitch_system_mass(blade_mass: f64, blade_count: u32) -> f64 {
    calc_pitch_bearing_mass(blade_mass, blade_count) * 1.328 + 555.0
}

pub fn calc_hub_mass(blade_mass: f64) -> f64 {
    0.95402537 * blade_mass + 5680.272238
}

pub fn calc_spinner_mass(rotor_diameter: f64) -> f64 {
    18.5 * rotor_diameter - 520.5
}

pub fn calc_pitch_system_cost(
    rotor_diameter: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<f64, ModelError> {
    let bearing_cost = 0.2106 * rotor_diameter.powf(2.6576);
    Ok(2.28
        * bearing_cost
        * index.escalator(
            CostCategory::PitchSystem,
            IndexDate::default_reference(),
            current,
        )?)
}

/// Hub casting cost at 4.25 $/kg. `hub_mass` overrides the internal mass
/// relation when given; `Some(0.0)` prices a zero mass.
pub fn calc_hub_cost(
    hub_mass: Option<f64>,
    blade_mass: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<f64, ModelError> {
    let mass = hub_mass.unwrap_or_else(|| calc_hub_mass(blade_mass));
    Ok(mass
        * 4.25
        * index.escalator(CostCategory::Hub, IndexDate::default_reference(), current)?)
}

/// Nose cone cost at 5.57 $/kg, with the same override contract as the
/// hub casting.
pub fn calc_spinner_cost(
    spinner_mass: Option<f64>,
    rotor_diameter: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<f64, ModelError> {
    let mass = spinner_mass.unwrap_or_else(|| calc_spinner_mass(rotor_diameter));
    Ok(mass
        * 5.57
        * index.escalator(
            CostCategory::NacelleCover,
            IndexDate::default_reference(),
            current,
        )?)
}

pub fn compute(
    blade_mass: f64,
    rotor_diameter: f64,
    blade_count: u32,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<HubSystem, ModelError> {
    Ok(HubSystem {
        hub_mass: calc_hub_mass(blade_mass),
        pitch_bearing_mass: calc_pitch_bearing_mass(blade_mass, blade_count),
        pitch_system_mass: calc_pitch_system_mass(blade_mass, blade_count),
        spinner_mass: calc_spinner_mass(rotor_diameter),
        hub_cost: calc_hub_cost(None, blade_mass, index, current)?,
        pitch_system_cost: calc_pitch_system_cost(rotor_diameter, index, current)?,
        spinner_cost: calc_spinner_cost(None, rotor_diameter, index, current)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::UnitIndex;
    use approx::assert_relative_eq;

    const BLADE_MASS: f64 = 17650.673483;
    const DIAMETER: f64 = 126.0;
    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    #[test]
    fn reference_masses() {
        assert_relative_eq!(
            calc_pitch_bearing_mass(BLADE_MASS, 3),
            7348.596648,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            calc_pitch_system_mass(BLADE_MASS, 3),
            10313.936349,
            max_relative = 1e-9
        );
        assert_relative_eq!(calc_hub_mass(BLADE_MASS), 22519.462538, max_relative = 1e-9);
        assert_relative_eq!(calc_spinner_mass(DIAMETER), 1810.5, max_relative = 1e-12);
    }

    #[test]
    fn reference_costs_in_reference_dollars() {
        let pitch = calc_pitch_system_cost(DIAMETER, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(pitch, 183374.091224, max_relative = 1e-8);
        let hub = calc_hub_cost(None, BLADE_MASS, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(hub, 95707.715788, max_relative = 1e-9);
        let spinner = calc_spinner_cost(None, DIAMETER, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(spinner, 10084.485, max_relative = 1e-9);
    }

    #[test]
    fn mass_overrides_replace_the_relation() {
        let overridden = calc_hub_cost(Some(10000.0), BLADE_MASS, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(overridden, 42500.0, max_relative = 1e-12);
        // A zero override still prices a zero mass rather than falling
        // back to the relation.
        let zero = calc_hub_cost(Some(0.0), BLADE_MASS, &UnitIndex, CURRENT).unwrap();
        assert_eq!(zero, 0.0);
        let zero_spinner = calc_spinner_cost(Some(0.0), DIAMETER, &UnitIndex, CURRENT).unwrap();
        assert_eq!(zero_spinner, 0.0);
    }

    #[test]
    fn totals_fold_the_pitch_bearing_into_the_pitch_system() {
        let hub = compute(BLADE_MASS, DIAMETER, 3, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(
            hub.total_mass(),
            hub.hub_mass + hub.pitch_system_mass + hub.spinner_mass,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            hub.total_cost(),
            95707.715788 + 183374.091224 + 10084.485,
            max_relative = 1e-8
        );
    }
}
