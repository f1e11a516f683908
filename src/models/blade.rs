use serde::{Deserialize, Serialize};

use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::error::ModelError;

// Material cost intercepts in reference-year dollars. The advanced blade
// uses the later carbon-hybrid material index with its 2003 reference.
const MATERIAL_SLOPE: f64 = 0.4019376;
const BASELINE_MATERIAL_INTERCEPT: f64 = -955.24267;
const ADVANCED_MATERIAL_INTERCEPT: f64 = -21051.045983;
const LABOR_SLOPE: f64 = 2.7445;
const LABOR_EXPONENT: f64 = 2.5025;
const OVERHEAD_MARKUP: f64 = 0.28;

/// Mass and cost of a single blade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BladeEstimate {
    pub mass: f64,
    pub cost: f64,
}

/// Mass (kg) of one blade from the rotor diameter scaling relation.
pub fn calc_blade_mass(rotor_diameter: f64, advanced: bool) -> f64 {
    let radius = rotor_diameter / 2.0;
    if advanced {
        0.4948 * radius.powf(2.53)
    } else {
        0.1452 * radius.powf(2.9158)
    }
}

/// Cost ($) of one blade: material plus labor, marked up for overhead.
pub fn calc_blade_cost(
    rotor_diameter: f64,
    advanced: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<f64, ModelError> {
    let radius = rotor_diameter / 2.0;
    let (intercept, material_category, material_reference) = if advanced {
        (
            ADVANCED_MATERIAL_INTERCEPT,
            CostCategory::AdvancedBladeMaterial,
            IndexDate::offshore_reference(),
        )
    } else {
        (
            BASELINE_MATERIAL_INTERCEPT,
            CostCategory::BladeMaterial,
            IndexDate::default_reference(),
        )
    };
    let material = (MATERIAL_SLOPE * radius.powi(3) + intercept)
        * index.escalator(material_category, material_reference, current)?;
    let labor = LABOR_SLOPE
        * radius.powf(LABOR_EXPONENT)
        * index.escalator(
            CostCategory::BladeLabor,
            IndexDate::default_reference(),
            current,
        )?;
    Ok((material + labor) / (1.0 - OVERHEAD_MARKUP))
}

pub fn compute(
    rotor_diameter: f64,
    advanced: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<BladeEstimate, ModelError> {
    Ok(BladeEstimate {
        mass: calc_blade_mass(rotor_diameter, advanced),
        cost: calc_blade_cost(rotor_diameter, advanced, index, current)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::UnitIndex;
    use approx::assert_relative_eq;

    const REFERENCE_DIAMETER: f64 = 126.0;
    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    #[test]
    fn advanced_blade_mass_for_reference_rotor() {
        assert_relative_eq!(
            calc_blade_mass(REFERENCE_DIAMETER, true),
            17650.673483,
            max_relative = 1e-9
        );
    }

    #[test]
    fn baseline_blade_mass_for_reference_rotor() {
        assert_relative_eq!(
            calc_blade_mass(REFERENCE_DIAMETER, false),
            25614.376596,
            max_relative = 1e-9
        );
    }

    #[test]
    fn advanced_blade_is_lighter() {
        assert!(calc_blade_mass(REFERENCE_DIAMETER, true) < calc_blade_mass(REFERENCE_DIAMETER, false));
    }

    #[test]
    fn blade_cost_in_reference_dollars() {
        let advanced = calc_blade_cost(REFERENCE_DIAMETER, true, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(advanced, 231683.767255, max_relative = 1e-9);
        let baseline = calc_blade_cost(REFERENCE_DIAMETER, false, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(baseline, 259594.605189, max_relative = 1e-9);
    }

    #[test]
    fn compute_assembles_mass_and_cost() {
        let estimate = compute(REFERENCE_DIAMETER, true, &UnitIndex, CURRENT).unwrap();
        assert_relative_eq!(estimate.mass, 17650.673483, max_relative = 1e-9);
        assert_relative_eq!(estimate.cost, 231683.767255, max_relative = 1e-9);
    }
}
