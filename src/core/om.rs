use serde::{Deserialize, Serialize};

use crate::config::constants::{
    LAND_LEASE_RATE, LAND_LRC_RATE, LAND_OM_RATE, OFFSHORE_LRC_RATE, OFFSHORE_OM_RATE,
};
use crate::config::site::SiteClass;
use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::error::ModelError;

/// Annual operating charges for one turbine. All three streams are
/// expressed in dollars per year and already escalated to the
/// scenario's cost date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OmResult {
    pub cost: f64,
    pub levelized_replacement: f64,
    pub land_lease: f64,
}

/// Levelizes operating, overhaul and lease charges from net production.
/// Offshore sites pay the marine rates regardless of depth band.
pub fn compute(
    aep: f64,
    sea_depth: f64,
    machine_rating: f64,
    current: IndexDate,
    index: &dyn EscalationIndex,
) -> Result<OmResult, ModelError> {
    if aep < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "annual energy production {} must be non-negative",
            aep
        )));
    }
    if machine_rating <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "machine rating {} must be positive",
            machine_rating
        )));
    }

    let reference = IndexDate::default_reference();
    let offshore = SiteClass::from_sea_depth(sea_depth).is_offshore();

    let (cost, levelized_replacement) = if offshore {
        let offshore_reference = IndexDate::offshore_reference();
        (
            aep * OFFSHORE_OM_RATE
                * index.escalator(CostCategory::OffshoreOperations, offshore_reference, current)?,
            machine_rating
                * OFFSHORE_LRC_RATE
                * index.escalator(
                    CostCategory::OffshoreReplacement,
                    offshore_reference,
                    current,
                )?,
        )
    } else {
        (
            aep * LAND_OM_RATE
                * index.escalator(CostCategory::LandOperations, reference, current)?,
            machine_rating
                * LAND_LRC_RATE
                * index.escalator(CostCategory::LandReplacement, reference, current)?,
        )
    };
    let land_lease =
        aep * LAND_LEASE_RATE * index.escalator(CostCategory::LandLease, reference, current)?;

    Ok(OmResult {
        cost,
        levelized_replacement,
        land_lease,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::{PpiTable, UnitIndex};
    use approx::assert_relative_eq;

    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    #[test]
    fn land_rates_in_reference_dollars() {
        let om = compute(1.0e6, 0.0, 5000.0, CURRENT, &UnitIndex).unwrap();
        assert_relative_eq!(om.cost, 7000.0, max_relative = 1e-12);
        assert_relative_eq!(om.levelized_replacement, 53500.0, max_relative = 1e-12);
        assert_relative_eq!(om.land_lease, 1080.0, max_relative = 1e-12);
    }

    #[test]
    fn offshore_rates_in_reference_dollars() {
        let om = compute(1.0e6, 20.0, 5000.0, CURRENT, &UnitIndex).unwrap();
        assert_relative_eq!(om.cost, 20000.0, max_relative = 1e-12);
        assert_relative_eq!(om.levelized_replacement, 85000.0, max_relative = 1e-12);
        assert_relative_eq!(om.land_lease, 1080.0, max_relative = 1e-12);
    }

    #[test]
    fn deep_water_still_pays_marine_rates() {
        let shallow = compute(1.0e6, 20.0, 5000.0, CURRENT, &UnitIndex).unwrap();
        let deep = compute(1.0e6, 200.0, 5000.0, CURRENT, &UnitIndex).unwrap();
        assert_eq!(shallow, deep);
    }

    #[test]
    fn escalated_offshore_charges() {
        let table = PpiTable::new();
        let om = compute(16861251.9184, 20.0, 5000.0, CURRENT, &table).unwrap();
        assert_relative_eq!(om.cost, 408747.04, epsilon = 0.01);
        assert_relative_eq!(om.levelized_replacement, 103001.59, epsilon = 0.01);
        assert_relative_eq!(om.land_lease, 22722.39, epsilon = 0.01);
    }

    #[test]
    fn negative_production_is_rejected() {
        let result = compute(-1.0, 0.0, 5000.0, CURRENT, &UnitIndex);
        assert!(matches!(result, Err(ModelError::InvalidInput(_))));
    }
}
