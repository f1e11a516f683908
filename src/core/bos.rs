use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::{
    DEFAULT_REFERENCE_YEAR, LAND_PERMITS_REFERENCE_MONTH, SURETY_BOND_RATE,
};
use crate::config::site::SiteClass;
use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::data::foundation::FoundationModel;
use crate::error::ModelError;

/// Balance-of-station costs for one turbine, with the plant-level total
/// alongside. Categories that do not apply to the site class stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BosResult {
    pub foundation: f64,
    pub transportation: f64,
    pub roads_civil: f64,
    pub engineering_permits: f64,
    pub port_staging: f64,
    pub installation: f64,
    pub electrical: f64,
    pub personnel_access: f64,
    pub scour_protection: f64,
    pub surety_bond: f64,
    pub cost: f64,
    pub plant_cost: f64,
}

fn transport_factor(machine_rating: f64) -> f64 {
    1.581e-5 * machine_rating.powi(2) - 0.0375 * machine_rating + 54.7
}

/// Prices the balance of station for the site the sea depth implies.
/// Offshore sites add a surety bond of 3% on turbine plus station
/// capital; deep water is rejected.
#[allow(clippy::too_many_arguments)]
pub fn compute(
    sea_depth: f64,
    machine_rating: f64,
    hub_height: f64,
    rotor_diameter: f64,
    turbine_capital_cost: f64,
    turbine_count: u32,
    current: IndexDate,
    index: &dyn EscalationIndex,
    foundation_model: &dyn FoundationModel,
) -> Result<BosResult, ModelError> {
    if machine_rating <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "machine rating {} must be positive",
            machine_rating
        )));
    }
    if turbine_count == 0 {
        return Err(ModelError::InvalidInput(
            "turbine count must be at least 1".to_string(),
        ));
    }
    if sea_depth < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "sea depth {} must be non-negative",
            sea_depth
        )));
    }

    let site = SiteClass::from_sea_depth(sea_depth);
    let reference = IndexDate::default_reference();
    let offshore_reference = IndexDate::offshore_reference();
    let foundation = foundation_model.cost(
        machine_rating,
        hub_height,
        rotor_diameter,
        site,
        index,
        current,
    )?;

    let mut result = BosResult {
        foundation,
        transportation: 0.0,
        roads_civil: 0.0,
        engineering_permits: 0.0,
        port_staging: 0.0,
        installation: 0.0,
        electrical: 0.0,
        personnel_access: 0.0,
        scour_protection: 0.0,
        surety_bond: 0.0,
        cost: 0.0,
        plant_cost: 0.0,
    };

    match site {
        SiteClass::Land => {
            result.engineering_permits = (9.94e-4 * machine_rating.powi(2)
                + 20.31 * machine_rating)
                * index.escalator(
                    CostCategory::LandPermits,
                    IndexDate::new(DEFAULT_REFERENCE_YEAR, LAND_PERMITS_REFERENCE_MONTH),
                    current,
                )?;
            result.electrical = (3.49e-6 * machine_rating.powi(2) - 0.0221 * machine_rating
                + 109.7)
                * machine_rating
                * index.escalator(CostCategory::LandElectrical, reference, current)?;
            result.roads_civil = (2.17e-6 * machine_rating.powi(2) - 0.0145 * machine_rating
                + 69.54)
                * machine_rating
                * index.escalator(CostCategory::RoadsCivil, reference, current)?;
            result.installation = 1.965
                * (hub_height * rotor_diameter).powf(1.1736)
                * index.escalator(CostCategory::LandInstallation, reference, current)?;
            result.transportation = transport_factor(machine_rating)
                * machine_rating
                * index.escalator(CostCategory::Transportation, reference, current)?;
        }
        SiteClass::ShallowOffshore => {
            result.port_staging = 20.0
                * machine_rating
                * index.escalator(CostCategory::PortStaging, offshore_reference, current)?;
            result.engineering_permits = 37.0
                * machine_rating
                * index.escalator(CostCategory::OffshorePermits, offshore_reference, current)?;
            result.scour_protection = 55.0
                * machine_rating
                * index.escalator(CostCategory::PortStaging, offshore_reference, current)?;
            result.installation = 100.0
                * machine_rating
                * index.escalator(
                    CostCategory::OffshoreInstallation,
                    offshore_reference,
                    current,
                )?;
            result.electrical = 260.0
                * machine_rating
                * index.escalator(
                    CostCategory::OffshoreElectrical,
                    offshore_reference,
                    current,
                )?;
            result.personnel_access = 60000.0
                * index.escalator(CostCategory::PersonnelAccess, offshore_reference, current)?;
            result.transportation = transport_factor(machine_rating)
                * machine_rating
                * index.escalator(CostCategory::Transportation, reference, current)?;
        }
        SiteClass::TransitionalOffshore => {
            result.port_staging = 20.0
                * machine_rating
                * index.escalator(CostCategory::PortStaging, offshore_reference, current)?;
            result.engineering_permits = 37.0
                * machine_rating
                * index.escalator(CostCategory::OffshorePermits, offshore_reference, current)?;
            result.scour_protection = 55.0
                * machine_rating
                * index.escalator(CostCategory::PortStaging, offshore_reference, current)?;
            result.installation = (100.0 + 330.0)
                * machine_rating
                * index.escalator(
                    CostCategory::OffshoreInstallation,
                    offshore_reference,
                    current,
                )?;
            result.electrical = 290.0
                * machine_rating
                * index.escalator(
                    CostCategory::OffshoreElectrical,
                    offshore_reference,
                    current,
                )?;
            result.personnel_access = 60000.0
                * index.escalator(CostCategory::PersonnelAccess, offshore_reference, current)?;
            // Turbine transport by sea plus the support structure haul
            result.transportation = 77.0
                * machine_rating
                * index.escalator(CostCategory::Transportation, reference, current)?
                + 25.0
                    * machine_rating
                    * index.escalator(
                        CostCategory::OffshoreInstallation,
                        offshore_reference,
                        current,
                    )?;
        }
        SiteClass::DeepOffshore => {
            return Err(ModelError::UnsupportedSiteClass(site));
        }
    }

    let subtotal = result.foundation
        + result.transportation
        + result.roads_civil
        + result.engineering_permits
        + result.port_staging
        + result.installation
        + result.electrical
        + result.personnel_access
        + result.scour_protection;
    if site.is_offshore() {
        result.surety_bond = SURETY_BOND_RATE * (turbine_capital_cost + subtotal);
    }
    result.cost = subtotal + result.surety_bond;
    result.plant_cost = result.cost * turbine_count as f64;
    debug!(site = %site, cost = result.cost, "priced balance of station");

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::UnitIndex;
    use crate::data::foundation::ScalingFoundation;
    use approx::assert_relative_eq;

    const RATING: f64 = 5000.0;
    const HUB_HEIGHT: f64 = 90.0;
    const DIAMETER: f64 = 126.0;
    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    fn unit_bos(sea_depth: f64, turbine_capital_cost: f64, count: u32) -> BosResult {
        compute(
            sea_depth,
            RATING,
            HUB_HEIGHT,
            DIAMETER,
            turbine_capital_cost,
            count,
            CURRENT,
            &UnitIndex,
            &ScalingFoundation,
        )
        .unwrap()
    }

    #[test]
    fn land_breakdown_in_reference_dollars() {
        let bos = unit_bos(0.0, 4_000_000.0, 1);
        assert_relative_eq!(bos.engineering_permits, 126400.0, max_relative = 1e-9);
        assert_relative_eq!(bos.electrical, 432250.0, max_relative = 1e-9);
        assert_relative_eq!(bos.roads_civil, 256450.0, max_relative = 1e-9);
        assert_relative_eq!(bos.installation, 112682.4901, max_relative = 1e-7);
        assert_relative_eq!(bos.transportation, 1312250.0, max_relative = 1e-9);
        assert_relative_eq!(bos.foundation, 83982.1194, max_relative = 1e-7);
        assert_relative_eq!(bos.cost, 2324014.6094, max_relative = 1e-7);
    }

    #[test]
    fn land_posts_no_surety_bond() {
        let bos = unit_bos(0.0, 4_000_000.0, 1);
        assert_eq!(bos.surety_bond, 0.0);
        assert_eq!(bos.port_staging, 0.0);
        assert_eq!(bos.scour_protection, 0.0);
        assert_eq!(bos.personnel_access, 0.0);
    }

    #[test]
    fn shallow_breakdown_in_reference_dollars() {
        let bos = unit_bos(20.0, 1_000_000.0, 1);
        let subtotal = bos.cost - bos.surety_bond;
        assert_relative_eq!(subtotal, 5232250.0, max_relative = 1e-9);
        assert_relative_eq!(bos.surety_bond, 186967.5, max_relative = 1e-9);
        assert_relative_eq!(bos.foundation, 1_500_000.0, max_relative = 1e-9);
        assert_relative_eq!(bos.personnel_access, 60000.0, max_relative = 1e-9);
        assert_eq!(bos.roads_civil, 0.0);
    }

    #[test]
    fn transitional_breakdown_in_reference_dollars() {
        let bos = unit_bos(45.0, 1_000_000.0, 1);
        let subtotal = bos.cost - bos.surety_bond;
        assert_relative_eq!(subtotal, 6980000.0, max_relative = 1e-9);
        assert_relative_eq!(bos.foundation, 2_250_000.0, max_relative = 1e-9);
        assert_relative_eq!(bos.installation, 430.0 * RATING, max_relative = 1e-9);
        assert_relative_eq!(bos.transportation, (77.0 + 25.0) * RATING, max_relative = 1e-9);
    }

    #[test]
    fn surety_bond_covers_turbine_and_station_capital() {
        let cheap = unit_bos(20.0, 1_000_000.0, 1);
        let dear = unit_bos(20.0, 2_000_000.0, 1);
        assert_relative_eq!(
            dear.surety_bond - cheap.surety_bond,
            0.03 * 1_000_000.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn plant_cost_scales_with_the_fleet() {
        let single = unit_bos(20.0, 1_000_000.0, 1);
        let fleet = unit_bos(20.0, 1_000_000.0, 80);
        assert_relative_eq!(single.cost, fleet.cost, max_relative = 1e-12);
        assert_relative_eq!(fleet.plant_cost, fleet.cost * 80.0, max_relative = 1e-12);
    }

    #[test]
    fn deep_water_is_rejected() {
        let result = compute(
            80.0,
            RATING,
            HUB_HEIGHT,
            DIAMETER,
            1_000_000.0,
            1,
            CURRENT,
            &UnitIndex,
            &ScalingFoundation,
        );
        assert_eq!(
            result,
            Err(ModelError::UnsupportedSiteClass(SiteClass::DeepOffshore))
        );
    }
}
