use std::f64::consts::PI;

use crate::config::site::SiteClass;
use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::error::ModelError;

/// Foundation or support-structure capital cost for one turbine.
/// Injected into the balance-of-station stage so alternative structures
/// (jackets, floaters) can be priced without touching the rest of the
/// model.
pub trait FoundationModel {
    fn cost(
        &self,
        machine_rating: f64,
        hub_height: f64,
        rotor_diameter: f64,
        site: SiteClass,
        index: &dyn EscalationIndex,
        current: IndexDate,
    ) -> Result<f64, ModelError>;
}

/// Default foundation model: pad-and-pier power law on land, monopile
/// $/kW rates in shallow and transitional water.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalingFoundation;

impl FoundationModel for ScalingFoundation {
    fn cost(
        &self,
        machine_rating: f64,
        hub_height: f64,
        rotor_diameter: f64,
        site: SiteClass,
        index: &dyn EscalationIndex,
        current: IndexDate,
    ) -> Result<f64, ModelError> {
        match site {
            SiteClass::Land => {
                let swept_area = PI * (rotor_diameter / 2.0).powi(2);
                let base = 303.23 * (hub_height * swept_area).powf(0.4037);
                Ok(base
                    * index.escalator(
                        CostCategory::Foundation,
                        IndexDate::default_reference(),
                        current,
                    )?)
            }
            SiteClass::ShallowOffshore => Ok(300.0
                * machine_rating
                * index.escalator(
                    CostCategory::Monopile,
                    IndexDate::offshore_reference(),
                    current,
                )?),
            SiteClass::TransitionalOffshore => Ok(450.0
                * machine_rating
                * index.escalator(
                    CostCategory::Monopile,
                    IndexDate::offshore_reference(),
                    current,
                )?),
            SiteClass::DeepOffshore => Err(ModelError::UnsupportedSiteClass(site)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::UnitIndex;
    use approx::assert_relative_eq;

    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    #[test]
    fn land_foundation_in_reference_dollars() {
        let cost = ScalingFoundation
            .cost(5000.0, 90.0, 126.0, SiteClass::Land, &UnitIndex, CURRENT)
            .unwrap();
        assert_relative_eq!(cost, 83982.1194, max_relative = 1e-7);
    }

    #[test]
    fn monopile_rates_scale_with_rating() {
        let shallow = ScalingFoundation
            .cost(
                5000.0,
                90.0,
                126.0,
                SiteClass::ShallowOffshore,
                &UnitIndex,
                CURRENT,
            )
            .unwrap();
        assert_relative_eq!(shallow, 1_500_000.0, max_relative = 1e-12);
        let transitional = ScalingFoundation
            .cost(
                5000.0,
                90.0,
                126.0,
                SiteClass::TransitionalOffshore,
                &UnitIndex,
                CURRENT,
            )
            .unwrap();
        assert_relative_eq!(transitional, 2_250_000.0, max_relative = 1e-12);
    }

    #[test]
    fn deep_water_has_no_foundation_model() {
        let result = ScalingFoundation.cost(
            5000.0,
            90.0,
            126.0,
            SiteClass::DeepOffshore,
            &UnitIndex,
            CURRENT,
        );
        assert_eq!(
            result,
            Err(ModelError::UnsupportedSiteClass(SiteClass::DeepOffshore))
        );
    }
}
