use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_REFERENCE_MONTH, DEFAULT_REFERENCE_YEAR, INDEX_BASE_YEAR, INDEX_SPAN,
    MONTHS_PER_YEAR, OFFSHORE_REFERENCE_YEAR,
};
use crate::error::ModelError;

/// Producer-price cost categories tracked by the escalation tables. Each
/// component and balance-of-station formula escalates through exactly one
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    BladeMaterial,
    AdvancedBladeMaterial,
    BladeLabor,
    Hub,
    PitchSystem,
    NacelleCover,
    LowSpeedShaft,
    MainBearings,
    Gearbox,
    Brake,
    Generator,
    PowerElectronics,
    YawSystem,
    Mainframe,
    ElectricalConnections,
    Hydraulics,
    ControlSystem,
    ServiceCrane,
    Tower,
    Foundation,
    Monopile,
    LandPermits,
    LandElectrical,
    RoadsCivil,
    LandInstallation,
    Transportation,
    PersonnelAccess,
    PortStaging,
    OffshorePermits,
    OffshoreInstallation,
    OffshoreElectrical,
    LandOperations,
    OffshoreOperations,
    LandReplacement,
    OffshoreReplacement,
    LandLease,
}

impl CostCategory {
    pub const ALL: [CostCategory; 36] = [
        CostCategory::BladeMaterial,
        CostCategory::AdvancedBladeMaterial,
        CostCategory::BladeLabor,
        CostCategory::Hub,
        CostCategory::PitchSystem,
        CostCategory::NacelleCover,
        CostCategory::LowSpeedShaft,
        CostCategory::MainBearings,
        CostCategory::Gearbox,
        CostCategory::Brake,
        CostCategory::Generator,
        CostCategory::PowerElectronics,
        CostCategory::YawSystem,
        CostCategory::Mainframe,
        CostCategory::ElectricalConnections,
        CostCategory::Hydraulics,
        CostCategory::ControlSystem,
        CostCategory::ServiceCrane,
        CostCategory::Tower,
        CostCategory::Foundation,
        CostCategory::Monopile,
        CostCategory::LandPermits,
        CostCategory::LandElectrical,
        CostCategory::RoadsCivil,
        CostCategory::LandInstallation,
        CostCategory::Transportation,
        CostCategory::PersonnelAccess,
        CostCategory::PortStaging,
        CostCategory::OffshorePermits,
        CostCategory::OffshoreInstallation,
        CostCategory::OffshoreElectrical,
        CostCategory::LandOperations,
        CostCategory::OffshoreOperations,
        CostCategory::LandReplacement,
        CostCategory::OffshoreReplacement,
        CostCategory::LandLease,
    ];

    /// Short index code used in data files and log output.
    pub fn code(&self) -> &'static str {
        match self {
            CostCategory::BladeMaterial => "IPPI_BLD",
            CostCategory::AdvancedBladeMaterial => "IPPI_BLA",
            CostCategory::BladeLabor => "IPPI_BLL",
            CostCategory::Hub => "IPPI_HUB",
            CostCategory::PitchSystem => "IPPI_PMB",
            CostCategory::NacelleCover => "IPPI_NAC",
            CostCategory::LowSpeedShaft => "IPPI_LSS",
            CostCategory::MainBearings => "IPPI_BRG",
            CostCategory::Gearbox => "IPPI_GRB",
            CostCategory::Brake => "IPPI_BRK",
            CostCategory::Generator => "IPPI_GEN",
            CostCategory::PowerElectronics => "IPPI_VSE",
            CostCategory::YawSystem => "IPPI_YAW",
            CostCategory::Mainframe => "IPPI_MFM",
            CostCategory::ElectricalConnections => "IPPI_ELC",
            CostCategory::Hydraulics => "IPPI_HYD",
            CostCategory::ControlSystem => "IPPI_CTL",
            CostCategory::ServiceCrane => "IPPI_CRN",
            CostCategory::Tower => "IPPI_TWR",
            CostCategory::Foundation => "IPPI_FND",
            CostCategory::Monopile => "IPPI_MPF",
            CostCategory::LandPermits => "IPPI_LPM",
            CostCategory::LandElectrical => "IPPI_LEL",
            CostCategory::RoadsCivil => "IPPI_RDC",
            CostCategory::LandInstallation => "IPPI_LAI",
            CostCategory::Transportation => "IPPI_TPT",
            CostCategory::PersonnelAccess => "IPPI_PAE",
            CostCategory::PortStaging => "IPPI_STP",
            CostCategory::OffshorePermits => "IPPI_OPM",
            CostCategory::OffshoreInstallation => "IPPI_OAI",
            CostCategory::OffshoreElectrical => "IPPI_OEL",
            CostCategory::LandOperations => "IPPI_LOM",
            CostCategory::OffshoreOperations => "IPPI_OOM",
            CostCategory::LandReplacement => "IPPI_LLR",
            CostCategory::OffshoreReplacement => "IPPI_OLR",
            CostCategory::LandLease => "IPPI_LSE",
        }
    }
}

impl FromStr for CostCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostCategory::ALL
            .iter()
            .find(|category| category.code() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Calendar position of an index lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexDate {
    pub year: u32,
    pub month: u32,
}

impl IndexDate {
    pub fn new(year: u32, month: u32) -> Self {
        IndexDate { year, month }
    }

    /// September 2002, the reference point for most categories.
    pub fn default_reference() -> Self {
        IndexDate::new(DEFAULT_REFERENCE_YEAR, DEFAULT_REFERENCE_MONTH)
    }

    /// September 2003, the reference point for the offshore categories.
    pub fn offshore_reference() -> Self {
        IndexDate::new(OFFSHORE_REFERENCE_YEAR, DEFAULT_REFERENCE_MONTH)
    }
}

impl fmt::Display for IndexDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Maps a cost category and a (reference, current) date pair to a
/// multiplicative escalation factor. Lookups carry both dates explicitly;
/// implementations hold no mutable state.
pub trait EscalationIndex {
    fn escalator(
        &self,
        category: CostCategory,
        reference: IndexDate,
        current: IndexDate,
    ) -> Result<f64, ModelError>;
}

/// Escalation index that always answers 1.0. Used to price formulas in
/// their reference-year dollars.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitIndex;

impl EscalationIndex for UnitIndex {
    fn escalator(
        &self,
        _category: CostCategory,
        _reference: IndexDate,
        _current: IndexDate,
    ) -> Result<f64, ModelError> {
        Ok(1.0)
    }
}

// Annual index values per category, 2002 through 2012, normalized to
// 100.0 at 2002.
const ANNUAL_SERIES: &[(CostCategory, [f64; INDEX_SPAN])] = &[
    (CostCategory::BladeMaterial, [100.0, 101.8, 106.8, 113.2, 118.3, 124.1, 133.7, 130.7, 133.9, 137.5, 139.2]),
    (CostCategory::AdvancedBladeMaterial, [100.0, 101.6, 106.8, 113.4, 118.1, 124.1, 133.9, 130.5, 133.9, 137.7, 139.0]),
    (CostCategory::BladeLabor, [100.0, 102.8, 106.1, 109.5, 112.3, 115.9, 119.6, 122.7, 126.6, 130.6, 134.1]),
    (CostCategory::Hub, [100.0, 101.4, 110.5, 122.8, 130.6, 138.7, 153.3, 147.9, 153.6, 160.6, 163.4]),
    (CostCategory::PitchSystem, [100.0, 100.9, 107.9, 117.1, 124.2, 130.6, 141.6, 138.9, 142.8, 147.8, 150.6]),
    (CostCategory::NacelleCover, [100.0, 101.9, 106.8, 113.1, 118.4, 124.1, 133.6, 130.8, 133.9, 137.4, 139.3]),
    (CostCategory::LowSpeedShaft, [100.0, 101.2, 110.5, 123.0, 130.4, 138.7, 153.5, 147.7, 153.6, 160.8, 163.2]),
    (CostCategory::MainBearings, [100.0, 100.7, 107.9, 117.3, 124.0, 130.6, 141.8, 138.7, 142.8, 148.0, 150.4]),
    (CostCategory::Gearbox, [100.0, 101.0, 107.9, 117.0, 124.3, 130.6, 141.5, 139.0, 142.8, 147.7, 150.7]),
    (CostCategory::Brake, [100.0, 100.8, 107.9, 117.2, 124.1, 130.6, 141.7, 138.8, 142.8, 147.9, 150.5]),
    (CostCategory::Generator, [100.0, 100.6, 108.4, 120.0, 133.9, 141.8, 152.2, 147.3, 151.3, 157.3, 160.1]),
    (CostCategory::PowerElectronics, [100.0, 98.9, 98.4, 98.2, 97.5, 97.9, 99.4, 99.4, 99.9, 100.5, 100.6]),
    (CostCategory::YawSystem, [100.0, 100.6, 107.9, 117.4, 123.9, 130.6, 141.9, 138.6, 142.8, 148.1, 150.3]),
    (CostCategory::Mainframe, [100.0, 101.5, 110.5, 122.7, 130.7, 138.7, 153.2, 148.0, 153.6, 160.5, 163.5]),
    (CostCategory::ElectricalConnections, [100.0, 100.4, 108.4, 120.2, 133.7, 141.8, 152.4, 147.1, 151.3, 157.5, 159.9]),
    (CostCategory::Hydraulics, [100.0, 101.1, 107.9, 116.9, 124.4, 130.6, 141.4, 139.1, 142.8, 147.6, 150.8]),
    (CostCategory::ControlSystem, [100.0, 98.8, 98.4, 98.3, 97.4, 97.9, 99.5, 99.3, 99.9, 100.6, 100.5]),
    (CostCategory::ServiceCrane, [100.0, 100.5, 107.9, 117.5, 123.8, 130.6, 142.0, 138.5, 142.8, 148.2, 150.2]),
    (CostCategory::Tower, [100.0, 101.6, 110.5, 122.6, 130.8, 138.7, 153.1, 148.1, 153.6, 160.4, 163.6]),
    (CostCategory::Foundation, [100.0, 101.3, 110.5, 122.9, 130.5, 138.7, 153.4, 147.8, 153.6, 160.7, 163.3]),
    (CostCategory::Monopile, [100.0, 101.1, 110.5, 123.1, 130.3, 138.7, 153.6, 147.6, 153.6, 160.9, 163.1]),
    (CostCategory::LandPermits, [100.0, 102.2, 109.8, 119.5, 127.1, 134.6, 147.8, 142.8, 146.9, 152.6, 155.4]),
    (CostCategory::LandElectrical, [100.0, 100.5, 108.4, 120.1, 133.8, 141.8, 152.3, 147.2, 151.3, 157.4, 160.0]),
    (CostCategory::RoadsCivil, [100.0, 102.0, 109.8, 119.7, 126.9, 134.6, 148.0, 142.6, 146.9, 152.8, 155.2]),
    (CostCategory::LandInstallation, [100.0, 102.3, 109.8, 119.4, 127.2, 134.6, 147.7, 142.9, 146.9, 152.5, 155.5]),
    (CostCategory::Transportation, [100.0, 102.1, 109.8, 119.6, 127.0, 134.6, 147.9, 142.7, 146.9, 152.7, 155.3]),
    (CostCategory::PersonnelAccess, [100.0, 101.9, 109.8, 119.8, 126.8, 134.6, 148.1, 142.5, 146.9, 152.9, 155.1]),
    (CostCategory::PortStaging, [100.0, 102.4, 109.8, 119.3, 127.3, 134.6, 147.6, 143.0, 146.9, 152.4, 155.6]),
    (CostCategory::OffshorePermits, [100.0, 101.8, 109.8, 119.9, 126.7, 134.6, 148.2, 142.4, 146.9, 153.0, 155.0]),
    (CostCategory::OffshoreInstallation, [100.0, 101.7, 109.8, 120.0, 126.6, 134.6, 148.3, 142.3, 146.9, 153.1, 154.9]),
    (CostCategory::OffshoreElectrical, [100.0, 100.7, 108.4, 119.9, 134.0, 141.8, 152.1, 147.4, 151.3, 157.2, 160.2]),
    (CostCategory::LandOperations, [100.0, 102.3, 105.9, 109.9, 113.2, 117.7, 122.8, 124.0, 127.1, 130.8, 133.6]),
    (CostCategory::OffshoreOperations, [100.0, 102.1, 105.9, 110.1, 113.0, 117.7, 123.0, 123.8, 127.1, 131.0, 133.4]),
    (CostCategory::LandReplacement, [100.0, 102.4, 105.9, 109.8, 113.3, 117.7, 122.7, 124.1, 127.1, 130.7, 133.7]),
    (CostCategory::OffshoreReplacement, [100.0, 102.2, 105.9, 110.0, 113.1, 117.7, 122.9, 123.9, 127.1, 130.9, 133.5]),
    (CostCategory::LandLease, [100.0, 102.5, 105.9, 109.7, 113.4, 117.7, 122.6, 124.2, 127.1, 130.6, 133.8]),
];

lazy_static! {
    static ref SERIES_BY_CATEGORY: HashMap<CostCategory, &'static [f64; INDEX_SPAN]> =
        ANNUAL_SERIES.iter().map(|(c, row)| (*c, row)).collect();
}

/// Producer-price escalation table bundled with the crate. Monthly values
/// are linearly interpolated between the January anchors of consecutive
/// years.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpiTable;

impl PpiTable {
    pub fn new() -> Self {
        PpiTable
    }

    /// Raw index value for a category at a calendar position.
    pub fn value(&self, category: CostCategory, date: IndexDate) -> Result<f64, ModelError> {
        if date.month == 0 || date.month > 12 {
            return Err(ModelError::InvalidInput(format!(
                "month {} is not in 1..=12",
                date.month
            )));
        }
        let series = SERIES_BY_CATEGORY
            .get(&category)
            .ok_or_else(|| ModelError::UnknownCategory(category.to_string()))?;
        let out_of_range = || ModelError::IndexOutOfRange {
            category: category.to_string(),
            year: date.year,
            month: date.month,
        };
        if date.year < INDEX_BASE_YEAR {
            return Err(out_of_range());
        }
        let i = (date.year - INDEX_BASE_YEAR) as usize;
        if i >= INDEX_SPAN {
            return Err(out_of_range());
        }
        let fraction = (date.month - 1) as f64 / MONTHS_PER_YEAR;
        if fraction == 0.0 {
            return Ok(series[i]);
        }
        if i + 1 >= INDEX_SPAN {
            return Err(out_of_range());
        }
        Ok(series[i] + (series[i + 1] - series[i]) * fraction)
    }
}

impl EscalationIndex for PpiTable {
    fn escalator(
        &self,
        category: CostCategory,
        reference: IndexDate,
        current: IndexDate,
    ) -> Result<f64, ModelError> {
        let reference_value = self.value(category, reference)?;
        let current_value = self.value(category, current)?;
        Ok(current_value / reference_value)
    }
}
