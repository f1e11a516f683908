use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::constants::{SHALLOW_DEPTH_LIMIT, TRANSITIONAL_DEPTH_LIMIT};

/// Site classification derived from the water depth at the turbine
/// location. Land is sea depth zero; deep water has no cost model and is
/// rejected by the stages that price foundations and balance of station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteClass {
    Land,
    ShallowOffshore,
    TransitionalOffshore,
    DeepOffshore,
}

impl SiteClass {
    pub fn from_sea_depth(sea_depth: f64) -> Self {
        if sea_depth <= 0.0 {
            SiteClass::Land
        } else if sea_depth < SHALLOW_DEPTH_LIMIT {
            SiteClass::ShallowOffshore
        } else if sea_depth < TRANSITIONAL_DEPTH_LIMIT {
            SiteClass::TransitionalOffshore
        } else {
            SiteClass::DeepOffshore
        }
    }

    pub fn is_offshore(&self) -> bool {
        !matches!(self, SiteClass::Land)
    }
}

impl FromStr for SiteClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Land" => Ok(SiteClass::Land),
            "ShallowOffshore" => Ok(SiteClass::ShallowOffshore),
            "TransitionalOffshore" => Ok(SiteClass::TransitionalOffshore),
            "DeepOffshore" => Ok(SiteClass::DeepOffshore),
            _ => Err(format!("Unknown site class: {}", s)),
        }
    }
}

impl fmt::Display for SiteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteClass::Land => write!(f, "Land"),
            SiteClass::ShallowOffshore => write!(f, "ShallowOffshore"),
            SiteClass::TransitionalOffshore => write!(f, "TransitionalOffshore"),
            SiteClass::DeepOffshore => write!(f, "DeepOffshore"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_boundaries_classify_correctly() {
        assert_eq!(SiteClass::from_sea_depth(0.0), SiteClass::Land);
        assert_eq!(SiteClass::from_sea_depth(0.1), SiteClass::ShallowOffshore);
        assert_eq!(SiteClass::from_sea_depth(20.0), SiteClass::ShallowOffshore);
        assert_eq!(
            SiteClass::from_sea_depth(30.0),
            SiteClass::TransitionalOffshore
        );
        assert_eq!(
            SiteClass::from_sea_depth(59.9),
            SiteClass::TransitionalOffshore
        );
        assert_eq!(SiteClass::from_sea_depth(60.0), SiteClass::DeepOffshore);
        assert_eq!(SiteClass::from_sea_depth(250.0), SiteClass::DeepOffshore);
    }

    #[test]
    fn only_land_is_onshore() {
        assert!(!SiteClass::Land.is_offshore());
        assert!(SiteClass::ShallowOffshore.is_offshore());
        assert!(SiteClass::TransitionalOffshore.is_offshore());
        assert!(SiteClass::DeepOffshore.is_offshore());
    }

    #[test]
    fn parse_and_display_round_trip() {
        for class in [
            SiteClass::Land,
            SiteClass::ShallowOffshore,
            SiteClass::TransitionalOffshore,
            SiteClass::DeepOffshore,
        ] {
            assert_eq!(class.to_string().parse::<SiteClass>(), Ok(class));
        }
        assert!("Atlantis".parse::<SiteClass>().is_err());
    }
}
