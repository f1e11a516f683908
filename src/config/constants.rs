// Model-wide constants for the wind plant cost and scaling model.
// Component-level regression coefficients live next to their formulas in
// the models/ modules; only cross-cutting values are collected here.

use std::f64::consts::PI;

// Time
pub const HOURS_PER_YEAR: f64 = 8760.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

// Cost index coverage: annual values for 2002 through 2012 inclusive
pub const INDEX_BASE_YEAR: u32 = 2002;
pub const INDEX_SPAN: usize = 11;

// Default escalation reference (September 2002) and the later reference
// used by the offshore cost categories (September 2003)
pub const DEFAULT_REFERENCE_YEAR: u32 = 2002;
pub const DEFAULT_REFERENCE_MONTH: u32 = 9;
pub const OFFSHORE_REFERENCE_YEAR: u32 = 2003;
pub const LAND_PERMITS_REFERENCE_MONTH: u32 = 3;

// Power curve discretization
pub const POWER_CURVE_BIN_WIDTH: f64 = 0.25; // m/s

// Standard atmosphere, used by the barometric air density formula
pub const SEA_LEVEL_PRESSURE: f64 = 101_300.0; // Pa
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065; // K/m
pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const GAS_CONSTANT_AIR: f64 = 287.15; // J/(kg K)

// Wind shear reference height for the 50 m wind speed input
pub const SHEAR_REFERENCE_HEIGHT: f64 = 50.0; // m

// Site classification depth thresholds
pub const SHALLOW_DEPTH_LIMIT: f64 = 30.0; // m
pub const TRANSITIONAL_DEPTH_LIMIT: f64 = 60.0; // m

// Offshore surcharges
pub const MARINIZATION_RATE: f64 = 0.10;
pub const OFFSHORE_WARRANTY_PREMIUM: f64 = 0.15;
pub const SURETY_BOND_RATE: f64 = 0.03;

// Annual operating cost rates
pub const LAND_OM_RATE: f64 = 0.0070; // $/kWh of net AEP
pub const OFFSHORE_OM_RATE: f64 = 0.0200; // $/kWh of net AEP
pub const LAND_LRC_RATE: f64 = 10.70; // $/kW of rating
pub const OFFSHORE_LRC_RATE: f64 = 17.00; // $/kW of rating
pub const LAND_LEASE_RATE: f64 = 0.00108; // $/kWh of net AEP

// Geometry helpers
pub const RPM_TO_RAD_PER_SEC: f64 = PI / 30.0;
pub const RAD_PER_SEC_TO_RPM: f64 = 30.0 / PI;
