use std::f64::consts::PI;

use crate::config::constants::*;

/// Air density (kg/m^3) at an elevation above sea level, from the
/// barometric formula of the standard atmosphere.
pub fn calc_air_density(elevation: f64) -> f64 {
    let temperature = SEA_LEVEL_TEMPERATURE - TEMPERATURE_LAPSE_RATE * elevation;
    let pressure = SEA_LEVEL_PRESSURE
        * (1.0 - TEMPERATURE_LAPSE_RATE * elevation / SEA_LEVEL_TEMPERATURE)
            .powf(GRAVITY / (TEMPERATURE_LAPSE_RATE * GAS_CONSTANT_AIR));
    pressure / (GAS_CONSTANT_AIR * temperature)
}

/// Extrapolates the 50 m wind speed to hub height with the power-law
/// shear profile.
pub fn calc_hub_wind_speed(wind_speed_50m: f64, hub_height: f64, shear_exponent: f64) -> f64 {
    (hub_height / SHEAR_REFERENCE_HEIGHT).powf(shear_exponent) * wind_speed_50m
}

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function (Lanczos approximation, g = 7).
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection formula for the left half-plane
        (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let mut acc = LANCZOS_COEFFS[0];
        for (i, coeff) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
            acc += coeff / (x + i as f64);
        }
        let t = x + LANCZOS_G + 0.5;
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
    }
}

pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

/// Weibull probability density with the given shape and scale. Zero for
/// non-positive arguments.
pub fn weibull_pdf(x: f64, shape: f64, scale: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    let ratio = x / scale;
    (shape / scale) * ratio.powf(shape - 1.0) * (-ratio.powf(shape)).exp()
}
