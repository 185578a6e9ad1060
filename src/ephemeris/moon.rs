//! Lunar longitude from the mean elements plus the largest periodic terms.
//!
//! Good to a few arc minutes, which is the resolution of the table.

/// Periodic terms as (D, M, M′, F multipliers, amplitude in degrees).
const TERMS: [(f64, f64, f64, f64, f64); 14] = [
    (0.0, 0.0, 1.0, 0.0, 6.288_774),
    (2.0, 0.0, -1.0, 0.0, 1.274_027),
    (2.0, 0.0, 0.0, 0.0, 0.658_314),
    (0.0, 0.0, 2.0, 0.0, 0.213_618),
    (0.0, 1.0, 0.0, 0.0, -0.185_116),
    (0.0, 0.0, 0.0, 2.0, -0.114_332),
    (2.0, 0.0, -2.0, 0.0, 0.058_793),
    (2.0, -1.0, -1.0, 0.0, 0.057_066),
    (2.0, 0.0, 1.0, 0.0, 0.053_322),
    (2.0, -1.0, 0.0, 0.0, 0.045_758),
    (0.0, 1.0, -1.0, 0.0, -0.040_923),
    (1.0, 0.0, 0.0, 0.0, -0.034_720),
    (0.0, 1.0, 1.0, 0.0, -0.030_383),
    (2.0, 0.0, 0.0, -2.0, 0.015_327),
];

/// Geocentric ecliptic longitude of the Moon in radians, for `t` Julian
/// centuries since J2000.0.
pub(super) fn longitude(t: f64) -> f64 {
    // Mean longitude, elongation, solar anomaly, lunar anomaly, latitude argument.
    let mean_longitude = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let m_prime = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();

    let perturbation: f64 = TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, amplitude)| {
            amplitude * (cd * d + cm * m + cmp * m_prime + cf * f).sin()
        })
        .sum();

    (mean_longitude + perturbation).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::TAU;

    #[test]
    fn matches_reference_position() {
        // 1992-04-12 0h TD: apparent λ = 133.1627°.
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = longitude(t).rem_euclid(TAU).to_degrees();
        assert!((lon - 133.16).abs() < 0.1, "λ = {lon}°");
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let day = 1.0 / 36_525.0;
        let step = (longitude(day) - longitude(0.0)).rem_euclid(TAU).to_degrees();
        assert!((11.5..15.5).contains(&step), "daily motion = {step}°");
    }
}
