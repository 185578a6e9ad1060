//! Built-in ephemeris from Keplerian mean elements.
//!
//! Planetary elements are the J2000 values and per-century rates of the
//! JPL "Approximate Positions of the Planets" table, valid 1800–2050.
//! Longitudes are geometric and referred to the J2000 ecliptic and equinox.

use std::f64::consts::TAU;

use jiff::civil::{Date, date};

use super::{Ephemeris, EphemerisError, Result, centuries_since_j2000, julian_day, moon, sidereal};
use crate::model::CelestialBody;

/// Earliest date the element table covers.
const FIRST_DATE: Date = date(1800, 1, 1);
/// Latest date the element table covers.
const LAST_DATE: Date = date(2050, 12, 31);

/// Orbital elements at J2000 and their rates per Julian century.
///
/// Angles are degrees; `a` is in AU.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    inclination: (f64, f64),
    mean_longitude: (f64, f64),
    perihelion_longitude: (f64, f64),
    node_longitude: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    inclination: (7.004_979_02, -0.005_947_49),
    mean_longitude: (252.250_323_50, 149_472.674_111_75),
    perihelion_longitude: (77.457_796_28, 0.160_476_89),
    node_longitude: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    inclination: (3.394_676_05, -0.000_788_90),
    mean_longitude: (181.979_099_50, 58_517.815_387_29),
    perihelion_longitude: (131.602_467_18, 0.002_683_29),
    node_longitude: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARYCENTER: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    inclination: (-0.000_015_31, -0.012_946_68),
    mean_longitude: (100.464_571_66, 35_999.372_449_81),
    perihelion_longitude: (102.937_681_93, 0.323_273_64),
    node_longitude: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    inclination: (1.849_691_42, -0.008_131_31),
    mean_longitude: (-4.553_432_05, 19_140.302_684_99),
    perihelion_longitude: (-23.943_629_59, 0.444_410_88),
    node_longitude: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    inclination: (1.304_396_95, -0.001_837_14),
    mean_longitude: (34.396_440_51, 3_034.746_127_75),
    perihelion_longitude: (14.728_479_83, 0.212_526_68),
    node_longitude: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    inclination: (2.485_991_87, 0.001_936_09),
    mean_longitude: (49.954_244_23, 1_222.493_622_01),
    perihelion_longitude: (92.598_878_31, -0.418_972_16),
    node_longitude: (113.662_424_48, -0.288_677_94),
};

const URANUS: Elements = Elements {
    a: (19.189_164_64, -0.001_961_76),
    e: (0.047_257_44, -0.000_043_97),
    inclination: (0.772_637_83, -0.002_429_39),
    mean_longitude: (313.238_104_51, 428.482_027_85),
    perihelion_longitude: (170.954_276_30, 0.408_052_81),
    node_longitude: (74.016_925_03, 0.042_405_89),
};

const NEPTUNE: Elements = Elements {
    a: (30.069_922_76, 0.000_262_91),
    e: (0.008_590_48, 0.000_051_05),
    inclination: (1.770_043_47, 0.000_353_72),
    mean_longitude: (-55.120_029_69, 218.459_453_25),
    perihelion_longitude: (44.964_762_27, -0.322_414_64),
    node_longitude: (131.784_225_74, -0.005_086_64),
};

const PLUTO: Elements = Elements {
    a: (39.482_116_75, -0.000_315_96),
    e: (0.248_827_30, 0.000_051_70),
    inclination: (17.140_012_06, 0.000_048_18),
    mean_longitude: (238.929_038_33, 145.207_805_15),
    perihelion_longitude: (224.068_916_29, -0.040_629_42),
    node_longitude: (110.303_936_84, -0.011_834_82),
};

impl Elements {
    /// Heliocentric ecliptic position in AU, `t` centuries after J2000.
    fn heliocentric(&self, t: f64) -> [f64; 3] {
        let at = |(value, rate): (f64, f64)| value + rate * t;

        let a = at(self.a);
        let e = at(self.e);
        let inclination = at(self.inclination).to_radians();
        let mean_longitude = at(self.mean_longitude);
        let perihelion = at(self.perihelion_longitude);
        let node = at(self.node_longitude);

        let argument_of_perihelion = (perihelion - node).to_radians();
        let node = node.to_radians();
        let mean_anomaly = (mean_longitude - perihelion).to_radians();

        let eccentric_anomaly = solve_kepler(mean_anomaly, e);
        let x_orbit = a * (eccentric_anomaly.cos() - e);
        let y_orbit = a * (1.0 - e * e).sqrt() * eccentric_anomaly.sin();

        let (sin_w, cos_w) = argument_of_perihelion.sin_cos();
        let (sin_node, cos_node) = node.sin_cos();
        let (sin_i, cos_i) = inclination.sin_cos();

        [
            (cos_w * cos_node - sin_w * sin_node * cos_i) * x_orbit
                + (-sin_w * cos_node - cos_w * sin_node * cos_i) * y_orbit,
            (cos_w * sin_node + sin_w * cos_node * cos_i) * x_orbit
                + (-sin_w * sin_node + cos_w * cos_node * cos_i) * y_orbit,
            (sin_w * sin_i) * x_orbit + (cos_w * sin_i) * y_orbit,
        ]
    }
}

/// Solves Kepler's equation `E - e·sin E = M` by Newton iteration.
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    const TOLERANCE: f64 = 1e-12;
    const MAX_ITERATIONS: usize = 30;

    let m = mean_anomaly.rem_euclid(TAU);
    let mut eccentric = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..MAX_ITERATIONS {
        let delta = (eccentric - e * eccentric.sin() - m) / (1.0 - e * eccentric.cos());
        eccentric -= delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    eccentric
}

/// Low-precision analytic ephemeris covering 1800–2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElements {
    /// Observer east longitude in radians, for local sidereal time.
    observer_longitude: f64,
}

impl MeanElements {
    /// A provider for an observer at `east_longitude_deg` degrees east.
    pub fn new(east_longitude_deg: f64) -> Self {
        Self {
            observer_longitude: east_longitude_deg.to_radians(),
        }
    }

    /// Dates this provider can compute.
    pub fn supported_range() -> (Date, Date) {
        (FIRST_DATE, LAST_DATE)
    }

    fn centuries(date: Date) -> Result<(f64, f64)> {
        let (first, last) = Self::supported_range();
        if !(first..=last).contains(&date) {
            return Err(EphemerisError::OutOfRange { date });
        }
        let jd = julian_day(date)?;
        Ok((jd, centuries_since_j2000(jd)))
    }
}

impl Ephemeris for MeanElements {
    fn longitude(&self, body: CelestialBody, date: Date) -> Result<f64> {
        let (_, t) = Self::centuries(date)?;

        let planet = match body {
            CelestialBody::Moon => return Ok(moon::longitude(t).rem_euclid(TAU)),
            CelestialBody::Sun => None,
            CelestialBody::Mercury => Some(MERCURY),
            CelestialBody::Venus => Some(VENUS),
            CelestialBody::Mars => Some(MARS),
            CelestialBody::Jupiter => Some(JUPITER),
            CelestialBody::Saturn => Some(SATURN),
            CelestialBody::Uranus => Some(URANUS),
            CelestialBody::Neptune => Some(NEPTUNE),
            CelestialBody::Pluto => Some(PLUTO),
        };

        let earth = EARTH_MOON_BARYCENTER.heliocentric(t);
        let [x, y, _] = match planet {
            // The Sun sits opposite the Earth as seen from the Sun.
            None => [-earth[0], -earth[1], -earth[2]],
            Some(elements) => {
                let p = elements.heliocentric(t);
                [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
            }
        };

        Ok(y.atan2(x).rem_euclid(TAU))
    }

    fn sidereal_time(&self, date: Date) -> Result<f64> {
        let (jd, _) = Self::centuries(date)?;
        Ok(sidereal::local_mean(jd, self.observer_longitude))
    }
}
