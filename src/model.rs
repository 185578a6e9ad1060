//! Core data model for ephemgen.
//!
//! These types are what a report is made of: the bodies tabulated, the
//! formatted zodiac positions and sidereal times, one record per day,
//! and the month and year groupings the renderers walk.

mod body;
mod position;
mod record;
mod report;
mod sign;

pub use body::CelestialBody;
pub use position::{SiderealTime, ZodiacPosition};
pub use record::DailyRecord;
pub use report::{MonthReport, Report, YearReport};
pub use sign::Sign;
