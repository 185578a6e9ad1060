//! One tabulated day.

use jiff::civil::Date;

use super::{SiderealTime, ZodiacPosition};

/// A fully populated row: the day, its sidereal time, and one position per
/// requested body in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: Date,
    /// Two-letter uppercase weekday, e.g. `MO`.
    pub day_of_week: String,
    /// Zero-padded day of month, e.g. `07`.
    pub day_of_month: String,
    pub sidereal_time: SiderealTime,
    pub positions: Vec<ZodiacPosition>,
}

impl DailyRecord {
    /// The `DATE` column value, e.g. `MO 07`.
    pub fn date_label(&self) -> String {
        format!("{} {}", self.day_of_week, self.day_of_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn date_label_joins_weekday_and_day() {
        let record = DailyRecord {
            date: date(2025, 1, 6),
            day_of_week: "MO".into(),
            day_of_month: "06".into(),
            sidereal_time: SiderealTime {
                hours: 0,
                minutes: 0,
                seconds: 0,
            },
            positions: vec![],
        };
        assert_eq!(record.date_label(), "MO 06");
    }
}
