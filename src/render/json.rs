//! JSON export.
//!
//! The document maps each month title to a list of day objects. Key order
//! inside a day is fixed: `DATE`, `SID.TIME`, then the body columns in
//! request order. `serde_json::Value` would sort the keys, so the shape is
//! written through `SerializeMap` directly.

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::model::{DailyRecord, MonthReport, Report};

const INDENT: &[u8] = b"    ";

/// Serializes `report` as a pretty-printed JSON document.
pub fn to_json(report: &Report) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    JsonReport { report }.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

struct JsonReport<'a> {
    report: &'a Report,
}

impl Serialize for JsonReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let headers = self.report.body_headers();
        let mut map = serializer.serialize_map(Some(self.report.months.len()))?;
        for month in &self.report.months {
            map.serialize_entry(
                &month.title(),
                &JsonMonth {
                    month,
                    headers: &headers,
                },
            )?;
        }
        map.end()
    }
}

struct JsonMonth<'a> {
    month: &'a MonthReport,
    headers: &'a [String],
}

impl Serialize for JsonMonth<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.month.days.len()))?;
        for record in &self.month.days {
            seq.serialize_element(&JsonDay {
                record,
                headers: self.headers,
            })?;
        }
        seq.end()
    }
}

struct JsonDay<'a> {
    record: &'a DailyRecord,
    headers: &'a [String],
}

impl Serialize for JsonDay<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.headers.len()))?;
        map.serialize_entry("DATE", &self.record.date_label())?;
        map.serialize_entry("SID.TIME", &self.record.sidereal_time)?;
        for (header, position) in self.headers.iter().zip(&self.record.positions) {
            map.serialize_entry(header, position)?;
        }
        map.end()
    }
}
