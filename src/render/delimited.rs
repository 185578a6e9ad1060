//! Semicolon-delimited export.
//!
//! Each month is a centered title row, a header row, then one row per day.
//! Rows have different widths, so the writer runs in flexible mode.

use ::csv::{Terminator, WriterBuilder};

use super::ExportError;
use crate::model::Report;

const DELIMITER: u8 = b';';
const TITLE_WIDTH: usize = 50;

/// Serializes `report` as CSV bytes.
pub fn to_csv(report: &Report) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    let mut header = vec!["DATE".to_string(), "SID.TIME".to_string()];
    header.extend(report.body_headers());

    for month in &report.months {
        writer.write_record([format!("{:^TITLE_WIDTH$}", month.title())])?;
        writer.write_record(&header)?;
        for record in &month.days {
            let mut row = vec![record.date_label(), record.sidereal_time.to_string()];
            row.extend(record.positions.iter().map(ToString::to_string));
            writer.write_record(&row)?;
        }
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::csv::ReaderBuilder;

    use crate::format::MinuteRounding;
    use crate::model::CelestialBody;
    use crate::render::tests::sample_report;
    use crate::tabulate::Tabulator;
    use crate::tabulate::tests::StubEphemeris;

    #[test]
    fn writes_title_header_and_rows() {
        let bytes = to_csv(&sample_report()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.split("\r\n").collect();

        assert_eq!(lines[0], format!("{:^50}", "MARCH 2025"));
        assert_eq!(lines[1], "DATE;SID.TIME;SUN;MERCUR");
        assert_eq!(lines[2], "SA 01;10:36:01;10PI50;03AR07");
        assert_eq!(lines[3], "SU 02;10:36:02;11PI50;03AR07");
        assert_eq!(lines[4], "");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn parses_back_to_the_same_table() {
        let stub = StubEphemeris::new();
        let bodies = [CelestialBody::Mars, CelestialBody::Neptune];
        let tab = Tabulator::new(&stub, &bodies, MinuteRounding::Carry);
        let report = tab.year_report(2023).unwrap();
        let bytes = to_csv(&report).unwrap();

        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        assert_eq!(rows.len(), 12 * 2 + 365);

        let mut rows = rows.into_iter();
        for month in &report.months {
            let title = rows.next().unwrap();
            assert_eq!(title.len(), 1);
            assert_eq!(title[0].trim(), month.title());
            assert_eq!(rows.next().unwrap(), ["DATE", "SID.TIME", "MARS", "NEPTUN"]);
            for record in &month.days {
                let row = rows.next().unwrap();
                assert_eq!(row[0], record.date_label());
                assert_eq!(row[1], record.sidereal_time.to_string());
                assert_eq!(row[2], record.positions[0].to_string());
                assert_eq!(row[3], record.positions[1].to_string());
            }
        }
    }
}
