//! Terminal table.

use std::io::{self, Write};

use crate::model::{MonthReport, Report};

const RULE_WIDTH: usize = 80;
const COLUMN_WIDTH: usize = 7;

/// Writes every month of `report` as a ruled table.
pub fn write_table<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let header = header_line(&report.body_headers());
    for month in &report.months {
        write_month(month, &header, out)?;
    }
    Ok(())
}

fn header_line(headers: &[String]) -> String {
    let columns: Vec<String> = headers
        .iter()
        .map(|h| format!("{h:>COLUMN_WIDTH$}"))
        .collect();
    format!("{:<6} {:<9} {}", "DATE", "SID.TIME", columns.join(" "))
}

fn write_month<W: Write>(month: &MonthReport, header: &str, out: &mut W) -> io::Result<()> {
    let heavy = "-".repeat(RULE_WIDTH);
    let light = "-".repeat(header.len());

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "{:^RULE_WIDTH$}", month.title())?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "{header}")?;
    writeln!(out, "{light}")?;

    for day in &month.days {
        let positions: Vec<String> = day
            .positions
            .iter()
            .map(|p| format!("{:>COLUMN_WIDTH$}", p.to_string()))
            .collect();
        writeln!(
            out,
            "{} {}  {}  {}",
            day.day_of_week,
            day.day_of_month,
            day.sidereal_time,
            positions.join(" ")
        )?;
    }

    writeln!(out, "{light}")
}
