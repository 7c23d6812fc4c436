//! Console output utilities
//!
//! This module renders the roster report and writes it to stdout.

use itertools::Itertools;

use crate::collections::FamilyRoster;
use crate::config::ReportConfig;
use crate::error::Result;

/// Render the full report: header, one line per member, then the average age
///
/// # Errors
/// Returns [`crate::RosterError::EmptyRoster`] when the roster has no members.
pub fn render_report(roster: &FamilyRoster, config: &ReportConfig) -> Result<Vec<String>> {
    let average = roster.average_age()?;

    let mut lines = Vec::with_capacity(roster.len() + 2);
    lines.push(config.header.clone());
    lines.extend(roster.render_all());
    lines.push(format!(
        "{}: {}",
        config.average_label,
        config.format_average(average)
    ));
    Ok(lines)
}

/// Print the report to stdout
pub fn print_report(roster: &FamilyRoster, config: &ReportConfig) -> Result<()> {
    let lines = render_report(roster, config)?;
    println!("{}", lines.iter().join("\n"));
    Ok(())
}
