//! Roster statistics and summaries
//!
//! This module provides functions for summarising a roster: member counts,
//! age aggregates and the role composition.

use std::collections::BTreeMap;
use std::fmt::Write;

use itertools::Itertools;
use serde::Serialize;

use crate::collections::FamilyRoster;
use crate::error::{Result, RosterError};
use crate::models::{FamilyMember, Role};

/// Functions for roster statistics and summaries
pub struct RosterStatistics;

impl RosterStatistics {
    /// Calculate statistics for a non-empty roster
    ///
    /// # Errors
    /// Returns [`RosterError::EmptyRoster`] when the roster has no members.
    pub fn calculate(roster: &FamilyRoster) -> Result<RosterStats> {
        let average_age = roster.average_age()?;
        let (youngest_age, oldest_age) = roster
            .iter()
            .map(FamilyMember::age)
            .minmax()
            .into_option()
            .ok_or(RosterError::EmptyRoster)?;

        let role_counts: BTreeMap<Role, usize> = roster
            .iter()
            .map(FamilyMember::role)
            .counts()
            .into_iter()
            .collect();

        let parent_count = roster.iter().filter(|m| m.role().is_parent()).count();

        Ok(RosterStats {
            member_count: roster.len(),
            total_age: roster.total_age(),
            average_age,
            youngest_age,
            oldest_age,
            parent_count,
            child_count: roster.len() - parent_count,
            role_counts,
        })
    }

    /// Generate a human readable summary
    #[must_use]
    pub fn generate_summary(stats: &RosterStats) -> String {
        let mut summary = String::new();
        summary.push_str("Family Roster Summary:\n");
        let _ = writeln!(summary, "  Members: {}", stats.member_count);
        let _ = writeln!(summary, "  Parents: {}", stats.parent_count);
        let _ = writeln!(summary, "  Children: {}", stats.child_count);
        let _ = writeln!(summary, "  Total Age: {}", stats.total_age);
        let _ = writeln!(summary, "  Average Age: {:.2}", stats.average_age);
        let _ = writeln!(
            summary,
            "  Age Range: {}-{}",
            stats.youngest_age, stats.oldest_age
        );

        summary.push_str("  Distribution by Role:\n");
        for (role, count) in &stats.role_counts {
            let _ = writeln!(summary, "    {role}: {count}");
        }

        summary
    }
}

/// Aggregate statistics for a roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterStats {
    /// Number of members
    pub member_count: usize,
    /// Sum of all ages
    pub total_age: i64,
    /// Mean age
    pub average_age: f64,
    /// Lowest age in the roster
    pub youngest_age: i32,
    /// Highest age in the roster
    pub oldest_age: i32,
    /// Number of mothers and fathers
    pub parent_count: usize,
    /// Number of daughters and sons
    pub child_count: usize,
    /// Number of members per role present
    pub role_counts: BTreeMap<Role, usize>,
}
