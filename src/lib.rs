//! A small family roster: role-tagged member records, their descriptions,
//! and the average age of the group.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use collections::FamilyRoster;
pub use config::ReportConfig;
pub use error::{Result, RosterError};
pub use models::{FamilyMember, Role};

// Statistics
pub use algorithm::{RosterStatistics, RosterStats};

// Console output
pub use utils::logging::{print_report, render_report};
