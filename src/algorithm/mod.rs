//! Algorithm implementations over the family roster
//!
//! This module contains the aggregate computations that go beyond the
//! roster's own average.

pub mod statistics;

pub use statistics::{RosterStatistics, RosterStats};
