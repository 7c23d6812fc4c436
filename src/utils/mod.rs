//! Utility functions for the family roster
//!
//! This module provides logging helpers and console output.

pub mod logging;
