//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{print_report, render_report};
pub use self::log::{log_operation_complete, log_operation_start};
