//! Model collections
//!
//! This module provides the collection types that own domain models.

pub mod family;

// Re-export specialized collections for convenience
pub use family::FamilyRoster;
