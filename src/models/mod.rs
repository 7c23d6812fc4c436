//! Domain models for the family roster
//!
//! This module contains the member record and the role tag it carries.

pub mod family;
pub mod types;

// Re-export commonly used types
pub use family::FamilyMember;
pub use types::Role;
