//! Error handling for the family roster.

/// Errors produced by roster operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Average age requested on a roster with no members
    #[error("Cannot compute average age of an empty roster")]
    EmptyRoster,

    /// A role label that is not one of Mother, Father, Daughter or Son
    #[error("Unknown family role: {0}")]
    UnknownRole(String),
}

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
