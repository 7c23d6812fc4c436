//! Common domain type definitions
//!
//! This module contains the role tag shared by family member records
//! and the roster statistics.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a member within the family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Mother of the family
    Mother,
    /// Father of the family
    Father,
    /// Daughter of the family
    Daughter,
    /// Son of the family
    Son,
}

impl Role {
    /// All roles, parents first
    pub const ALL: [Self; 4] = [Self::Mother, Self::Father, Self::Daughter, Self::Son];

    /// Fixed label used when describing a member
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mother => "Mother",
            Self::Father => "Father",
            Self::Daughter => "Daughter",
            Self::Son => "Son",
        }
    }

    /// Whether this role is one of the parents
    #[must_use]
    pub const fn is_parent(self) -> bool {
        matches!(self, Self::Mother | Self::Father)
    }

    /// Whether this role is one of the children
    #[must_use]
    pub const fn is_child(self) -> bool {
        !self.is_parent()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mother" => Ok(Self::Mother),
            "father" => Ok(Self::Father),
            "daughter" => Ok(Self::Daughter),
            "son" => Ok(Self::Son),
            _ => Err(RosterError::UnknownRole(s.to_string())),
        }
    }
}
