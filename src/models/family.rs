//! Family member representation
//!
//! A family member is one of four fixed roles, each carrying a name and an age.
//! The role is decided by the constructor and cannot be changed afterwards.

use super::types::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single member of the family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum FamilyMember {
    /// Mother of the family
    Mother { name: String, age: i32 },
    /// Father of the family
    Father { name: String, age: i32 },
    /// Daughter of the family
    Daughter { name: String, age: i32 },
    /// Son of the family
    Son { name: String, age: i32 },
}

impl FamilyMember {
    /// Create a member whose role is only known at runtime
    #[must_use]
    pub fn new(role: Role, name: impl Into<String>, age: i32) -> Self {
        let name = name.into();
        match role {
            Role::Mother => Self::Mother { name, age },
            Role::Father => Self::Father { name, age },
            Role::Daughter => Self::Daughter { name, age },
            Role::Son => Self::Son { name, age },
        }
    }

    /// Create a mother
    #[must_use]
    pub fn mother(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Mother, name, age)
    }

    /// Create a father
    #[must_use]
    pub fn father(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Father, name, age)
    }

    /// Create a daughter
    #[must_use]
    pub fn daughter(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Daughter, name, age)
    }

    /// Create a son
    #[must_use]
    pub fn son(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Son, name, age)
    }

    /// Role of this member
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Mother { .. } => Role::Mother,
            Self::Father { .. } => Role::Father,
            Self::Daughter { .. } => Role::Daughter,
            Self::Son { .. } => Role::Son,
        }
    }

    /// Name of this member
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Mother { name, .. }
            | Self::Father { name, .. }
            | Self::Daughter { name, .. }
            | Self::Son { name, .. } => name,
        }
    }

    /// Age of this member in whole years
    #[must_use]
    pub const fn age(&self) -> i32 {
        match self {
            Self::Mother { age, .. }
            | Self::Father { age, .. }
            | Self::Daughter { age, .. }
            | Self::Son { age, .. } => *age,
        }
    }

    /// Describe this member as `Type: <role>, Name: <name>, Age: <age>`
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FamilyMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Name: {}, Age: {}",
            self.role(),
            self.name(),
            self.age()
        )
    }
}
