//! Family roster collection
//!
//! This module provides the ordered collection of family members. Members are
//! kept in insertion order, which is also the order they are described in.

use crate::error::{Result, RosterError};
use crate::models::family::FamilyMember;
use crate::models::types::Role;

/// Ordered collection of family members
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyRoster {
    /// Members in insertion order
    members: Vec<FamilyMember>,
}

impl FamilyRoster {
    /// Create a new empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Create a roster from a vector of members, keeping their order
    #[must_use]
    pub fn from_members(members: Vec<FamilyMember>) -> Self {
        Self { members }
    }

    /// Append a member to the end of the roster
    pub fn add(&mut self, member: FamilyMember) {
        log::debug!("Adding {} {} to roster", member.role(), member.name());
        self.members.push(member);
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members in insertion order
    #[must_use]
    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Iterate over members in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, FamilyMember> {
        self.members.iter()
    }

    /// Members holding the given role, in insertion order
    pub fn members_with_role(&self, role: Role) -> impl Iterator<Item = &FamilyMember> + '_ {
        self.members.iter().filter(move |member| member.role() == role)
    }

    /// Lazily describe every member, one string per member in insertion order
    ///
    /// Nothing is printed here; callers decide where the lines go.
    pub fn render_all(&self) -> impl Iterator<Item = String> + '_ {
        self.members.iter().map(FamilyMember::describe)
    }

    /// Sum of all ages, folded left to right
    #[must_use]
    pub fn total_age(&self) -> i64 {
        self.members
            .iter()
            .fold(0_i64, |total, member| total + i64::from(member.age()))
    }

    /// Arithmetic mean of all ages
    ///
    /// # Errors
    /// Returns [`RosterError::EmptyRoster`] when the roster has no members.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_age(&self) -> Result<f64> {
        if self.members.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        Ok(self.total_age() as f64 / self.members.len() as f64)
    }
}

impl FromIterator<FamilyMember> for FamilyRoster {
    fn from_iter<I: IntoIterator<Item = FamilyMember>>(iter: I) -> Self {
        let mut roster = Self::new();
        roster.extend(iter);
        roster
    }
}

impl Extend<FamilyMember> for FamilyRoster {
    fn extend<I: IntoIterator<Item = FamilyMember>>(&mut self, iter: I) {
        for member in iter {
            self.add(member);
        }
    }
}

impl<'a> IntoIterator for &'a FamilyRoster {
    type Item = &'a FamilyMember;
    type IntoIter = std::slice::Iter<'a, FamilyMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
