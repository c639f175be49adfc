//! Census records: people, households and their identifiers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::age::Locale;

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u64);

/// A household is identified by its head's `PersonId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HouseholdId(pub u64);

impl From<HouseholdId> for PersonId {
    fn from(id: HouseholdId) -> Self {
        PersonId(id.0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for HouseholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Person
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Gender::Male, Locale::Marathi) => "पुरुष",
            (Gender::Female, Locale::Marathi) => "स्त्री",
            (Gender::Male, Locale::English) => "Male",
            (Gender::Female, Locale::English) => "Female",
        }
    }
}

/// A head of household or a member. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
}

// ============================================================================
// Household
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    head: Person,
    members: Vec<Person>,
}

impl Household {
    pub(crate) fn new(head: Person) -> Self {
        Self {
            head,
            members: Vec::new(),
        }
    }

    pub(crate) fn push_member(&mut self, member: Person) {
        self.members.push(member);
    }

    pub fn id(&self) -> HouseholdId {
        HouseholdId(self.head.id.0)
    }

    pub fn head(&self) -> &Person {
        &self.head
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Person] {
        &self.members
    }

    /// Head first, then members in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        std::iter::once(&self.head).chain(self.members.iter())
    }

    /// Head plus members.
    pub fn size(&self) -> usize {
        1 + self.members.len()
    }
}
