//! Household Registry - owns every household recorded this session
//!
//! Mutation is strictly additive: heads found new households at the end of
//! the list and members are appended to an existing household. Nothing is
//! ever edited, moved or removed.

use chrono::NaiveDate;
use tracing::debug;

use crate::components::{Gender, Household, HouseholdId, Person, PersonId};
use crate::error::{RegistryError, Result};

/// Hands out person ids from a monotonic counter, so two records created in
/// the same instant still get distinct ids. Ids are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn allocate(&mut self) -> PersonId {
        let id = PersonId(self.next);
        self.next += 1;
        id
    }
}

/// In-memory census for one session. Create one with [`Registry::new`] and
/// drop it when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    households: Vec<Household>,
    ids: IdAllocator,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            households: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Record a new head of household and the household they found.
    ///
    /// Callers must have checked that `name` is non-empty and that
    /// `date_of_birth` is not in the future.
    pub fn add_head(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
    ) -> HouseholdId {
        let head = Person {
            id: self.ids.allocate(),
            name: name.into(),
            gender,
            date_of_birth,
        };
        let household = Household::new(head);
        let id = household.id();
        self.households.push(household);

        debug!(household = id.0, households = self.households.len(), "Added head of household");
        id
    }

    /// Append a member to the end of an existing household.
    ///
    /// Fails with [`RegistryError::HouseholdNotFound`] without allocating an
    /// id or touching any household.
    pub fn add_member(
        &mut self,
        household_id: HouseholdId,
        name: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
    ) -> Result<PersonId> {
        let index = self
            .position(household_id)
            .ok_or(RegistryError::HouseholdNotFound(household_id))?;

        let member = Person {
            id: self.ids.allocate(),
            name: name.into(),
            gender,
            date_of_birth,
        };
        let id = member.id;
        self.households[index].push_member(member);

        debug!(household = household_id.0, member = id.0, "Added household member");
        Ok(id)
    }

    /// Households in the order their heads were added.
    pub fn households(&self) -> &[Household] {
        &self.households
    }

    pub fn household(&self, id: HouseholdId) -> Option<&Household> {
        self.households.iter().find(|h| h.id() == id)
    }

    pub fn household_count(&self) -> usize {
        self.households.len()
    }

    /// 1-based position of the household in registry order.
    pub fn house_number(&self, id: HouseholdId) -> Option<usize> {
        self.position(id).map(|index| index + 1)
    }

    /// Every person, household by household: each head followed by its
    /// members in their stored order.
    pub fn population(&self) -> impl Iterator<Item = &Person> {
        self.households.iter().flat_map(Household::people)
    }

    pub fn population_count(&self) -> usize {
        self.households.iter().map(Household::size).sum()
    }

    /// Look up a head or member by id.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.population().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    fn position(&self, id: HouseholdId) -> Option<usize> {
        self.households.iter().position(|h| h.id() == id)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_head_appends_empty_household() {
        let mut registry = Registry::new();
        let first = registry.add_head("Ravi", Gender::Male, date(1980, 5, 1));
        registry.add_member(first, "Meena", Gender::Female, date(1984, 2, 3)).unwrap();
        let before = registry.households()[0].clone();

        let second = registry.add_head("Sunita", Gender::Female, date(1975, 8, 9));

        assert_eq!(registry.household_count(), 2);
        assert_eq!(registry.households()[0], before);
        let household = registry.household(second).unwrap();
        assert!(household.members().is_empty());
        assert_eq!(household.head().name, "Sunita");
        assert_eq!(registry.house_number(second), Some(2));
    }

    #[test]
    fn test_add_member_only_touches_target_household() {
        let mut registry = Registry::new();
        let a = registry.add_head("A", Gender::Male, date(1970, 1, 1));
        let b = registry.add_head("B", Gender::Female, date(1972, 1, 1));
        let untouched = registry.household(a).unwrap().clone();

        registry.add_member(b, "B1", Gender::Male, date(2001, 1, 1)).unwrap();
        registry.add_member(b, "B2", Gender::Female, date(2003, 1, 1)).unwrap();

        assert_eq!(registry.household(a).unwrap(), &untouched);
        let names: Vec<&str> = registry
            .household(b)
            .unwrap()
            .members()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["B1", "B2"]);
    }

    #[test]
    fn test_add_member_to_missing_household_changes_nothing() {
        let mut registry = Registry::new();
        let a = registry.add_head("A", Gender::Male, date(1970, 1, 1));
        let snapshot = registry.clone();

        let missing = HouseholdId(a.0 + 100);
        let result = registry.add_member(missing, "X", Gender::Female, date(2000, 1, 1));

        assert_eq!(result, Err(RegistryError::HouseholdNotFound(missing)));
        assert_eq!(registry, snapshot);
    }

    #[test]
    fn test_member_id_is_not_a_household_id() {
        let mut registry = Registry::new();
        let a = registry.add_head("A", Gender::Male, date(1970, 1, 1));
        let member = registry.add_member(a, "A1", Gender::Male, date(2000, 1, 1)).unwrap();

        let result = registry.add_member(HouseholdId(member.0), "A2", Gender::Male, date(2001, 1, 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_are_unique_across_heads_and_members() {
        let mut registry = Registry::new();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let household = registry.add_head(format!("Head {}", i), Gender::Male, date(1980, 1, 1));
            assert!(ids.insert(PersonId::from(household)));
            for j in 0..3 {
                let member = registry
                    .add_member(household, format!("Member {}-{}", i, j), Gender::Female, date(2010, 1, 1))
                    .unwrap();
                assert!(ids.insert(member));
            }
        }

        assert_eq!(ids.len(), 200);
        assert_eq!(registry.population_count(), 200);
    }

    #[test]
    fn test_population_order_is_head_then_members() {
        let mut registry = Registry::new();
        let a = registry.add_head("A", Gender::Male, date(1970, 1, 1));
        let b = registry.add_head("B", Gender::Female, date(1971, 1, 1));
        registry.add_member(b, "B1", Gender::Male, date(2000, 1, 1)).unwrap();
        registry.add_member(a, "A1", Gender::Female, date(2001, 1, 1)).unwrap();

        let names: Vec<&str> = registry.population().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "A1", "B", "B1"]);
    }

    #[test]
    fn test_person_lookup() {
        let mut registry = Registry::new();
        let a = registry.add_head("A", Gender::Male, date(1970, 1, 1));
        let member = registry.add_member(a, "A1", Gender::Female, date(2001, 1, 1)).unwrap();

        assert_eq!(registry.person(member).map(|p| p.name.as_str()), Some("A1"));
        assert_eq!(registry.person(PersonId(999)), None);
        assert_eq!(registry.house_number(HouseholdId(999)), None);
    }
}
