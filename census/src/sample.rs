//! Sample census generation for demos and benchmarks

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::info;

use crate::components::{Gender, HouseholdId};
use crate::names::{random_first_name, random_surname};
use crate::registry::Registry;

/// Heads are adults between these ages.
const HEAD_AGE_YEARS: std::ops::Range<u64> = 18..80;

/// Members range from newborns to elders.
const MEMBER_AGE_YEARS: std::ops::Range<u64> = 0..85;

/// Shape of a generated census.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    pub households: usize,
    /// Each household gets between zero and this many members.
    pub max_members: usize,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            households: 10,
            max_members: 6,
        }
    }
}

/// Add generated households to `registry`. Every birth date is on or before
/// `today`. Returns the new households' ids in registry order.
pub fn seed_households<R: Rng + ?Sized>(
    registry: &mut Registry,
    spec: SampleSpec,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<HouseholdId> {
    let mut added = Vec::with_capacity(spec.households);
    let mut people = 0usize;

    for _ in 0..spec.households {
        let surname = random_surname(rng);

        let gender = random_gender(rng);
        let name = format!("{} {}", random_first_name(rng, gender == Gender::Male), surname);
        let head = registry.add_head(name, gender, random_birth_date(rng, today, HEAD_AGE_YEARS));
        people += 1;

        let members = rng.gen_range(0..=spec.max_members);
        for _ in 0..members {
            let gender = random_gender(rng);
            let name = format!("{} {}", random_first_name(rng, gender == Gender::Male), surname);
            let dob = random_birth_date(rng, today, MEMBER_AGE_YEARS);
            // The household was just added, so this cannot miss
            if registry.add_member(head, name, gender, dob).is_ok() {
                people += 1;
            }
        }

        added.push(head);
    }

    info!("Seeded {} sample households ({} people)", added.len(), people);
    added
}

fn random_gender<R: Rng + ?Sized>(rng: &mut R) -> Gender {
    if rng.gen::<bool>() {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn random_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    years: std::ops::Range<u64>,
) -> NaiveDate {
    let days_back = rng.gen_range(years.start * 365..years.end * 365);
    today.checked_sub_days(Days::new(days_back)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::compute_aggregates;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_seed_households_shape() {
        let mut registry = Registry::new();
        let mut rng = StdRng::seed_from_u64(42);
        let spec = SampleSpec { households: 25, max_members: 4 };

        let ids = seed_households(&mut registry, spec, today(), &mut rng);

        assert_eq!(ids.len(), 25);
        assert_eq!(registry.household_count(), 25);
        for (household, id) in registry.households().iter().zip(&ids) {
            assert_eq!(household.id(), *id);
            assert!(household.members().len() <= 4);
        }
        assert!(registry.population().all(|p| p.date_of_birth <= today()));
    }

    #[test]
    fn test_heads_are_adults() {
        let mut registry = Registry::new();
        let mut rng = StdRng::seed_from_u64(7);
        seed_households(&mut registry, SampleSpec::default(), today(), &mut rng);

        for household in registry.households() {
            let age = crate::age::age_of(household.head().date_of_birth, today());
            assert!(age.years >= 17 && age.years < 80);
        }
    }

    #[test]
    fn test_same_seed_same_census() {
        let mut first = Registry::new();
        let mut second = Registry::new();
        seed_households(&mut first, SampleSpec::default(), today(), &mut StdRng::seed_from_u64(9));
        seed_households(&mut second, SampleSpec::default(), today(), &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
        let summary = compute_aggregates(&first, today()).summary();
        assert_eq!(summary.males + summary.females, summary.total);
    }
}
