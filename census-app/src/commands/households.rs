use census::sample::{seed_households, SampleSpec};
use census::{HouseholdId, Locale};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::commands::people::build_person_data;
use crate::error::AppError;
use crate::state::{AddedData, AppState, HouseholdData, HouseholdPage};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Added {
    Head,
    Member,
}

fn success_message(added: Added, locale: Locale) -> &'static str {
    match (added, locale) {
        (Added::Head, Locale::Marathi) => "घराचा प्रमुख यशस्वीरित्या जोडला गेला!",
        (Added::Member, Locale::Marathi) => "कुटुंब सदस्य यशस्वीरित्या जोडला गेला!",
        (Added::Head, Locale::English) => "Head of household added successfully!",
        (Added::Member, Locale::English) => "Household member added successfully!",
    }
}

pub fn add_head(
    state: &mut AppState,
    name: &str,
    gender: &str,
    date_of_birth: &str,
) -> Result<AddedData, AppError> {
    let input = validation::validate_person(name, gender, date_of_birth, state.today())?;
    let id = state
        .registry
        .add_head(input.name, input.gender, input.date_of_birth);

    info!(household = id.0, "Head of household added");
    Ok(AddedData {
        household_id: id.0,
        person_id: id.0,
        house_number: house_number(state, id),
        message: success_message(Added::Head, state.locale()).to_string(),
    })
}

pub fn add_member(
    state: &mut AppState,
    household_id: &str,
    name: &str,
    gender: &str,
    date_of_birth: &str,
) -> Result<AddedData, AppError> {
    let household_id = validation::parse_household_id(household_id)?;
    let input = validation::validate_person(name, gender, date_of_birth, state.today())?;
    let person_id = state.registry.add_member(
        household_id,
        input.name,
        input.gender,
        input.date_of_birth,
    )?;

    info!(household = household_id.0, member = person_id.0, "Household member added");
    Ok(AddedData {
        household_id: household_id.0,
        person_id: person_id.0,
        house_number: house_number(state, household_id),
        message: success_message(Added::Member, state.locale()).to_string(),
    })
}

/// One page of households (1-based), each with its members.
pub fn list_households(state: &AppState, page: usize) -> HouseholdPage {
    let today = state.today();
    let locale = state.locale();
    let page_size = state.config.page_size.max(1);
    let total_households = state.registry.household_count();
    let total_pages = total_households.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let households = state
        .registry
        .households()
        .iter()
        .enumerate()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|(index, household)| HouseholdData {
            house_number: index + 1,
            household_id: household.id().0,
            head: build_person_data(household.head(), today, locale),
            members: household
                .members()
                .iter()
                .map(|member| build_person_data(member, today, locale))
                .collect(),
        })
        .collect();

    HouseholdPage {
        page,
        total_pages,
        total_households,
        households,
    }
}

/// Fill the session with generated households. Uses the configured seed, or
/// a random one that is then recorded in the config. Returns the seed used.
pub fn seed_sample(state: &mut AppState, households: usize) -> u64 {
    let seed = *state.config.seed.get_or_insert_with(rand::random);
    info!("Using seed: {}", seed);

    let today = state.today();
    let mut rng = StdRng::seed_from_u64(seed);
    seed_households(
        &mut state.registry,
        SampleSpec {
            households,
            ..SampleSpec::default()
        },
        today,
        &mut rng,
    );
    seed
}

fn house_number(state: &AppState, id: HouseholdId) -> usize {
    state.registry.house_number(id).unwrap_or_default()
}
