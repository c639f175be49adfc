use census::{describe, AgeReport, Locale, Person, PersonId};
use chrono::NaiveDate;

use crate::error::AppError;
use crate::state::{AppState, PersonData};
use crate::validation;

pub(crate) fn build_person_data(person: &Person, today: NaiveDate, locale: Locale) -> PersonData {
    PersonData {
        id: person.id.0,
        name: person.name.clone(),
        gender: person.gender.label(locale).to_string(),
        date_of_birth: person.date_of_birth,
        age: census::age_of(person.date_of_birth, today).label(locale),
    }
}

pub fn get_person(state: &AppState, person_id: &str) -> Result<PersonData, AppError> {
    let id = person_id
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::InvalidPersonId(person_id.trim().to_string()))?;

    state
        .registry
        .person(PersonId(id))
        .map(|person| build_person_data(person, state.today(), state.locale()))
        .ok_or(AppError::PersonNotFound(id))
}

/// Age of someone born on `date_of_birth`, as of today.
pub fn get_age(state: &AppState, date_of_birth: &str) -> Result<AgeReport, AppError> {
    let today = state.today();
    let dob = validation::parse_birth_date(date_of_birth, today)?;
    Ok(describe(dob, today, state.locale()))
}
