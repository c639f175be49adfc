//! Raw input checks performed before anything reaches the registry.

use census::{Gender, HouseholdId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("name must not be empty")]
    EmptyName,
    #[error("unknown gender '{0}' (expected Male or Female)")]
    InvalidGender(String),
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("date of birth {date} is after today ({today})")]
    FutureBirthDate { date: NaiveDate, today: NaiveDate },
    #[error("invalid household id '{0}'")]
    InvalidHouseholdId(String),
}

/// A head or member whose fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
}

pub fn validate_person(
    name: &str,
    gender: &str,
    date_of_birth: &str,
    today: NaiveDate,
) -> Result<PersonInput, ValidationError> {
    Ok(PersonInput {
        name: parse_name(name)?,
        gender: parse_gender(gender)?,
        date_of_birth: parse_birth_date(date_of_birth, today)?,
    })
}

pub fn parse_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Accepts English names, their initials, or the Marathi labels.
pub fn parse_gender(raw: &str) -> Result<Gender, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField("gender"));
    }
    match value.to_lowercase().as_str() {
        "male" | "m" | "पुरुष" => Ok(Gender::Male),
        "female" | "f" | "स्त्री" => Ok(Gender::Female),
        _ => Err(ValidationError::InvalidGender(value.to_string())),
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField("date of birth"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// A parsed date that is not after `today`.
pub fn parse_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = parse_date(raw)?;
    if date > today {
        return Err(ValidationError::FutureBirthDate { date, today });
    }
    Ok(date)
}

pub fn parse_household_id(raw: &str) -> Result<HouseholdId, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField("household id"));
    }
    value
        .parse::<u64>()
        .map(HouseholdId)
        .map_err(|_| ValidationError::InvalidHouseholdId(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_valid_person() {
        let input = validate_person("  Asha Patil ", "F", "1990-04-12", today()).unwrap();
        assert_eq!(input.name, "Asha Patil");
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12).unwrap());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(parse_name("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_gender_spellings() {
        assert_eq!(parse_gender("MALE"), Ok(Gender::Male));
        assert_eq!(parse_gender("पुरुष"), Ok(Gender::Male));
        assert_eq!(parse_gender("स्त्री"), Ok(Gender::Female));
        assert_eq!(parse_gender(""), Err(ValidationError::MissingField("gender")));
        assert_eq!(
            parse_gender("other"),
            Err(ValidationError::InvalidGender("other".to_string()))
        );
    }

    #[test]
    fn test_birth_date_today_allowed_tomorrow_rejected() {
        assert_eq!(parse_birth_date("2025-06-01", today()), Ok(today()));

        let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(
            parse_birth_date("2025-06-02", today()),
            Err(ValidationError::FutureBirthDate { date: tomorrow, today: today() })
        );
    }

    #[test]
    fn test_bad_dates() {
        assert_eq!(
            parse_date("2025-02-30"),
            Err(ValidationError::InvalidDate("2025-02-30".to_string()))
        );
        assert_eq!(
            parse_date("01/02/2020"),
            Err(ValidationError::InvalidDate("01/02/2020".to_string()))
        );
        assert_eq!(parse_date(" "), Err(ValidationError::MissingField("date of birth")));
    }

    #[test]
    fn test_household_id() {
        assert_eq!(parse_household_id("12"), Ok(HouseholdId(12)));
        assert_eq!(
            parse_household_id("x1"),
            Err(ValidationError::InvalidHouseholdId("x1".to_string()))
        );
    }
}
