//! Age calculation from a birth date and a reference date.
//!
//! Ages are derived on demand and never stored: the reference date advances,
//! so a cached age would drift out of its band without any mutation.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completed years plus the completed months remaining after them (0-11).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
}

/// Language for age, gender and bucket labels and app messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Marathi,
    English,
}

impl Age {
    /// Human-readable duration: the year count with a pluralized unit, then
    /// `, <months> <unit>` only when the month remainder is non-zero.
    pub fn label(&self, locale: Locale) -> String {
        let years = match locale {
            Locale::Marathi => {
                let unit = if self.years == 1 { "वर्ष" } else { "वर्षे" };
                format!("{} {}", self.years, unit)
            }
            Locale::English => {
                let unit = if self.years == 1 { "year" } else { "years" };
                format!("{} {}", self.years, unit)
            }
        };

        if self.months == 0 {
            return years;
        }

        let months = match locale {
            Locale::Marathi => format!("{} महिने", self.months),
            Locale::English => {
                let unit = if self.months == 1 { "month" } else { "months" };
                format!("{} {}", self.months, unit)
            }
        };
        format!("{}, {}", years, months)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(Locale::default()))
    }
}

/// Result of an age lookup, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeReport {
    pub years: u32,
    pub months: u32,
    pub display: String,
}

/// Whole-years-and-months age of someone born on `date_of_birth` as of `now`.
///
/// A birth date on or after `now` yields a zero age; callers reject future
/// birth dates before they reach the registry.
pub fn age_of(date_of_birth: NaiveDate, now: NaiveDate) -> Age {
    if date_of_birth >= now {
        return Age::default();
    }

    let total = completed_months(date_of_birth, now);
    Age {
        years: total / 12,
        months: total % 12,
    }
}

/// `age_of` plus its label in `locale`.
pub fn describe(date_of_birth: NaiveDate, now: NaiveDate, locale: Locale) -> AgeReport {
    let age = age_of(date_of_birth, now);
    AgeReport {
        years: age.years,
        months: age.months,
        display: age.label(locale),
    }
}

/// Whole calendar months from `from` to `to`. Month-end days clamp the same
/// way `Months` addition does, so Jan 31 plus one month is the end of Feb.
fn completed_months(from: NaiveDate, to: NaiveDate) -> u32 {
    let estimate = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = estimate.max(0) as u32;
    if months > 0 && add_months(from, months) > to {
        months -= 1;
    }
    months
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_and_months() {
        let age = age_of(date(2020, 1, 1), date(2025, 6, 1));
        assert_eq!(age, Age { years: 5, months: 5 });
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        let age = age_of(date(1990, 6, 15), date(2025, 6, 14));
        assert_eq!(age, Age { years: 34, months: 11 });

        let age = age_of(date(1990, 6, 15), date(2025, 6, 15));
        assert_eq!(age, Age { years: 35, months: 0 });
    }

    #[test]
    fn test_born_today_is_zero() {
        let today = date(2025, 3, 10);
        let age = age_of(today, today);
        assert_eq!(age, Age::default());
        assert_eq!(age.label(Locale::Marathi), "0 वर्षे");
        assert_eq!(age.label(Locale::English), "0 years");
    }

    #[test]
    fn test_future_birth_date_saturates_to_zero() {
        assert_eq!(age_of(date(2030, 1, 1), date(2025, 1, 1)), Age::default());
    }

    #[test]
    fn test_leap_day_birthday_clamps() {
        // Feb 29 plus one year lands on Feb 28
        assert_eq!(age_of(date(2020, 2, 29), date(2021, 2, 28)).years, 1);
        assert_eq!(age_of(date(2020, 2, 29), date(2021, 2, 27)).years, 0);
    }

    #[test]
    fn test_leap_day_month_remainder_stays_below_twelve() {
        // Feb 28 2024 is one day short of the fourth birthday
        assert_eq!(age_of(date(2020, 2, 29), date(2024, 2, 28)), Age { years: 3, months: 11 });
        assert_eq!(age_of(date(2020, 2, 29), date(2024, 2, 29)), Age { years: 4, months: 0 });
        assert_eq!(age_of(date(1996, 2, 29), date(2000, 2, 28)), Age { years: 3, months: 11 });
    }

    #[test]
    fn test_month_remainder_range() {
        // Month-end birthdays are the ones that clamp
        let mut dob = date(1996, 1, 28);
        while dob <= date(2000, 12, 31) {
            if dob.day() >= 28 {
                let mut now = dob;
                let end = date(dob.year() + 9, 12, 31);
                while now <= end {
                    let age = age_of(dob, now);
                    assert!(age.months <= 11, "{} -> {}: {:?}", dob, now, age);
                    now = now.succ_opt().unwrap();
                }
            }
            dob = dob.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_month_end_remainder() {
        let age = age_of(date(2000, 1, 31), date(2000, 3, 30));
        assert_eq!(age, Age { years: 0, months: 1 });
    }

    #[test]
    fn test_months_only_infant() {
        let age = age_of(date(2024, 11, 20), date(2025, 2, 20));
        assert_eq!(age, Age { years: 0, months: 3 });
        assert_eq!(age.label(Locale::Marathi), "0 वर्षे, 3 महिने");
    }

    #[test]
    fn test_marathi_label() {
        assert_eq!(Age { years: 1, months: 0 }.label(Locale::Marathi), "1 वर्ष");
        assert_eq!(Age { years: 5, months: 5 }.label(Locale::Marathi), "5 वर्षे, 5 महिने");
        assert_eq!(Age { years: 40, months: 0 }.to_string(), "40 वर्षे");
    }

    #[test]
    fn test_english_label() {
        assert_eq!(Age { years: 1, months: 1 }.label(Locale::English), "1 year, 1 month");
        assert_eq!(Age { years: 2, months: 7 }.label(Locale::English), "2 years, 7 months");
    }

    #[test]
    fn test_describe() {
        let report = describe(date(2020, 1, 1), date(2025, 6, 1), Locale::English);
        assert_eq!(report.years, 5);
        assert_eq!(report.months, 5);
        assert_eq!(report.display, "5 years, 5 months");
    }
}
