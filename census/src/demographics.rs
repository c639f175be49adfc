//! Demographic aggregates over the whole registry
//!
//! Buckets overlap: a three-year-old boy is counted in `males` and in
//! `age_0_to_5`. Results borrow from the registry and are recomputed for
//! every query, never kept across mutations or clock changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::age::{age_of, Locale};
use crate::components::{Gender, Person};
use crate::registry::Registry;

/// Oldest whole-years age counted as a young child (inclusive).
pub const YOUNG_CHILD_MAX_YEARS: u32 = 5;

/// Ages strictly above this count as over thirty.
pub const ADULT_THRESHOLD_YEARS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Males,
    Females,
    #[serde(rename = "age_0_to_5")]
    Age0To5,
    #[serde(rename = "age_above_30")]
    AgeAbove30,
    Total,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::Males,
        Bucket::Females,
        Bucket::Age0To5,
        Bucket::AgeAbove30,
        Bucket::Total,
    ];

    /// Whether `person` falls in this bucket as of `now`.
    pub fn contains(self, person: &Person, now: NaiveDate) -> bool {
        match self {
            Bucket::Males => person.gender == Gender::Male,
            Bucket::Females => person.gender == Gender::Female,
            Bucket::Age0To5 => age_of(person.date_of_birth, now).years <= YOUNG_CHILD_MAX_YEARS,
            Bucket::AgeAbove30 => age_of(person.date_of_birth, now).years > ADULT_THRESHOLD_YEARS,
            Bucket::Total => true,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Bucket::Males, Locale::Marathi) => "एकूण पुरुष",
            (Bucket::Females, Locale::Marathi) => "एकूण महिला",
            (Bucket::Age0To5, Locale::Marathi) => "वय ०-५ वर्ष",
            (Bucket::AgeAbove30, Locale::Marathi) => "वय ३० वर्षांपेक्षा जास्त",
            (Bucket::Total, Locale::Marathi) => "एकूण लोकसंख्या",
            (Bucket::Males, Locale::English) => "Total males",
            (Bucket::Females, Locale::English) => "Total females",
            (Bucket::Age0To5, Locale::English) => "Age 0-5 years",
            (Bucket::AgeAbove30, Locale::English) => "Age above 30 years",
            (Bucket::Total, Locale::English) => "Total population",
        }
    }
}

/// Population partitioned into overlapping buckets. Every list keeps the
/// relative order of `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates<'a> {
    pub males: Vec<&'a Person>,
    pub females: Vec<&'a Person>,
    pub age_0_to_5: Vec<&'a Person>,
    pub age_above_30: Vec<&'a Person>,
    pub total: Vec<&'a Person>,
}

impl<'a> Aggregates<'a> {
    pub fn bucket(&self, bucket: Bucket) -> &[&'a Person] {
        match bucket {
            Bucket::Males => &self.males,
            Bucket::Females => &self.females,
            Bucket::Age0To5 => &self.age_0_to_5,
            Bucket::AgeAbove30 => &self.age_above_30,
            Bucket::Total => &self.total,
        }
    }

    pub fn summary(&self) -> DemographicSummary {
        DemographicSummary {
            males: self.males.len(),
            females: self.females.len(),
            age_0_to_5: self.age_0_to_5.len(),
            age_above_30: self.age_above_30.len(),
            total: self.total.len(),
        }
    }
}

/// Bucket sizes only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicSummary {
    pub males: usize,
    pub females: usize,
    pub age_0_to_5: usize,
    pub age_above_30: usize,
    pub total: usize,
}

/// Flatten the registry (each head, then its members) and partition it.
pub fn compute_aggregates(registry: &Registry, now: NaiveDate) -> Aggregates<'_> {
    let total: Vec<&Person> = registry.population().collect();

    let mut males = Vec::new();
    let mut females = Vec::new();
    let mut age_0_to_5 = Vec::new();
    let mut age_above_30 = Vec::new();

    for &person in &total {
        match person.gender {
            Gender::Male => males.push(person),
            Gender::Female => females.push(person),
        }

        let years = age_of(person.date_of_birth, now).years;
        if years <= YOUNG_CHILD_MAX_YEARS {
            age_0_to_5.push(person);
        }
        if years > ADULT_THRESHOLD_YEARS {
            age_above_30.push(person);
        }
    }

    trace!(
        total = total.len(),
        males = males.len(),
        females = females.len(),
        "Computed aggregates"
    );

    Aggregates {
        males,
        females,
        age_0_to_5,
        age_above_30,
        total,
    }
}
