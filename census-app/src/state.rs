use census::{Locale, Registry};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Households shown per page, as in the original table view.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Session state owned by the command loop
pub struct AppState {
    pub registry: Registry,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Reference date for ages. Read fresh on every call unless pinned.
    pub fn today(&self) -> NaiveDate {
        self.config
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub locale: Locale,
    pub json: bool,
    /// Pinned reference date; `None` follows the wall clock.
    pub today: Option<NaiveDate>,
    pub page_size: usize,
    pub sample_households: usize,
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            json: false,
            today: None,
            page_size: DEFAULT_PAGE_SIZE,
            sample_households: 0,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PersonData {
    pub id: u64,
    pub name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub age: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HouseholdData {
    pub house_number: usize,
    pub household_id: u64,
    pub head: PersonData,
    pub members: Vec<PersonData>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HouseholdPage {
    pub page: usize,
    pub total_pages: usize,
    pub total_households: usize,
    pub households: Vec<HouseholdData>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AddedData {
    pub household_id: u64,
    pub person_id: u64,
    pub house_number: usize,
    pub message: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BucketData {
    pub bucket: census::Bucket,
    pub label: String,
    pub count: usize,
    pub people: Vec<PersonData>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DemographicsData {
    pub date: NaiveDate,
    pub buckets: Vec<BucketData>,
}
