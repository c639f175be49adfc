//! Household census engine
//!
//! Records heads of household and their members, and derives demographic
//! aggregates (gender counts, age bands, total population) on demand.

pub mod age;
pub mod components;
pub mod demographics;
pub mod error;
pub mod names;
pub mod registry;
pub mod sample;

pub use age::{age_of, describe, Age, AgeReport, Locale};
pub use components::*;
pub use demographics::{compute_aggregates, Aggregates, Bucket, DemographicSummary};
pub use error::RegistryError;
pub use registry::Registry;
