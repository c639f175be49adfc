pub mod config;
pub mod households;
pub mod people;
pub mod population;
