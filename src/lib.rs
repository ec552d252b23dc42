//! Weather-driven watering advice.
//!
//! A stateless engine that scores weather snapshots against a fixed
//! [`WateringPolicy`]: the current conditions, today's watering windows, a
//! multi-day schedule, and whether the present hour is a good time to water.

pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod output;

pub use error::{PlantCareError, Result};
pub use logic::{WateringAdvisor, WateringPolicy};
