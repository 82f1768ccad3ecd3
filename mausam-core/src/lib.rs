//! Core library for the `mausam` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The forecast data model and provider abstraction
//! - The weather-condition classifier and locale tables
//! - The debounced search controller and dashboard state
//! - Gregorian to Bikram Sambat date conversion
//!
//! It is used by `mausam-cli`, but can also be reused by other front-ends.

pub mod bsdate;
pub mod condition;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod locale;
pub mod model;
pub mod provider;
pub mod search;

pub use bsdate::BsDate;
pub use condition::{ConditionEntry, IconKind, classify};
pub use config::Config;
pub use dashboard::{Dashboard, PointView};
pub use error::Error;
pub use locale::{Lang, MessageKey};
pub use model::{ForecastPoint, ForecastSeries};
pub use provider::{ForecastProvider, provider_from_config};
pub use search::{QUIET_PERIOD, SearchController, SearchQuery};
