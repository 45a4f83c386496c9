//! Disease-progression risk quantities for COVID-19 simulations.
//!
//! This crate answers four questions for an individual characterized by age
//! and time since infection:
//!
//! * the probability of hospitalization,
//! * the day since infection at which hospitalization happens,
//! * the relative infectiousness on each day since infection and
//! * the daily probability of death.
//!
//! Each quantity comes from one or more published models. Hospitalization
//! models can be blended with mixture weights.
//!
//! ```
//! use covid_risk::prelude::*;
//!
//! let prob = hospitalization_probability([1.0, 1.0, 1.0], 42.0).unwrap();
//! assert!(prob > 0.0 && prob < 1.0);
//! assert_eq!(relative_infectiousness(4, 6).unwrap(), 1.0);
//! assert!(mortality_density(150.0, 20.0).unwrap() > 0.0);
//! ```
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod prelude;
pub mod sweep;
pub mod tables;

pub use crate::config::{RiskConfig, RiskModel};
pub use crate::error::{Result, RiskError};
