use crate::prelude::Real;
use thiserror::Error;

/// Errors raised by risk queries. Every query is a pure computation, so
/// none of these are transient.
#[derive(Debug, Error)]
pub enum RiskError {
    /// An age, time or day index outside the domain a model is defined on.
    #[error("{quantity} = {value} is outside the supported domain")]
    Domain { quantity: &'static str, value: Real },

    /// Invalid model configuration, e.g. mixture weights that sum to zero.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A model index outside the enumerated set of models.
    #[error("{kind} model {index} does not exist ({count} available)")]
    NotFound {
        kind: &'static str,
        index: usize,
        count: usize,
    },

    #[error("cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl RiskError {
    pub fn domain(quantity: &'static str, value: Real) -> Self {
        RiskError::Domain { quantity, value }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        RiskError::Configuration(msg.into())
    }

    pub fn not_found(kind: &'static str, index: usize, count: usize) -> Self {
        RiskError::NotFound { kind, index, count }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
