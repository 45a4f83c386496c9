use crate::prelude::*;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// User supplied knobs of the risk models.
///
/// Mixture weights follow the model order in the registry: low, moderate and
/// high probability models for hospitalization probability and early, late and
/// mixed models for the hospitalization onset. Missing keys take their default
/// values when parsed from TOML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RiskConfig {
    pub hospitalization_probability_weights: [Real; 3],
    pub hospitalization_onset_weights: [Real; 3],
    pub infectiousness_model: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        RiskConfig {
            hospitalization_probability_weights: [1.0; 3],
            hospitalization_onset_weights: [1.0; 3],
            infectiousness_model: InfectiousnessModel::default().index(),
        }
    }
}

impl RiskConfig {
    /// Parse configuration from TOML source.
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| RiskError::configuration(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Validate configuration and create the corresponding risk model.
    pub fn build(&self) -> Result<RiskModel> {
        Ok(RiskModel {
            probability_weights: MixtureWeights::new(self.hospitalization_probability_weights)?,
            onset_weights: MixtureWeights::new(self.hospitalization_onset_weights)?,
            infectiousness: InfectiousnessModel::try_from(self.infectiousness_model)?,
        })
    }
}

/// Risk models bound to a validated configuration.
#[derive(CopyGetters, Debug, Clone, Copy, PartialEq)]
#[getset(get_copy = "pub")]
pub struct RiskModel {
    probability_weights: MixtureWeights<3>,
    onset_weights: MixtureWeights<3>,
    infectiousness: InfectiousnessModel,
}

impl RiskModel {
    pub fn new(config: &RiskConfig) -> Result<Self> {
        config.build()
    }

    pub fn hospitalization_probability(&self, age: Age) -> Result<Real> {
        HOSPITALIZATION_PROBABILITY.evaluate(&self.probability_weights, age)
    }

    pub fn hospitalization_onset_day(&self, age: Age) -> Result<Real> {
        HOSPITALIZATION_ONSET_DAY.evaluate(&self.onset_weights, age)
    }

    pub fn relative_infectiousness(&self, day: Day) -> Result<Real> {
        self.infectiousness.at(day)
    }

    pub fn mortality_density(&self, age: Age, days: Real) -> Result<Real> {
        mortality_density(age, days)
    }

    pub fn cumulative_mortality(&self, age: Age, days: Real) -> Result<Real> {
        cumulative_mortality(age, days)
    }
}

impl Default for RiskModel {
    fn default() -> Self {
        RiskModel {
            probability_weights: MixtureWeights::uniform(),
            onset_weights: MixtureWeights::uniform(),
            infectiousness: InfectiousnessModel::default(),
        }
    }
}

impl TryFrom<&RiskConfig> for RiskModel {
    type Error = RiskError;

    fn try_from(config: &RiskConfig) -> Result<Self> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let config = RiskConfig::default();
        let data = config.to_toml().unwrap();
        assert_eq!(RiskConfig::from_toml(&data).unwrap(), config);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = RiskConfig::from_toml("hospitalization_onset_weights = [0.0, 2.0, 0.0]").unwrap();
        assert_eq!(config.hospitalization_onset_weights, [0.0, 2.0, 0.0]);
        assert_eq!(config.hospitalization_probability_weights, [1.0; 3]);
        assert_eq!(config.infectiousness_model, 4);

        let model = config.build().unwrap();
        assert_eq!(model.hospitalization_onset_day(10.0).unwrap(), 15.0);
        assert_eq!(model.relative_infectiousness(6).unwrap(), 1.0);
    }

    #[test]
    fn default_model_matches_default_config() {
        assert_eq!(RiskConfig::default().build().unwrap(), RiskModel::default());
    }

    #[test]
    fn model_answers_free_functions() {
        let config = RiskConfig {
            hospitalization_probability_weights: [0.5, 0.0, 2.0],
            hospitalization_onset_weights: [1.0, 0.0, 0.0],
            infectiousness_model: 1,
        };
        let model = RiskModel::try_from(&config).unwrap();
        for &age in [0.0, 19.0, 33.0, 61.0, 99.0].iter() {
            assert_eq!(
                model.hospitalization_probability(age).unwrap(),
                hospitalization_probability([0.5, 0.0, 2.0], age).unwrap()
            );
            assert_eq!(
                model.mortality_density(age, 12.0).unwrap(),
                mortality_density(age, 12.0).unwrap()
            );
        }
        assert_eq!(model.relative_infectiousness(2).unwrap(), 0.9);
    }

    #[test]
    fn invalid_configurations() {
        let zero = RiskConfig {
            hospitalization_probability_weights: [0.0; 3],
            ..RiskConfig::default()
        };
        assert!(matches!(zero.validate(), Err(RiskError::Configuration(_))));

        let unknown = RiskConfig {
            infectiousness_model: 9,
            ..RiskConfig::default()
        };
        assert!(matches!(unknown.validate(), Err(RiskError::NotFound { .. })));

        assert!(matches!(
            RiskConfig::from_toml("infectiousness_model = \"four\""),
            Err(RiskError::Parse(_))
        ));
    }
}
