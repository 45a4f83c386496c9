use super::{mixture::MixtureModel, registry::RiskQuantity};
use crate::params::*;
use crate::prelude::{Age, Real, Result, ThresholdTable};
use paste::paste;

/// Probability of hospitalization as a function of age: low, moderate and
/// high probability models, in that order.
pub static HOSPITALIZATION_PROBABILITY: MixtureModel<3> = MixtureModel::new(
    RiskQuantity::HospitalizationProbability,
    [
        ThresholdTable::new_unchecked(
            &HOSPITALIZATION_PROB_LOW_BREAKPOINTS,
            &HOSPITALIZATION_PROB_LOW,
        ),
        ThresholdTable::new_unchecked(
            &HOSPITALIZATION_PROB_MODERATE_BREAKPOINTS,
            &HOSPITALIZATION_PROB_MODERATE,
        ),
        ThresholdTable::new_unchecked(
            &HOSPITALIZATION_PROB_HIGH_BREAKPOINTS,
            &HOSPITALIZATION_PROB_HIGH,
        ),
    ],
);

/// Days since infection at hospitalization as a function of age: early, late
/// and mixed hospitalization models, in that order.
pub static HOSPITALIZATION_ONSET_DAY: MixtureModel<3> = MixtureModel::new(
    RiskQuantity::HospitalizationOnset,
    [
        ThresholdTable::new_unchecked(
            &HOSPITALIZATION_DAY_EARLY_BREAKPOINTS,
            &HOSPITALIZATION_DAY_EARLY,
        ),
        ThresholdTable::new_unchecked(
            &HOSPITALIZATION_DAY_LATE_BREAKPOINTS,
            &HOSPITALIZATION_DAY_LATE,
        ),
        ThresholdTable::new_unchecked(
            &HOSPITALIZATION_DAY_MIXED_BREAKPOINTS,
            &HOSPITALIZATION_DAY_MIXED,
        ),
    ],
);

/// Create the mixture query and the single-model query for a hospitalization
/// quantity.
macro_rules! mixture_query {
    ($($name:ident => $model:ident: $doc:literal),* $(,)?) => {
        paste! {
            $(
                #[doc = $doc]
                ///
                /// Weights follow the model order of the registry and are
                /// normalized by their sum. Fails with a configuration error
                /// if all weights are zero and with a domain error for
                /// negative ages.
                pub fn $name(weights: [Real; 3], age: Age) -> Result<Real> {
                    $model.evaluate_raw(weights, age)
                }

                #[doc = $doc]
                ///
                /// Direct table value of a single literature model.
                pub fn [<$name _for_model>](index: usize, age: Age) -> Result<Real> {
                    $model.component(index)?.lookup(crate::prelude::check_age(age)?)
                }
            )*
        }
    };
}

mixture_query!(
    hospitalization_probability => HOSPITALIZATION_PROBABILITY: "Probability of hospitalization for the given age.",
    hospitalization_onset_day => HOSPITALIZATION_ONSET_DAY: "Expected days since infection at hospitalization for the given age.",
);
