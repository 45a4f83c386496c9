use super::registry::{models, ModelInfo, RiskQuantity};
use crate::prelude::*;
use log::*;

/// Relative contribution of each sub-model of a mixture.
///
/// Weights are stored as given and only normalized when a mixture is
/// evaluated.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct MixtureWeights<const N: usize> {
    weights: [Real; N],
}

impl<const N: usize> MixtureWeights<N> {
    /// Create weights, rejecting negative or non-finite values and weights
    /// that are all zero.
    pub fn new(weights: [Real; N]) -> Result<Self> {
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(RiskError::configuration(format!(
                "mixture weights must be finite and non-negative, got {}",
                w
            )));
        }
        if weights.iter().all(|&w| w == 0.0) {
            return Err(RiskError::configuration(
                "at least one mixture weight must be nonzero",
            ));
        }
        Ok(MixtureWeights { weights })
    }

    pub fn weights(&self) -> &[Real; N] {
        &self.weights
    }

    /// Select a single sub-model.
    pub fn pure(index: usize) -> Result<Self> {
        if index >= N {
            return Err(RiskError::not_found("mixture component", index, N));
        }
        let mut weights = [0.0; N];
        weights[index] = 1.0;
        Ok(MixtureWeights { weights })
    }

    /// Give all sub-models the same weight.
    pub fn uniform() -> Self {
        MixtureWeights { weights: [1.0; N] }
    }

    /// Sum of the weights as given. May overflow to infinity for very large
    /// weights; evaluation uses [`MixtureWeights::scaled`] instead.
    pub fn total(&self) -> Real {
        self.weights.iter().sum()
    }

    /// Weights divided by the largest one. The result is in [0, 1] and its
    /// sum is finite for any valid set of weights.
    pub fn scaled(&self) -> [Real; N] {
        let max = self.weights.iter().cloned().fold(0.0, Real::max);
        let mut out = self.weights;
        for w in out.iter_mut() {
            *w /= max;
        }
        out
    }

    /// Weights rescaled to sum to one.
    pub fn normalized(&self) -> [Real; N] {
        let mut out = self.scaled();
        let total: Real = out.iter().sum();
        for w in out.iter_mut() {
            *w /= total;
        }
        out
    }
}

/// Weighted combination of age-keyed threshold tables.
///
/// The result is the weighted arithmetic mean of the sub-model outputs. Models
/// are blended in their output values, never in their breakpoints.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct MixtureModel<const N: usize> {
    quantity: RiskQuantity,
    components: [ThresholdTable; N],
}

impl<const N: usize> MixtureModel<N> {
    pub const fn new(quantity: RiskQuantity, components: [ThresholdTable; N]) -> Self {
        MixtureModel {
            quantity,
            components,
        }
    }

    pub fn quantity(&self) -> RiskQuantity {
        self.quantity
    }

    pub fn components(&self) -> &[ThresholdTable; N] {
        &self.components
    }

    pub fn component(&self, index: usize) -> Result<&ThresholdTable> {
        self.components
            .get(index)
            .ok_or_else(|| RiskError::not_found(self.quantity.name(), index, N))
    }

    /// Descriptions of the sub-models, in component order.
    pub fn labels(&self) -> &'static [ModelInfo] {
        models(self.quantity)
    }

    /// Evaluate mixture at the given age.
    pub fn evaluate(&self, weights: &MixtureWeights<N>, age: Age) -> Result<Real> {
        let age = check_age(age)?;
        let scaled = weights.scaled();
        let mut acc = 0.0;
        let mut total = 0.0;
        for (w, table) in scaled.iter().zip(self.components.iter()) {
            acc += w * table.lookup(age)?;
            total += w;
        }
        let value = acc / total;
        debug!(
            target: "mixture",
            "{}: weights={:?}, age={} -> {}",
            self.quantity.name(),
            weights.weights(),
            age,
            value
        );
        Ok(value)
    }

    /// Evaluate mixture from raw weights, validating them first.
    pub fn evaluate_raw(&self, weights: [Real; N], age: Age) -> Result<Real> {
        self.evaluate(&MixtureWeights::new(weights)?, age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const LOW: [Real; 3] = [0.0, 50.0, 100.0];
    const LOW_VALUES: [Real; 2] = [1.0, 2.0];
    const HIGH: [Real; 3] = [0.0, 30.0, 100.0];
    const HIGH_VALUES: [Real; 2] = [10.0, 20.0];

    fn mixture() -> MixtureModel<2> {
        MixtureModel::new(
            RiskQuantity::HospitalizationProbability,
            [
                ThresholdTable::new(&LOW, &LOW_VALUES).unwrap(),
                ThresholdTable::new(&HIGH, &HIGH_VALUES).unwrap(),
            ],
        )
    }

    #[test]
    fn weights_are_normalized_at_evaluation() {
        let weights = MixtureWeights::new([1.0, 3.0]).unwrap();
        assert_eq!(weights.weights(), &[1.0, 3.0]);
        let normalized = weights.normalized();
        assert_approx_eq!(normalized[0], 0.25);
        assert_approx_eq!(normalized[1], 0.75);
        assert_approx_eq!(mixture().evaluate(&weights, 10.0).unwrap(), 7.75);
    }

    #[test]
    fn pure_weights_select_one_model() {
        let m = mixture();
        assert_eq!(m.evaluate(&MixtureWeights::pure(0).unwrap(), 40.0).unwrap(), 1.0);
        assert_eq!(m.evaluate(&MixtureWeights::pure(1).unwrap(), 40.0).unwrap(), 20.0);
        assert!(matches!(
            MixtureWeights::<2>::pure(2),
            Err(RiskError::NotFound { .. })
        ));
    }

    #[test]
    fn invalid_weights() {
        assert!(matches!(
            MixtureWeights::new([0.0, 0.0]),
            Err(RiskError::Configuration(_))
        ));
        assert!(matches!(
            MixtureWeights::new([-1.0, 2.0]),
            Err(RiskError::Configuration(_))
        ));
        assert!(MixtureWeights::new([Real::NAN, 1.0]).is_err());
        assert!(matches!(
            mixture().evaluate_raw([0.0, 0.0], 10.0),
            Err(RiskError::Configuration(_))
        ));
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let weights = MixtureWeights::new([Real::MAX, Real::MAX]).unwrap();
        assert_eq!(weights.normalized(), [0.5, 0.5]);
        let value = mixture().evaluate(&weights, 10.0).unwrap();
        assert!(value.is_finite());
        assert_approx_eq!(value, 5.5);

        let weights = MixtureWeights::new([Real::MAX, 0.0]).unwrap();
        assert_eq!(mixture().evaluate(&weights, 60.0).unwrap(), 2.0);
    }

    #[test]
    fn tiny_weights_are_rescaled() {
        let weights = MixtureWeights::new([1e-320, 3e-320]).unwrap();
        assert_approx_eq!(mixture().evaluate(&weights, 10.0).unwrap(), 7.75, 1e-3);
    }

    #[test]
    fn negative_age_is_rejected() {
        let weights = MixtureWeights::uniform();
        assert!(matches!(
            mixture().evaluate(&weights, -1.0),
            Err(RiskError::Domain { .. })
        ));
    }
}
