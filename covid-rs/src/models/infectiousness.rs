use super::registry::{models, ModelInfo, RiskQuantity};
use crate::params::{INFECTIOUSNESS_DAYS, INFECTIOUSNESS_PER_DAY};
use crate::prelude::{Day, Real, Result, RiskError};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Literature sources of relative infectiousness per day since infection.
///
/// Each variant is a fixed curve over days 0 to 18. There is no
/// interpolation between days and no extrapolation outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfectiousnessModel {
    /// Table 1 of Li et al. (Science, 2020)
    LiTable1,
    /// Figure 3G of Ke et al. (medRxiv, 2020)
    KeFigure3G,
    /// Figure 3C of Ke et al. (medRxiv, 2020)
    KeFigure3C,
    /// Figure 2a, blue curve, of Hart et al. (medRxiv, 2020)
    HartFigure2a,
    /// Equation 7 of Bottcher et al. (Physical Biology, 2020)
    BottcherEq7,
}

impl InfectiousnessModel {
    pub const ALL: [InfectiousnessModel; 5] = [
        InfectiousnessModel::LiTable1,
        InfectiousnessModel::KeFigure3G,
        InfectiousnessModel::KeFigure3C,
        InfectiousnessModel::HartFigure2a,
        InfectiousnessModel::BottcherEq7,
    ];

    pub fn index(self) -> usize {
        match self {
            InfectiousnessModel::LiTable1 => 0,
            InfectiousnessModel::KeFigure3G => 1,
            InfectiousnessModel::KeFigure3C => 2,
            InfectiousnessModel::HartFigure2a => 3,
            InfectiousnessModel::BottcherEq7 => 4,
        }
    }

    /// The whole curve, indexed by day since infection.
    pub fn profile(self) -> &'static [Real; INFECTIOUSNESS_DAYS] {
        &INFECTIOUSNESS_PER_DAY[self.index()]
    }

    /// Relative infectiousness on the given day since infection.
    pub fn at(self, day: Day) -> Result<Real> {
        self.profile()
            .get(day)
            .copied()
            .ok_or_else(|| RiskError::domain("day since infection", day as Real))
    }

    /// First day in which the curve reaches its maximum.
    pub fn peak_day(self) -> Day {
        let profile = self.profile();
        let mut peak = 0;
        for (day, &x) in profile.iter().enumerate() {
            if x > profile[peak] {
                peak = day;
            }
        }
        peak
    }

    /// Curve normalized to sum to one, i.e., the probability that a
    /// transmission happens on each day since infection.
    pub fn generation_interval_pmf(self) -> Vec<Real> {
        let profile = self.profile();
        let total: Real = profile.iter().sum();
        profile.iter().map(|x| x / total).collect()
    }

    pub fn info(self) -> &'static ModelInfo {
        &models(RiskQuantity::Infectiousness)[self.index()]
    }
}

impl Default for InfectiousnessModel {
    fn default() -> Self {
        InfectiousnessModel::BottcherEq7
    }
}

impl TryFrom<usize> for InfectiousnessModel {
    type Error = RiskError;

    fn try_from(n: usize) -> Result<Self> {
        let all = InfectiousnessModel::ALL;
        all.get(n)
            .copied()
            .ok_or_else(|| RiskError::not_found("infectiousness", n, all.len()))
    }
}

impl From<InfectiousnessModel> for usize {
    fn from(value: InfectiousnessModel) -> usize {
        value.index()
    }
}

/// Relative infectiousness of model `model_index` (0 to 4) on the given day
/// since infection (0 to 18).
///
/// Fails with a not found error for unknown models and a domain error for
/// days outside the table.
pub fn relative_infectiousness(model_index: usize, day: Day) -> Result<Real> {
    InfectiousnessModel::try_from(model_index)?.at(day)
}
