use super::MortalityCoefficients;
use crate::prelude::{AgeDecades, Real};

///////////////////////////////////////////////////////////////////////////////
// Hospitalization (Oshinubi): piecewise-constant tables keyed on age
///////////////////////////////////////////////////////////////////////////////

// Probability of hospitalization
pub const HOSPITALIZATION_PROB_LOW_BREAKPOINTS: [Real; 4] = [0.0, 20.0, 80.0, 120.0];
pub const HOSPITALIZATION_PROB_LOW: [Real; 3] = [0.001, 0.008, 0.019];
pub const HOSPITALIZATION_PROB_MODERATE_BREAKPOINTS: [Real; 4] = [0.0, 30.0, 70.0, 120.0];
pub const HOSPITALIZATION_PROB_MODERATE: [Real; 3] = [0.01, 0.03, 0.05];
pub const HOSPITALIZATION_PROB_HIGH_BREAKPOINTS: [Real; 5] = [0.0, 20.0, 40.0, 60.0, 120.0];
pub const HOSPITALIZATION_PROB_HIGH: [Real; 4] = [0.02, 0.033, 0.045, 0.1];

// Days since infection at hospitalization
pub const HOSPITALIZATION_DAY_EARLY_BREAKPOINTS: [Real; 4] = [0.0, 20.0, 80.0, 120.0];
pub const HOSPITALIZATION_DAY_EARLY: [Real; 3] = [10.0, 6.0, 5.0];
pub const HOSPITALIZATION_DAY_LATE_BREAKPOINTS: [Real; 4] = [0.0, 20.0, 80.0, 120.0];
pub const HOSPITALIZATION_DAY_LATE: [Real; 3] = [15.0, 10.0, 6.0];
pub const HOSPITALIZATION_DAY_MIXED_BREAKPOINTS: [Real; 5] = [0.0, 20.0, 40.0, 60.0, 120.0];
pub const HOSPITALIZATION_DAY_MIXED: [Real; 4] = [14.0, 10.0, 10.0, 7.0];

///////////////////////////////////////////////////////////////////////////////
// Relative infectiousness per day since infection
///////////////////////////////////////////////////////////////////////////////

/// Number of tabulated days (0 to 18).
pub const INFECTIOUSNESS_DAYS: usize = 19;

/// One row per model, one column per day since infection.
pub const INFECTIOUSNESS_PER_DAY: [[Real; INFECTIOUSNESS_DAYS]; 5] = [
    // Li et al., Table 1: incubation 3.69 days, infectious until 3.69 + 3.48
    [
        0.0, 0.0, 0.0, 0.31, 1.0, 1.0, 1.0, 1.0, 0.17, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0,
    ],
    // Ke et al., Figure 3G (values after day 15 estimated by eye)
    [
        0.0, 0.3, 0.9, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.9, 0.9, 0.8, 0.6, 0.4,
        0.2, 0.0,
    ],
    // Ke et al., Figure 3C
    [
        0.0, 0.1, 0.8, 1.0, 1.0, 0.9, 0.7, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0,
    ],
    // Hart et al., Figure 2a (blue curve)
    [
        0.0, 0.1, 0.4, 0.8, 1.0, 1.0, 0.8, 0.6, 0.5, 0.3, 0.2, 0.2, 0.1, 0.1, 0.0, 0.0, 0.0,
        0.0, 0.0,
    ],
    // Bottcher et al., eq. 7: gamma pdf with a = 8, b = 1.25 scaled to a peak of 1
    [
        0.00000000e+00,
        1.85046877e-03,
        6.78615268e-02,
        3.32195953e-01,
        7.13012907e-01,
        9.74090662e-01,
        1.00000000e+00,
        8.42867727e-01,
        6.14943126e-01,
        4.01822736e-01,
        2.40695980e-01,
        1.34384609e-01,
        7.07947994e-02,
        3.55195943e-02,
        1.70959279e-02,
        7.93902445e-03,
        3.57355197e-03,
        1.56507290e-03,
        6.69008375e-04,
    ],
];

///////////////////////////////////////////////////////////////////////////////
// Mortality (Castiglione et al.): logistic coefficients per age decade
///////////////////////////////////////////////////////////////////////////////

/// Number of 8 hour periods in a day. The mortality curve is parameterized in
/// periods, not days.
pub const PERIODS_PER_DAY: Real = 3.0;

pub const MORTALITY_COEFFICIENTS: AgeDecades<MortalityCoefficients> = [
    MortalityCoefficients::new(0.39, 96.56299632152, 0.185777403544838, 49.8164210315686),
    MortalityCoefficients::new(0.79, 96.56299632152, 0.185777403544838, 49.8164210315686),
    MortalityCoefficients::new(0.79, 96.56299632152, 0.185777403544838, 49.8164210315686),
    MortalityCoefficients::new(0.79, 96.56299632152, 0.185777403544838, 49.8164210315686),
    MortalityCoefficients::new(1.25, 95.351153808322, 0.173066025988826, 51.92498287875),
    MortalityCoefficients::new(2.38, 94.2976479245251, 0.165018635066338, 54.1494851021362),
    MortalityCoefficients::new(4.80, 91.3990353489634, 0.158299883031816, 55.5935133562513),
    MortalityCoefficients::new(7.35, 88.9048923236574, 0.152924609509616, 57.7447222979953),
    MortalityCoefficients::new(12.25, 85.6674967019556, 0.14040123117131, 61.383806850923),
];
