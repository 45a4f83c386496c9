//! Daily probability of COVID-19 mortality by age and time since infection.
//!
//! The model is a logistic survival curve per age decade, parameterized in
//! 8 hour periods since infection. For a decade with coefficients
//! `(multiplier, a, b, c)` the cumulative probability of death after `x`
//! periods is
//!
//! ```text
//! P(x) = multiplier/100 * a / (100 * (1 + exp(-b*(x - c))))
//! ```
//!
//! and the mortality density is its derivative with respect to `x`. Daily
//! values evaluate that density once per day and scale it by the number of
//! periods in a day, which is a rectangular integration over the day.
use crate::params::{MortalityCoefficients, MORTALITY_COEFFICIENTS, PERIODS_PER_DAY};
use crate::prelude::*;
use log::*;

/// Convert days since infection to 8 hour periods since infection.
pub fn days_to_periods(days: Real) -> Real {
    days * PERIODS_PER_DAY
}

/// Mortality curve of a single age decade.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct MortalityCurve {
    coefficients: MortalityCoefficients,
}

impl MortalityCurve {
    pub fn new(coefficients: MortalityCoefficients) -> Self {
        MortalityCurve { coefficients }
    }

    /// Curve for the decade of the given age. Ages above 80 share the 80+
    /// coefficients.
    pub fn for_age(age: Age) -> Result<Self> {
        let age = check_age(age)?;
        if age > MAX_DECADE_AGE {
            debug!(target: "mortality", "age {} uses the 80+ coefficients", age);
        }
        Ok(MortalityCurve::new(MORTALITY_COEFFICIENTS.for_age(age)))
    }

    pub fn coefficients(&self) -> MortalityCoefficients {
        self.coefficients
    }

    /// Total probability of death once the curve has saturated.
    pub fn final_probability(&self) -> Real {
        let c = &self.coefficients;
        c.multiplier() / 100.0 * c.a() / 100.0
    }

    /// Cumulative probability of death after `x` periods.
    pub fn cumulative_at_period(&self, x: Real) -> Real {
        let e = (-self.coefficients.b() * (x - self.coefficients.c())).exp();
        self.final_probability() / (1.0 + e)
    }

    /// Density of death per period at `x` periods.
    pub fn density_at_period(&self, x: Real) -> Real {
        let c = &self.coefficients;
        let e = (-c.b() * (x - c.c())).exp();
        c.multiplier() / 100.0 * (c.a() * c.b() * e / (100.0 * (1.0 + e).powi(2)))
    }

    /// Probability of death within the given day since infection.
    pub fn density(&self, days: Real) -> Real {
        PERIODS_PER_DAY * self.density_at_period(days_to_periods(days))
    }

    /// Cumulative probability of death after the given number of days.
    ///
    /// Notice the logistic never starts at zero, so this is already slightly
    /// positive at the day of infection.
    pub fn cumulative(&self, days: Real) -> Real {
        self.cumulative_at_period(days_to_periods(days))
    }
}

/// Probability density of death on the given day since infection for an
/// individual of the given age.
///
/// Ages above 80 use the 80+ decade. Negative or non-finite ages and times
/// are domain errors.
pub fn mortality_density(age: Age, days: Real) -> Result<Real> {
    let days = check_time(days)?;
    Ok(MortalityCurve::for_age(age)?.density(days))
}

/// Cumulative probability of death up to the given day since infection.
pub fn cumulative_mortality(age: Age, days: Real) -> Result<Real> {
    let days = check_time(days)?;
    Ok(MortalityCurve::for_age(age)?.cumulative(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn days_are_three_periods() {
        assert_eq!(days_to_periods(0.0), 0.0);
        assert_eq!(days_to_periods(1.0), 3.0);
        assert_eq!(days_to_periods(2.5), 7.5);
    }

    #[test]
    fn density_at_the_midpoint() {
        // At x = c the logistic derivative is a*b/4.
        let curve = MortalityCurve::for_age(25.0).unwrap();
        let c = curve.coefficients();
        let day = c.c() / 3.0;
        let expected = 3.0 * c.multiplier() / 100.0 * c.a() * c.b() / 400.0;
        assert_approx_eq!(mortality_density(25.0, day).unwrap(), expected, 1e-15);
        assert_approx_eq!(expected, 1.0631e-3, 1e-6);
    }

    #[test]
    fn density_is_the_derivative_of_cumulative() {
        let h = 1e-4;
        for &age in [5.0, 45.0, 72.0, 95.0].iter() {
            for &day in [1.0, 10.0, 17.5, 30.0].iter() {
                let slope = (cumulative_mortality(age, day + h).unwrap()
                    - cumulative_mortality(age, day - h).unwrap())
                    / (2.0 * h);
                assert_approx_eq!(slope, mortality_density(age, day).unwrap(), 1e-8);
            }
        }
    }

    #[test]
    fn daily_densities_add_up_to_final_probability() {
        for &age in [0.0, 35.0, 65.0, 80.0].iter() {
            let curve = MortalityCurve::for_age(age).unwrap();
            let total: Real = (0..200).map(|d| curve.density(d as Real)).sum();
            let expected = curve.final_probability() - curve.cumulative(0.0);
            assert_approx_eq!(total, expected, 1e-4);
        }
    }

    #[test]
    fn non_negative() {
        for age in (0..120).step_by(3) {
            for day in 0..90 {
                assert!(mortality_density(age as Real, day as Real).unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn older_decades_have_higher_peaks() {
        let young = MortalityCurve::for_age(25.0).unwrap();
        let old = MortalityCurve::for_age(85.0).unwrap();
        for &curve in [young, old].iter() {
            let peak = curve.coefficients().c() / PERIODS_PER_DAY;
            for &t in [peak - 1.0, peak, peak + 1.0].iter() {
                assert!(mortality_density(85.0, t).unwrap() >= mortality_density(25.0, t).unwrap());
            }
        }
    }

    #[test]
    fn ages_above_80_are_clamped() {
        for day in 0..60 {
            let t = day as Real + 0.25;
            assert_eq!(
                mortality_density(150.0, t).unwrap(),
                mortality_density(80.0, t).unwrap()
            );
        }
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(mortality_density(-1.0, 3.0), Err(RiskError::Domain { .. })));
        assert!(matches!(mortality_density(30.0, -0.1), Err(RiskError::Domain { .. })));
        assert!(matches!(cumulative_mortality(Real::NAN, 3.0), Err(RiskError::Domain { .. })));
    }
}
