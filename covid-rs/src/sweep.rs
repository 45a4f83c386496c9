//! Batch evaluation of risk queries over ranges of inputs.
//!
//! A point that fails never aborts the rest of the sweep: its error is kept
//! next to the successful values.
use crate::params::{INFECTIOUSNESS_DAYS, INFECTIOUSNESS_PER_DAY};
use crate::prelude::*;
use log::*;
use ndarray::Array2;

/// Evaluate f at each input, returning one result per point in input order.
pub fn sweep<F>(inputs: &[Real], f: F) -> Vec<Result<Real>>
where
    F: Fn(Real) -> Result<Real>,
{
    inputs
        .iter()
        .map(|&x| {
            let res = f(x);
            if let Err(e) = &res {
                warn!(target: "sweep", "point {} failed: {}", x, e);
            }
            res
        })
        .collect()
}

/// A failed point of a grid sweep.
#[derive(Debug)]
pub struct GridFailure {
    pub row: usize,
    pub col: usize,
    pub error: RiskError,
}

/// Values of a grid sweep. Failed points hold NaN and are listed in
/// `failures`.
#[derive(Debug)]
pub struct SweepGrid {
    values: Array2<Real>,
    failures: Vec<GridFailure>,
}

impl SweepGrid {
    pub fn values(&self) -> &Array2<Real> {
        &self.values
    }

    pub fn failures(&self) -> &[GridFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_values(self) -> Array2<Real> {
        self.values
    }
}

/// Evaluate f(row, col) for every pair of rows and cols.
pub fn grid<F>(rows: &[Real], cols: &[Real], f: F) -> SweepGrid
where
    F: Fn(Real, Real) -> Result<Real>,
{
    let n = cols.len();
    let mut values = Array2::from_elem((rows.len(), n), NAN);
    let mut failures = Vec::new();
    for (row, &x) in rows.iter().enumerate() {
        for (col, &y) in cols.iter().enumerate() {
            match f(x, y) {
                Ok(v) => values[[row, col]] = v,
                Err(error) => {
                    warn!(target: "sweep", "point ({}, {}) failed: {}", x, y, error);
                    failures.push(GridFailure { row, col, error });
                }
            }
        }
    }
    SweepGrid { values, failures }
}

/// Mixture of hospitalization probabilities for each age.
pub fn hospitalization_probability_sweep(weights: [Real; 3], ages: &[Age]) -> Vec<Result<Real>> {
    sweep(ages, |age| hospitalization_probability(weights, age))
}

/// Mixture of hospitalization onset days for each age.
pub fn hospitalization_onset_sweep(weights: [Real; 3], ages: &[Age]) -> Vec<Result<Real>> {
    sweep(ages, |age| hospitalization_onset_day(weights, age))
}

/// Mortality density with one row per age and one column per day.
pub fn mortality_grid(ages: &[Age], days: &[Real]) -> SweepGrid {
    grid(ages, days, mortality_density)
}

/// All infectiousness curves with one row per model and one column per day.
pub fn infectiousness_grid() -> Array2<Real> {
    Array2::from_shape_fn(
        (INFECTIOUSNESS_PER_DAY.len(), INFECTIOUSNESS_DAYS),
        |(model, day)| INFECTIOUSNESS_PER_DAY[model][day],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_keeps_order_and_failures() {
        let ages = [10.0, -5.0, 50.0, Real::NAN, 90.0];
        let res = hospitalization_probability_sweep([1.0, 0.0, 0.0], &ages);
        assert_eq!(res.len(), 5);
        assert_eq!(*res[0].as_ref().unwrap(), 0.001);
        assert!(matches!(res[1], Err(RiskError::Domain { .. })));
        assert_eq!(*res[2].as_ref().unwrap(), 0.008);
        assert!(res[3].is_err());
        assert_eq!(*res[4].as_ref().unwrap(), 0.019);
    }

    #[test]
    fn invalid_weights_fail_every_point() {
        let ages: Vec<Age> = (5..100).step_by(5).map(|a| a as Age).collect();
        let res = hospitalization_onset_sweep([0.0; 3], &ages);
        assert_eq!(res.len(), 19);
        assert!(res.iter().all(|r| matches!(r, Err(RiskError::Configuration(_)))));
    }

    #[test]
    fn mortality_grid_matches_pointwise_queries() {
        let ages: Vec<Age> = (0..100).step_by(10).map(|a| a as Age).collect();
        let days: Vec<Real> = (0..60).map(|d| d as Real).collect();
        let grid = mortality_grid(&ages, &days);
        assert!(grid.is_complete());
        assert_eq!(grid.values().dim(), (10, 60));
        for (i, &age) in ages.iter().enumerate() {
            for (j, &day) in days.iter().enumerate() {
                assert_eq!(grid.values()[[i, j]], mortality_density(age, day).unwrap());
            }
        }
    }

    #[test]
    fn grid_with_failing_points() {
        let grid = mortality_grid(&[30.0, -1.0], &[1.0, -2.0]);
        assert!(!grid.is_complete());
        assert_eq!(grid.failures().len(), 3);
        assert!(grid.values()[[0, 0]] > 0.0);
        assert!(grid.values()[[1, 1]].is_nan());
        assert_eq!((grid.failures()[0].row, grid.failures()[0].col), (0, 1));
    }

    #[test]
    fn infectiousness_grid_rows() {
        let grid = infectiousness_grid();
        assert_eq!(grid.dim(), (5, 19));
        assert_eq!(grid[[4, 6]], 1.0);
        for model in InfectiousnessModel::ALL.iter() {
            for day in 0..INFECTIOUSNESS_DAYS {
                assert_eq!(grid[[model.index(), day]], model.at(day).unwrap());
            }
        }
    }
}
