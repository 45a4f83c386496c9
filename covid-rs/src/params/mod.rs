//! Literature-derived constants for the risk models.
//!
//! All tables are immutable and fixed at compile time. Models in
//! [`crate::models`] only ever borrow them.
mod constants;

pub use constants::*;

use crate::prelude::Real;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Coefficients of the logistic mortality curve for one age decade.
///
/// `multiplier` scales the curve by the relative mortality of the decade
/// while `a`, `b` and `c` are the height, steepness and midpoint (in 8 hour
/// periods) of the logistic.
#[derive(CopyGetters, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct MortalityCoefficients {
    multiplier: Real,
    a: Real,
    b: Real,
    c: Real,
}

impl MortalityCoefficients {
    pub const fn new(multiplier: Real, a: Real, b: Real, c: Real) -> Self {
        MortalityCoefficients {
            multiplier,
            a,
            b,
            c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mortality_multiplier_grows_with_age() {
        for pair in MORTALITY_COEFFICIENTS.windows(2) {
            assert!(pair[1].multiplier() >= pair[0].multiplier());
        }
        assert!(MORTALITY_COEFFICIENTS[8].multiplier() > MORTALITY_COEFFICIENTS[2].multiplier());
    }

    #[test]
    fn infectiousness_rows_are_bounded() {
        for row in INFECTIOUSNESS_PER_DAY.iter() {
            assert!(row.iter().all(|&x| (0.0..=1.0).contains(&x)));
            assert_eq!(row[0], 0.0);
        }
    }
}
