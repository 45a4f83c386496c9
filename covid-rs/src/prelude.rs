pub use crate::config::{RiskConfig, RiskModel};
pub use crate::error::{Result, RiskError};
pub use crate::models::*;
pub use crate::tables::ThresholdTable;
use std::convert::TryFrom;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const NAN: Real = Real::NAN;

/// Age of an individual in years. Ages are continuous and have no upper
/// bound: tables clamp or index safely for very large values.
pub type Age = Real;

/// Whole days since infection, used by day-indexed tables.
pub type Day = usize;

/// Number of age decades covered by decade tables: [0, 10), [10, 20), ...,
/// [70, 80) and 80+.
pub const AGE_DECADES: usize = 9;

/// Oldest age with its own coefficients. Older ages reuse the 80+ row.
pub const MAX_DECADE_AGE: Age = 80.0;

/// A table with one entry per age decade.
pub type AgeDecades<T> = [T; AGE_DECADES];

/// Index of the decade row for the given age. Ages above 80 fall in the last
/// row.
///
/// The age must have been validated as non-negative by the caller.
pub fn decade_index(age: Age) -> usize {
    (age.min(MAX_DECADE_AGE) / 10.0).floor() as usize
}

/// Simple trait to simplify the use of age-dependent values/parameters.
pub trait ForAge<T> {
    /// Return the content of parameter for individuals with the given age.
    fn for_age(&self, age: Age) -> T;
}

impl<T> ForAge<T> for AgeDecades<T>
where
    T: Copy,
{
    fn for_age(&self, age: Age) -> T {
        self[decade_index(age).min(AGE_DECADES - 1)]
    }
}

/// Reject negative or non-finite ages.
pub fn check_age(age: Age) -> Result<Age> {
    if age.is_finite() && age >= 0.0 {
        Ok(age)
    } else {
        Err(RiskError::domain("age", age))
    }
}

/// Reject negative or non-finite times since infection.
pub fn check_time(days: Real) -> Result<Real> {
    if days.is_finite() && days >= 0.0 {
        Ok(days)
    } else {
        Err(RiskError::domain("days since infection", days))
    }
}

/// Convert a signed day count, as received from callers that cannot express
/// unsigned integers, to a table day index. Negative days are domain errors.
pub fn check_day(day: i64) -> Result<Day> {
    Day::try_from(day).map_err(|_| RiskError::domain("day since infection", day as Real))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decades_are_clamped_at_80() {
        assert_eq!(decade_index(0.0), 0);
        assert_eq!(decade_index(9.99), 0);
        assert_eq!(decade_index(10.0), 1);
        assert_eq!(decade_index(79.5), 7);
        assert_eq!(decade_index(80.0), 8);
        assert_eq!(decade_index(150.0), 8);
    }

    #[test]
    fn for_age_reads_decade_row() {
        let table: AgeDecades<usize> = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(table.for_age(35.0), 3);
        assert_eq!(table.for_age(1e6), 8);
    }

    #[test]
    fn invalid_inputs_are_domain_errors() {
        assert!(check_age(0.0).is_ok());
        assert!(matches!(check_age(-1.0), Err(RiskError::Domain { .. })));
        assert!(matches!(check_age(NAN), Err(RiskError::Domain { .. })));
        assert!(matches!(check_time(-0.5), Err(RiskError::Domain { .. })));
        assert!(check_time(Real::INFINITY).is_err());
    }

    #[test]
    fn signed_days() {
        assert_eq!(check_day(0).unwrap(), 0);
        assert_eq!(check_day(18).unwrap(), 18);
        assert!(matches!(check_day(-1), Err(RiskError::Domain { .. })));
        assert!(matches!(
            check_day(-3).and_then(|d| relative_infectiousness(2, d)),
            Err(RiskError::Domain { .. })
        ));
    }
}
