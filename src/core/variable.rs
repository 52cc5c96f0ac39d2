use std::fmt;
use std::fmt::{Display, Formatter};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::NslsError;

/// A real decision variable bounded between a lower and upper bound.
///
/// # Example
/// ```
///  use nsls::core::BoundedNumber;
///
///  let x = BoundedNumber::new("x", -5.0, 5.0).unwrap();
///  assert_eq!(x.clamp(7.2), 5.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoundedNumber {
    /// The variable name
    name: String,
    /// The minimum value bound.
    min_value: f64,
    /// The maximum value bound.
    max_value: f64,
}

impl BoundedNumber {
    /// Create a new decision variable using a number bounded between a lower and upper bound.
    /// When a new value `N` for this variable is generated, the new value will be picked such that
    /// `min_value` <= `N` <= `max_value`.
    ///
    /// # Arguments
    ///
    /// * `name`: The variable name.
    /// * `min_value`: The lower bound.
    /// * `max_value`: The upper bound.
    ///
    /// returns: `Result<BoundedNumber, NslsError>`
    pub fn new(name: &str, min_value: f64, max_value: f64) -> Result<Self, NslsError> {
        if min_value.is_infinite() || max_value.is_infinite() {
            return Err(NslsError::NonFiniteBound(
                name.to_string(),
                min_value,
                max_value,
            ));
        }
        if min_value.is_nan() || max_value.is_nan() || min_value >= max_value {
            return Err(NslsError::TooLargeLowerBound(
                min_value.to_string(),
                max_value.to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            min_value,
            max_value,
        })
    }

    /// Get the variable name.
    ///
    /// return: `String`
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// The variable lower bound.
    ///
    /// return: `f64`
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// The variable upper bound.
    ///
    /// return: `f64`
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// The variable lower and upper bound.
    ///
    /// return: `(f64, f64)`
    pub fn bounds(&self) -> (f64, f64) {
        (self.min_value, self.max_value)
    }

    /// Randomly generate a new value uniformly distributed within the bounds.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator.
    ///
    /// returns: `f64`
    pub fn generate(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(self.min_value..=self.max_value)
    }

    /// Clamp a value to the variable bounds.
    ///
    /// # Arguments
    ///
    /// * `value`: The value to clamp.
    ///
    /// returns: `f64`
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_value, self.max_value)
    }

    /// Whether `value` lies within the variable bounds.
    ///
    /// # Arguments
    ///
    /// * `value`: The value to check.
    ///
    /// returns: `bool`
    pub fn contains(&self, value: f64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }
}

impl Display for BoundedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundedNumber '{}' to [{}; {}]",
            self.name, self.min_value, self.max_value
        )
    }
}

#[cfg(test)]
mod test {
    use crate::core::utils::get_rng;
    use crate::core::{BoundedNumber, NslsError};

    #[test]
    /// Lower bound must be strictly smaller than the upper bound and both must be finite.
    fn test_invalid_bounds() {
        assert!(BoundedNumber::new("x", 1.0, 1.0).is_err());
        assert!(BoundedNumber::new("x", 2.0, 1.0).is_err());
        assert!(BoundedNumber::new("x", f64::NAN, 1.0).is_err());
        assert!(matches!(
            BoundedNumber::new("x", f64::NEG_INFINITY, 0.0),
            Err(NslsError::NonFiniteBound(_, _, _))
        ));
        assert!(BoundedNumber::new("x", 0.0, f64::INFINITY).is_err());
    }

    #[test]
    /// Generated values and clamped values are always within the bounds.
    fn test_generate_and_clamp() {
        let var = BoundedNumber::new("x", -3.0, 2.5).unwrap();
        let mut rng = get_rng(Some(1));
        for _ in 0..200 {
            assert!(var.contains(var.generate(rng.as_mut())));
        }
        assert_eq!(var.clamp(-10.0), -3.0);
        assert_eq!(var.clamp(10.0), 2.5);
        assert_eq!(var.clamp(0.1), 0.1);
    }
}
