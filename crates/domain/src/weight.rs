use derive_more::{Display, Into};

/// Load in the unit the plates are labelled with.
#[derive(Into, Display, Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        if value < 0.0 {
            return Err(WeightError::Negative);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Adds `delta`, never going below zero.
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self((self.0 + delta).max(0.0))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(122.5, Ok(Weight(122.5)))]
    #[case(-5.0, Err(WeightError::Negative))]
    #[case(f64::INFINITY, Err(WeightError::NotFinite))]
    #[case(f64::NAN, Err(WeightError::NotFinite))]
    fn test_weight_new(#[case] value: f64, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case("135", Ok(Weight(135.0)))]
    #[case(" 2.5 ", Ok(Weight(2.5)))]
    #[case("-1", Err(WeightError::Negative))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from_str(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case(100.0, 5.0, 105.0)]
    #[case(100.0, -5.0, 95.0)]
    #[case(3.0, -5.0, 0.0)]
    fn test_weight_offset(#[case] weight: f64, #[case] delta: f64, #[case] expected: f64) {
        assert_eq!(Weight(weight).offset(delta), Weight(expected));
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight(165.0).to_string(), "165");
        assert_eq!(Weight(47.5).to_string(), "47.5");
    }
}
