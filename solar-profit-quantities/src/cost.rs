use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Thousands of hryvnias.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Beyond this magnitude an `f64` has no fractional hundredths left to round.
    const MAX_FRACTIONAL: f64 = 1e15;

    /// Round to two decimal places, halves away from zero.
    pub fn round_to_hundredths(self) -> Self {
        if self.0.0.abs() >= Self::MAX_FRACTIONAL {
            return self;
        }
        // Adding zero turns a negative zero into a positive one.
        Self::new((self.0.0 * 100.0).round() / 100.0 + 0.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} тис.грн", self.round_to_hundredths().0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kUAH", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert_abs_diff_eq!(Cost::from(12.345).round_to_hundredths().into_inner(), 12.35);
        assert_abs_diff_eq!(Cost::from(-12.345).round_to_hundredths().into_inner(), -12.35);
        assert_abs_diff_eq!(Cost::from(0.125).round_to_hundredths().into_inner(), 0.13);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(12.345).to_string(), "12.35 тис.грн");
        assert_eq!(Cost::from(67.891).to_string(), "67.89 тис.грн");
        assert_eq!(Cost::from(-504).to_string(), "-504.00 тис.грн");
        assert_eq!(Cost::from(-0.001).to_string(), "0.00 тис.грн");
    }

    #[test]
    fn test_display_huge() {
        for value in [1e307, -1e307, f64::MAX] {
            let text = Cost::from(value).to_string();
            assert!(!text.contains("inf"), "{text}");
            assert!(text.ends_with(".00 тис.грн"), "{text}");
        }
        assert_eq!(Cost::from(1e15).round_to_hundredths(), Cost::from(1e15));
    }
}
