use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Deserialize, Serialize, derive_more::From)]
#[serde(transparent)]
#[must_use]
pub struct Percentage(pub f64);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction * 100.0)
    }

    #[must_use]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Round to a whole percent.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }

    /// The remaining share: `100% − self`.
    pub fn complement(self) -> Self {
        Self(Self::HUNDRED.0 - self.0)
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        assert_eq!(Percentage::from_fraction(0.2002).round(), Percentage(20.0));
        assert_eq!(Percentage::from_fraction(0.6849).round(), Percentage(68.0));
    }

    #[test]
    fn test_complement() {
        assert_eq!(Percentage(20.0).complement(), Percentage(80.0));
    }
}
