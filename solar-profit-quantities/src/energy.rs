use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{Quantity, cost::Cost, rate::KilowattHourRate};

pub type MegawattHours = Quantity<1, 1, 0>;

impl Display for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} МВт·год", self.0)
    }
}

impl Debug for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}MWh", self.0)
    }
}

/// A megawatt-hour is a thousand kilowatt-hours, so the product is in thousands of hryvnias.
impl Mul<KilowattHourRate> for MegawattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{Hours, Megawatts};

    #[test]
    fn test_daily_revenue() {
        let energy = Megawatts::from(5) * Hours::ONE_DAY;
        assert_abs_diff_eq!(energy.into_inner(), 120.0);
        let revenue = energy * KilowattHourRate::from(7);
        assert_abs_diff_eq!(revenue.into_inner(), 840.0);
    }
}
