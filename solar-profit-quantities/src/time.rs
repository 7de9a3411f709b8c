use std::fmt::{Debug, Formatter};

use ordered_float::OrderedFloat;

use crate::Quantity;

pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    pub const ONE_DAY: Self = Self(OrderedFloat(24.0));
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}
