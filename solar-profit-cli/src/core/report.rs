use solar_profit_quantities::{Cost, MegawattHours, Megawatts, Percentage};

/// Daily outcome for one forecast accuracy.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Scenario {
    pub standard_deviation: Megawatts,

    /// Share of energy generated within the tolerance band, in whole percent.
    pub share_without_imbalance: Percentage,

    /// Energy sold without imbalances.
    pub balanced_energy: MegawattHours,

    pub revenue: Cost,

    /// Energy outside the tolerance band.
    pub imbalanced_energy: MegawattHours,

    pub penalty: Cost,
}

impl Scenario {
    pub fn profit(&self) -> Cost {
        self.revenue - self.penalty
    }
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Report {
    pub before: Scenario,
    pub after: Scenario,
}

impl Report {
    /// How much the improved forecast earns on top of the original one.
    pub fn gain(&self) -> Cost {
        self.after.profit() - self.before.profit()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.before, self.after].iter().all(|scenario| {
            scenario.share_without_imbalance.0.is_finite() && scenario.profit().is_finite()
        })
    }
}
