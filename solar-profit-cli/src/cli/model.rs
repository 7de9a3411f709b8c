use std::num::NonZeroUsize;

use clap::Parser;
use solar_profit_quantities::Megawatts;

use crate::{core::calculator::Calculator, prelude::*};

#[derive(Parser)]
pub struct ModelArgs {
    /// Lowest power sold without imbalance penalties.
    #[clap(
        long = "tolerance-band-min-megawatts",
        default_value = "4.75",
        env = "TOLERANCE_BAND_MIN_MEGAWATTS"
    )]
    pub tolerance_band_min: Megawatts,

    /// Highest power sold without imbalance penalties.
    #[clap(
        long = "tolerance-band-max-megawatts",
        default_value = "5.25",
        env = "TOLERANCE_BAND_MAX_MEGAWATTS"
    )]
    pub tolerance_band_max: Megawatts,

    #[clap(long, default_value = "100000", env = "N_INTEGRATION_STEPS")]
    pub n_integration_steps: NonZeroUsize,
}

impl ModelArgs {
    pub fn calculator(&self) -> Result<Calculator> {
        ensure!(
            self.tolerance_band_min.is_finite() && self.tolerance_band_max.is_finite(),
            "the tolerance band must be finite",
        );
        ensure!(
            self.tolerance_band_min <= self.tolerance_band_max,
            "the tolerance band is empty: {:?}..={:?}",
            self.tolerance_band_min,
            self.tolerance_band_max,
        );
        Ok(Calculator::builder()
            .tolerance_band(self.tolerance_band_min..=self.tolerance_band_max)
            .n_integration_steps(self.n_integration_steps)
            .build())
    }
}
