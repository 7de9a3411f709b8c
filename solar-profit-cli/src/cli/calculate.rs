use clap::Parser;
use solar_profit_quantities::{KilowattHourRate, Megawatts};

use crate::{
    cli::model::ModelArgs,
    core::calculator::PlantParameters,
    prelude::*,
    tables::build_report_table,
};

#[derive(Parser)]
pub struct CalculateArgs {
    /// Average daily power.
    #[clap(long = "power-megawatts", env = "POWER_MEGAWATTS")]
    power: Megawatts,

    /// Electricity price in hryvnias per kilowatt-hour.
    #[clap(long = "rate-per-kwh", env = "RATE_PER_KWH")]
    rate: KilowattHourRate,

    /// Forecast standard deviation before the improvement.
    #[clap(
        long = "deviation-before-megawatts",
        env = "DEVIATION_BEFORE_MEGAWATTS"
    )]
    deviation_before: Megawatts,

    /// Forecast standard deviation after the improvement.
    #[clap(
        long = "deviation-after-megawatts",
        env = "DEVIATION_AFTER_MEGAWATTS"
    )]
    deviation_after: Megawatts,

    #[clap(flatten)]
    model: ModelArgs,
}

impl CalculateArgs {
    pub fn run(&self) -> Result {
        let parameters = PlantParameters {
            power: self.power,
            rate: self.rate,
            deviation_before: self.deviation_before,
            deviation_after: self.deviation_after,
        };
        let report = self.model.calculator()?.calculate(&parameters)?;
        println!("{}", build_report_table(&report));
        Ok(())
    }
}
