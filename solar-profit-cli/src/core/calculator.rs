use std::{num::NonZeroUsize, ops::RangeInclusive};

use bon::Builder;
use solar_profit_quantities::{Hours, KilowattHourRate, Megawatts, Percentage};

use crate::{
    core::{
        distribution::NormalDistribution,
        integration::trapezoid,
        report::{Report, Scenario},
    },
    prelude::*,
};

pub const DEFAULT_TOLERANCE_BAND: RangeInclusive<Megawatts> =
    Megawatts::new(4.75)..=Megawatts::new(5.25);

pub const DEFAULT_N_INTEGRATION_STEPS: NonZeroUsize = NonZeroUsize::new(100_000).unwrap();

#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("the average power must be a finite number, got {0:?}")]
    InvalidPower(Megawatts),

    #[error("the electricity price must be a finite number, got {0:?}")]
    InvalidRate(KilowattHourRate),

    #[error("the standard deviation must be a positive finite number, got {0:?}")]
    InvalidDeviation(Megawatts),

    #[error("the profit is not a finite number")]
    NonFiniteProfit,
}

/// Inputs of the profit model.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct PlantParameters {
    /// Average daily power, which is also the mean of the forecast.
    pub power: Megawatts,

    pub rate: KilowattHourRate,

    /// Standard deviation of the forecast before the improvement.
    pub deviation_before: Megawatts,

    /// Standard deviation of the forecast after the improvement.
    pub deviation_after: Megawatts,
}

impl PlantParameters {
    fn validate(&self) -> Result<(), CalculationError> {
        if !self.power.is_finite() {
            return Err(CalculationError::InvalidPower(self.power));
        }
        if !self.rate.is_finite() {
            return Err(CalculationError::InvalidRate(self.rate));
        }
        for deviation in [self.deviation_before, self.deviation_after] {
            if !deviation.is_finite() || deviation <= Megawatts::ZERO {
                return Err(CalculationError::InvalidDeviation(deviation));
            }
        }
        Ok(())
    }
}

/// Estimates the daily profit of a plant that pays a penalty for every megawatt-hour
/// generated outside the tolerance band.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Calculator {
    /// Power range sold without imbalance penalties.
    #[builder(default = DEFAULT_TOLERANCE_BAND)]
    tolerance_band: RangeInclusive<Megawatts>,

    #[builder(default = DEFAULT_N_INTEGRATION_STEPS)]
    n_integration_steps: NonZeroUsize,
}

impl Calculator {
    pub fn calculate(&self, parameters: &PlantParameters) -> Result<Report, CalculationError> {
        parameters.validate()?;
        let report = Report {
            before: self.scenario(parameters.power, parameters.rate, parameters.deviation_before),
            after: self.scenario(parameters.power, parameters.rate, parameters.deviation_after),
        };
        if !report.is_finite() {
            return Err(CalculationError::NonFiniteProfit);
        }
        debug!(
            before = ?report.before.profit(),
            after = ?report.after.profit(),
            "calculated",
        );
        Ok(report)
    }

    /// Probability that the generated power stays within the tolerance band, in whole percent.
    pub fn share_without_imbalance(
        &self,
        power: Megawatts,
        standard_deviation: Megawatts,
    ) -> Percentage {
        let distribution = NormalDistribution { mean: power, standard_deviation };
        let band = self.tolerance_band.start().into_inner()..=self.tolerance_band.end().into_inner();
        let probability = trapezoid(band, self.n_integration_steps.get(), |x| {
            distribution.density(Megawatts::new(x))
        });
        Percentage::from_fraction(probability).round()
    }

    fn scenario(
        &self,
        power: Megawatts,
        rate: KilowattHourRate,
        standard_deviation: Megawatts,
    ) -> Scenario {
        let share_without_imbalance = self.share_without_imbalance(power, standard_deviation);
        let daily_energy = power * Hours::ONE_DAY;
        let balanced_energy = daily_energy * share_without_imbalance;
        let imbalanced_energy = daily_energy * share_without_imbalance.complement();
        Scenario {
            standard_deviation,
            share_without_imbalance,
            balanced_energy,
            revenue: balanced_energy * rate,
            imbalanced_energy,
            penalty: imbalanced_energy * rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const PARAMETERS: PlantParameters = PlantParameters {
        power: Megawatts::new(5.0),
        rate: KilowattHourRate::new(7.0),
        deviation_before: Megawatts::new(1.0),
        deviation_after: Megawatts::new(0.25),
    };

    #[test]
    fn test_share_without_imbalance() {
        let calculator = Calculator::builder().build();
        assert_eq!(
            calculator.share_without_imbalance(Megawatts::from(5), Megawatts::from(1)),
            Percentage(20.0),
        );
        assert_eq!(
            calculator.share_without_imbalance(Megawatts::from(5), Megawatts::from(0.25)),
            Percentage(68.0),
        );
    }

    #[test]
    fn test_reference_plant() -> Result {
        let report = Calculator::builder().build().calculate(&PARAMETERS)?;

        assert_abs_diff_eq!(report.before.balanced_energy.into_inner(), 24.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.before.revenue.into_inner(), 168.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.before.penalty.into_inner(), 672.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.before.profit().into_inner(), -504.0, epsilon = 1e-9);

        assert_abs_diff_eq!(report.after.revenue.into_inner(), 571.2, epsilon = 1e-9);
        assert_abs_diff_eq!(report.after.penalty.into_inner(), 268.8, epsilon = 1e-9);
        assert_abs_diff_eq!(report.after.profit().into_inner(), 302.4, epsilon = 1e-9);

        assert_abs_diff_eq!(report.gain().into_inner(), 806.4, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_custom_band() -> Result {
        // The whole distribution fits into the band, so nothing is penalized.
        let report = Calculator::builder()
            .tolerance_band(Megawatts::from(0)..=Megawatts::from(10))
            .n_integration_steps(NonZeroUsize::new(10_000).unwrap())
            .build()
            .calculate(&PARAMETERS)?;
        assert_eq!(report.after.share_without_imbalance, Percentage(100.0));
        assert_abs_diff_eq!(report.after.penalty.into_inner(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.after.profit().into_inner(), 840.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_zero_deviation_is_rejected() {
        let parameters = PlantParameters { deviation_before: Megawatts::ZERO, ..PARAMETERS };
        let error = Calculator::builder().build().calculate(&parameters).unwrap_err();
        assert!(matches!(error, CalculationError::InvalidDeviation(_)));
    }

    #[test]
    fn test_negative_deviation_is_rejected() {
        let parameters = PlantParameters { deviation_after: Megawatts::from(-1), ..PARAMETERS };
        assert!(Calculator::builder().build().calculate(&parameters).is_err());
    }

    #[test]
    fn test_overflow_is_rejected() {
        let parameters = PlantParameters { power: Megawatts::new(f64::MAX), ..PARAMETERS };
        let error = Calculator::builder().build().calculate(&parameters).unwrap_err();
        assert!(matches!(error, CalculationError::NonFiniteProfit));
    }
}
