use std::f64::consts::PI;

use solar_profit_quantities::Megawatts;

/// Normal distribution of the generated power around the forecast.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct NormalDistribution {
    pub mean: Megawatts,
    pub standard_deviation: Megawatts,
}

impl NormalDistribution {
    /// Probability density at `x`, per megawatt.
    #[must_use]
    pub fn density(&self, x: Megawatts) -> f64 {
        let sigma = self.standard_deviation.into_inner();
        let offset = (x - self.mean).into_inner();
        (-offset.powi(2) / (2.0 * sigma.powi(2))).exp() / (sigma * (2.0 * PI).sqrt())
    }
}
