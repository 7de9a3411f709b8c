use serde::{Deserialize, Serialize};
use solar_profit_quantities::{Cost, KilowattHourRate, Megawatts};

use crate::core::{calculator::PlantParameters, report::Report};

/// Body of `POST /calculator`.
///
/// Missing fields default to zero.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub power: Megawatts,
    pub electricity: KilowattHourRate,
    pub deviation1: Megawatts,
    pub deviation2: Megawatts,
}

impl From<CalculationRequest> for PlantParameters {
    fn from(request: CalculationRequest) -> Self {
        Self {
            power: request.power,
            rate: request.electricity,
            deviation_before: request.deviation1,
            deviation_after: request.deviation2,
        }
    }
}

/// Response of `POST /calculator`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub profit_before: Cost,
    pub profit_after: Cost,
}

impl From<&Report> for CalculationResults {
    fn from(report: &Report) -> Self {
        Self { profit_before: report.before.profit(), profit_after: report.after.profit() }
    }
}
