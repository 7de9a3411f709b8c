use clap::Parser;
use reqwest::Url;

use crate::{
    api::calculator::Client,
    page::{SubmitEvent, submit_calculation, terminal::TerminalPage},
    prelude::*,
};

/// The form values are taken as typed, so that anything non-numeric is submitted as zero.
#[derive(Parser)]
pub struct SubmitArgs {
    #[clap(long, default_value = "http://localhost:8080/calculator", env = "CALCULATOR_URL")]
    calculator_url: Url,

    /// No timeout unless set.
    #[clap(long, env = "CALCULATOR_TIMEOUT")]
    timeout: Option<humantime::Duration>,

    /// Average daily power, MW.
    #[clap(long, default_value = "", allow_hyphen_values = true, env = "FORM_POWER")]
    power: String,

    /// Electricity price, UAH/kWh.
    #[clap(long, default_value = "", allow_hyphen_values = true, env = "FORM_ELECTRICITY")]
    electricity: String,

    /// Forecast standard deviation before the improvement, MW.
    #[clap(long, default_value = "", allow_hyphen_values = true, env = "FORM_DEVIATION1")]
    deviation1: String,

    /// Forecast standard deviation after the improvement, MW.
    #[clap(long, default_value = "", allow_hyphen_values = true, env = "FORM_DEVIATION2")]
    deviation2: String,
}

impl SubmitArgs {
    pub async fn run(self) -> Result {
        let client = Client::new(self.calculator_url, self.timeout.map(Into::into))?;
        let mut page =
            TerminalPage::new(self.power, self.electricity, self.deviation1, self.deviation2);
        // The page has already alerted the user.
        if submit_calculation(&mut page, &client, &mut SubmitEvent::default()).await.is_err() {
            bail!("the calculation request has failed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{Router, http::StatusCode, routing::post};

    use super::*;
    use crate::{core::calculator::Calculator, server};

    #[tokio::test]
    async fn test_ok() -> Result {
        let router = server::router(Calculator::builder().build(), Duration::from_secs(10));
        let address = server::spawn(router).await?;
        let url = format!("http://{address}/calculator");
        let args = SubmitArgs::parse_from([
            "submit",
            "--calculator-url",
            &url,
            "--power",
            "5",
            "--electricity",
            "7",
            "--deviation1",
            "1",
            "--deviation2",
            "0.25",
        ]);
        args.run().await
    }

    #[tokio::test]
    async fn test_failure_is_not_repeated() -> Result {
        let router = Router::new()
            .route("/calculator", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let address = server::spawn(router).await?;
        let url = format!("http://{address}/calculator");
        let args = SubmitArgs::parse_from(["submit", "--calculator-url", &url]);

        let error = args.run().await.unwrap_err();

        assert_eq!(error.chain().count(), 1);
        assert_eq!(error.to_string(), "the calculation request has failed");
        Ok(())
    }
}
