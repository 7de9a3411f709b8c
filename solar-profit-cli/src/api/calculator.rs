use std::time::Duration;

use reqwest::{StatusCode, Url};

use crate::{
    api::models::{CalculationRequest, CalculationResults},
    prelude::*,
};

/// Failed calculation request, as seen by the user.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The server responded with a non-success status.
    #[error("Помилка сервера")]
    Server(StatusCode),

    /// The request could not be sent, or the response could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// `/calculator` endpoint client.
pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

impl Client {
    #[instrument(skip_all, fields(url = %url))]
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build().context("failed to build the HTTP client")?;
        Ok(Self { inner, url })
    }

    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResults, RequestError> {
        info!(
            ?request.power,
            ?request.electricity,
            ?request.deviation1,
            ?request.deviation2,
            "submitting…",
        );
        let response = self.inner.post(self.url.clone()).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "the server rejected the calculation");
            return Err(RequestError::Server(status));
        }
        let results: CalculationResults = response.json().await?;
        info!(?results.profit_before, ?results.profit_after, "calculated");
        Ok(results)
    }
}
