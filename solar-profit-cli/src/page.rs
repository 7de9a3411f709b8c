//! The calculator page: a form with four inputs and a hidden results panel.
//!
//! The browser runs the same flow from `assets/static/js/index.js`.

pub mod form;
pub mod terminal;

use crate::{
    api::{
        calculator::{Client, RequestError},
        models::{CalculationRequest, CalculationResults},
    },
    prelude::*,
};

/// Element ids of the page markup.
pub mod ids {
    pub const FORM: &str = "calculatorForm";
    pub const POWER: &str = "power";
    pub const ELECTRICITY: &str = "electricity";
    pub const DEVIATION_BEFORE: &str = "deviation1";
    pub const DEVIATION_AFTER: &str = "deviation2";
    pub const RESULTS: &str = "results";
    pub const PROFIT_BEFORE: &str = "profitBefore";
    pub const PROFIT_AFTER: &str = "profitAfter";
}

/// Elements are addressed by their ids.
pub trait Page {
    /// Current value of an input, `None` if there is no such input.
    fn input_value(&self, id: &str) -> Option<String>;

    fn set_text(&mut self, id: &str, text: String);

    fn show(&mut self, id: &str);

    /// Blocking message box.
    fn alert(&mut self, message: &str);
}

/// Form submission that would navigate away unless prevented.
#[must_use]
#[derive(Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handle the calculator form submission.
///
/// On failure the user is alerted and the page is otherwise left as it was.
#[instrument(skip_all, fields(form = ids::FORM))]
pub async fn submit_calculation(
    page: &mut impl Page,
    client: &Client,
    event: &mut SubmitEvent,
) -> Result<CalculationResults, RequestError> {
    event.prevent_default();
    let request = CalculationRequest::from_page(&*page);
    match client.calculate(&request).await {
        Ok(results) => {
            display_results(page, &results);
            Ok(results)
        }
        Err(error) => {
            match &error {
                RequestError::Server(status) => error!(%status, "the server has failed"),
                RequestError::Transport(error) => error!("the request has failed: {error:#}"),
            }
            page.alert(&format!("Помилка: {error}"));
            Err(error)
        }
    }
}

fn display_results(page: &mut impl Page, results: &CalculationResults) {
    page.set_text(ids::PROFIT_BEFORE, results.profit_before.to_string());
    page.set_text(ids::PROFIT_AFTER, results.profit_after.to_string());
    page.show(ids::RESULTS);
}
