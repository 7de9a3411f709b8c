use std::collections::HashMap;

use comfy_table::Table;

use crate::{
    page::{Page, ids},
    tables::build_results_table,
};

/// Calculator page rendered to the terminal, with the form filled in from the command line.
#[must_use]
pub struct TerminalPage {
    inputs: HashMap<&'static str, String>,
    texts: HashMap<String, String>,
}

impl TerminalPage {
    pub fn new(power: String, electricity: String, deviation1: String, deviation2: String) -> Self {
        let inputs = HashMap::from([
            (ids::POWER, power),
            (ids::ELECTRICITY, electricity),
            (ids::DEVIATION_BEFORE, deviation1),
            (ids::DEVIATION_AFTER, deviation2),
        ]);
        Self { inputs, texts: HashMap::new() }
    }

    fn text(&self, id: &str) -> &str {
        self.texts.get(id).map_or("—", String::as_str)
    }

    fn results_table(&self) -> Table {
        build_results_table(self.text(ids::PROFIT_BEFORE), self.text(ids::PROFIT_AFTER))
    }
}

impl Page for TerminalPage {
    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn set_text(&mut self, id: &str, text: String) {
        self.texts.insert(id.to_owned(), text);
    }

    fn show(&mut self, id: &str) {
        if id == ids::RESULTS {
            println!("{}", self.results_table());
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
