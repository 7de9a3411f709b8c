use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use solar_profit_quantities::Cost;

use crate::core::report::{Report, Scenario};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn profit_color(profit: Cost) -> Color {
    if profit >= Cost::ZERO { Color::Green } else { Color::Red }
}

/// Results as the calculator page shows them.
pub fn build_results_table(profit_before: &str, profit_after: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Прибуток"]);
    table.add_row(vec![
        Cell::new("До вдосконалення"),
        Cell::new(profit_before).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Після вдосконалення"),
        Cell::new(profit_after).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_report_table(report: &Report) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "σ", "δW", "W₁", "П", "W₂", "Ш", "Прибуток"]);
    for (title, scenario) in [("До", &report.before), ("Після", &report.after)] {
        table.add_row(scenario_row(title, scenario));
    }
    let gain = report.gain();
    table.add_row(vec![
        Cell::new("Різниця").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(gain).set_alignment(CellAlignment::Right).fg(profit_color(gain)),
    ]);
    table
}

fn scenario_row(title: &str, scenario: &Scenario) -> Vec<Cell> {
    let profit = scenario.profit();
    vec![
        Cell::new(title),
        Cell::new(scenario.standard_deviation).add_attribute(Attribute::Dim),
        Cell::new(scenario.share_without_imbalance).set_alignment(CellAlignment::Right),
        Cell::new(scenario.balanced_energy).set_alignment(CellAlignment::Right),
        Cell::new(scenario.revenue).set_alignment(CellAlignment::Right),
        Cell::new(scenario.imbalanced_energy)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
        Cell::new(scenario.penalty).set_alignment(CellAlignment::Right).fg(Color::DarkYellow),
        Cell::new(profit).set_alignment(CellAlignment::Right).fg(profit_color(profit)),
    ]
}
