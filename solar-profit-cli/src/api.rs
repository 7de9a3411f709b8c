pub mod calculator;
pub mod models;
