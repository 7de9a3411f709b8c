pub mod calculator;
pub mod distribution;
pub mod integration;
pub mod report;
