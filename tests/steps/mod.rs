//! Step definition modules for Cucumber feature tests.

pub mod calculator;
pub mod suite;
