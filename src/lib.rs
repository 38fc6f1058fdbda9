//! Calculator
//!
//! Four arithmetic operations over any primitive number, with division
//! rejecting a zero divisor, plus declarative case suites that check them.

pub mod calculator;
pub mod config;
pub mod error;
pub mod operation;
pub mod suite;
pub mod utils;

pub use calculator::{add, divide, multiply, subtract, Operand};
pub use error::{CalculatorError, Result};
pub use operation::Operation;
pub use suite::{Suite, SuiteReport, TestCase};
