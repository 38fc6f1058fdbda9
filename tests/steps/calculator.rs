//! Arithmetic operation step definitions.

use calculator::{CalculatorError, Operation};
use cucumber::{then, when, World};

/// Test context for a single operation call.
#[derive(Debug, Default, World)]
pub struct CalculatorWorld {
    int_result: Option<Result<i64, CalculatorError>>,
    decimal_result: Option<Result<f64, CalculatorError>>,
}

impl CalculatorWorld {
    fn error(&self) -> Option<&CalculatorError> {
        match (&self.int_result, &self.decimal_result) {
            (Some(Err(e)), _) | (_, Some(Err(e))) => Some(e),
            _ => None,
        }
    }
}

fn operation(name: &str) -> Operation {
    name.parse().expect("scenario names a known operation")
}

// --- When steps ---

#[when(expr = "I call {word} with {int} and {int}")]
async fn when_call_with_integers(world: &mut CalculatorWorld, op: String, a: i64, b: i64) {
    world.int_result = Some(operation(&op).apply(a, b));
}

#[when(expr = "I call {word} with decimals {float} and {float}")]
async fn when_call_with_decimals(world: &mut CalculatorWorld, op: String, a: f64, b: f64) {
    world.decimal_result = Some(operation(&op).apply(a, b));
}

// --- Then steps ---

#[then(expr = "the result is {int}")]
async fn then_result_is(world: &mut CalculatorWorld, expected: i64) {
    match &world.int_result {
        Some(Ok(value)) => assert_eq!(*value, expected),
        other => panic!("Expected result {}, got {:?}", expected, other),
    }
}

#[then(expr = "the decimal result is {float}")]
async fn then_decimal_result_is(world: &mut CalculatorWorld, expected: f64) {
    match &world.decimal_result {
        Some(Ok(value)) => assert!(
            (value - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            value
        ),
        other => panic!("Expected result {}, got {:?}", expected, other),
    }
}

#[then(expr = "an invalid argument error is raised matching {string}")]
async fn then_invalid_argument(world: &mut CalculatorWorld, pattern: String) {
    let err = world.error().expect("Expected an error but the call succeeded");
    assert!(err.is_invalid_argument(), "Expected invalid argument, got {:?}", err);
    assert!(
        err.message().contains(&pattern),
        "Expected error to contain '{}', got '{}'",
        pattern,
        err.message()
    );
}
