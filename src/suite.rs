//! Declarative case suites.
//!
//! A suite is a list of named groups, each holding independent cases. A case
//! pairs an operation and two operands with either an expected value or an
//! expected invalid-argument failure. Suites load from YAML:
//!
//! ```yaml
//! name: calculator
//! groups:
//!   - name: Division
//!     cases:
//!       - name: divide_numbers
//!         operation: divide
//!         lhs: 10
//!         rhs: 2
//!         expected: 5
//!       - name: divide_by_zero
//!         operation: divide
//!         lhs: 10
//!         rhs: 0
//!         raises: Cannot divide by zero
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::errmsg;
use crate::operation::Operation;

/// Suite loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error("Failed to read suite file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse suite: {0}")]
    Parse(String),

    #[error("Invalid case '{group}/{name}': {reason}")]
    InvalidCase {
        group: String,
        name: String,
        reason: String,
    },
}

/// A single case: one operation on two operands and the expected outcome.
///
/// Exactly one of `expected` and `raises` must be set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub operation: Operation,
    pub lhs: f64,
    pub rhs: f64,
    /// Expected result value.
    #[serde(default)]
    pub expected: Option<f64>,
    /// Pattern the invalid-argument message must contain.
    #[serde(default)]
    pub raises: Option<String>,
}

/// What a case expects, once validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation<'a> {
    Value(f64),
    InvalidArgument(&'a str),
}

impl TestCase {
    /// Case expecting `operation(lhs, rhs) == expected`.
    pub fn value(
        name: impl Into<String>,
        operation: Operation,
        lhs: f64,
        rhs: f64,
        expected: f64,
    ) -> Self {
        Self {
            name: name.into(),
            operation,
            lhs,
            rhs,
            expected: Some(expected),
            raises: None,
        }
    }

    /// Case expecting an invalid-argument failure whose message contains `pattern`.
    pub fn raises(
        name: impl Into<String>,
        operation: Operation,
        lhs: f64,
        rhs: f64,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            operation,
            lhs,
            rhs,
            expected: None,
            raises: Some(pattern.into()),
        }
    }

    /// The validated expectation, or a description of why the case is malformed.
    pub fn expectation(&self) -> Result<Expectation<'_>, String> {
        match (self.expected, self.raises.as_deref()) {
            (Some(value), None) => Ok(Expectation::Value(value)),
            (None, Some(pattern)) => Ok(Expectation::InvalidArgument(pattern)),
            (Some(_), Some(_)) => Err("both 'expected' and 'raises' are set".to_string()),
            (None, None) => Err("one of 'expected' or 'raises' is required".to_string()),
        }
    }

    /// Execute the case and judge the outcome.
    pub fn run(&self, tolerance: f64) -> Outcome {
        let expectation = match self.expectation() {
            Ok(e) => e,
            Err(reason) => return Outcome::Failed(reason),
        };

        let actual = self.operation.apply(self.lhs, self.rhs);
        match (expectation, actual) {
            (Expectation::Value(expected), Ok(value)) if approx_eq(value, expected, tolerance) => {
                Outcome::Passed
            }
            (Expectation::Value(expected), Ok(value)) => {
                Outcome::Failed(format!("expected {expected}, got {value}"))
            }
            (Expectation::Value(expected), Err(e)) => {
                Outcome::Failed(format!("expected {expected}, got error: {e}"))
            }
            (Expectation::InvalidArgument(pattern), Err(e))
                if e.is_invalid_argument() && e.message().contains(pattern) =>
            {
                Outcome::Passed
            }
            (Expectation::InvalidArgument(pattern), Err(e)) => Outcome::Failed(format!(
                "expected invalid argument matching '{pattern}', got error: {e}"
            )),
            (Expectation::InvalidArgument(pattern), Ok(value)) => Outcome::Failed(format!(
                "expected invalid argument matching '{pattern}', got {value}"
            )),
        }
    }
}

/// A named group of cases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

/// A named collection of groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suite {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Suite {
    /// The canonical scenarios: one group per operation.
    pub fn reference() -> Self {
        Self {
            name: "calculator".to_string(),
            groups: vec![
                Group {
                    name: "Addition".to_string(),
                    cases: vec![
                        TestCase::value("add_positive_numbers", Operation::Add, 2.0, 3.0, 5.0),
                        TestCase::value("add_negative_numbers", Operation::Add, -1.0, -1.0, -2.0),
                    ],
                },
                Group {
                    name: "Subtraction".to_string(),
                    cases: vec![TestCase::value(
                        "subtract_numbers",
                        Operation::Subtract,
                        5.0,
                        3.0,
                        2.0,
                    )],
                },
                Group {
                    name: "Multiplication".to_string(),
                    cases: vec![TestCase::value(
                        "multiply_numbers",
                        Operation::Multiply,
                        4.0,
                        3.0,
                        12.0,
                    )],
                },
                Group {
                    name: "Division".to_string(),
                    cases: vec![
                        TestCase::value("divide_numbers", Operation::Divide, 10.0, 2.0, 5.0),
                        TestCase::raises(
                            "divide_by_zero",
                            Operation::Divide,
                            10.0,
                            0.0,
                            errmsg::DIVIDE_BY_ZERO,
                        ),
                    ],
                },
            ],
        }
    }

    /// Parse and validate a suite from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, SuiteError> {
        let suite: Suite =
            serde_yaml::from_str(yaml).map_err(|e| SuiteError::Parse(e.to_string()))?;
        suite.validate()?;
        Ok(suite)
    }

    /// Load and validate a suite from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SuiteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SuiteError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Check that every case declares exactly one expectation.
    pub fn validate(&self) -> Result<(), SuiteError> {
        for group in &self.groups {
            for case in &group.cases {
                case.expectation()
                    .map_err(|reason| SuiteError::InvalidCase {
                        group: group.name.clone(),
                        name: case.name.clone(),
                        reason,
                    })?;
            }
        }
        Ok(())
    }

    /// Total number of cases across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.cases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every case. Cases are independent; a failure never stops the run.
    pub fn run(&self, tolerance: f64) -> SuiteReport {
        let mut results = Vec::with_capacity(self.len());
        for group in &self.groups {
            for case in &group.cases {
                let outcome = case.run(tolerance);
                debug!(group = %group.name, case = %case.name, ?outcome, "case finished");
                results.push(CaseResult {
                    group: group.name.clone(),
                    name: case.name.clone(),
                    outcome,
                });
            }
        }

        let report = SuiteReport { results };
        info!(
            suite = %self.name,
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        report
    }
}

/// Result of executing one case.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Failed(String),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// A case's identity and outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub group: String,
    pub name: String,
    pub outcome: Outcome,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Passed => write!(f, "PASS {}::{}", self.group, self.name),
            Outcome::Failed(reason) => {
                write!(f, "FAIL {}::{} - {}", self.group, self.name, reason)
            }
        }
    }
}

/// Per-case results of a suite run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteReport {
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// One-line summary, e.g. `6 passed, 0 failed`.
    pub fn summary(&self) -> String {
        format!("{} passed, {} failed", self.passed(), self.failed())
    }
}

/// True when `a` and `b` differ by at most `tolerance`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || (a - b).abs() <= tolerance
}
