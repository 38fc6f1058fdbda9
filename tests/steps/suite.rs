//! Case suite step definitions.

use calculator::suite::{Group, Outcome};
use calculator::{Operation, Suite, SuiteReport, TestCase};
use cucumber::{given, then, when, World};

const TOLERANCE: f64 = 1e-9;

/// Test context for suite scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct SuiteWorld {
    suite: Suite,
    report: Option<SuiteReport>,
}

impl SuiteWorld {
    fn new() -> Self {
        Self {
            suite: Suite {
                name: "scenario".to_string(),
                groups: Vec::new(),
            },
            report: None,
        }
    }

    fn report(&self) -> &SuiteReport {
        self.report.as_ref().expect("suite has not been run")
    }
}

// --- Given steps ---

#[given("the reference suite")]
async fn given_reference_suite(world: &mut SuiteWorld) {
    world.suite = Suite::reference();
}

#[given("an empty suite")]
async fn given_empty_suite(world: &mut SuiteWorld) {
    world.suite.groups.clear();
}

#[given(expr = "a case {string} expecting {word} of {int} and {int} to equal {int}")]
async fn given_value_case(
    world: &mut SuiteWorld,
    name: String,
    op: String,
    lhs: i64,
    rhs: i64,
    expected: i64,
) {
    let op: Operation = op.parse().expect("scenario names a known operation");
    world.suite.groups.push(Group {
        name: "Extra".to_string(),
        cases: vec![TestCase::value(
            name,
            op,
            lhs as f64,
            rhs as f64,
            expected as f64,
        )],
    });
}

// --- When steps ---

#[when("I run the suite")]
async fn when_run_suite(world: &mut SuiteWorld) {
    world.report = Some(world.suite.run(TOLERANCE));
}

// --- Then steps ---

#[then(expr = "{int} cases pass and {int} fail")]
async fn then_counts(world: &mut SuiteWorld, passed: usize, failed: usize) {
    let report = world.report();
    assert_eq!(report.passed(), passed, "{:?}", report.results);
    assert_eq!(report.failed(), failed, "{:?}", report.results);
}

#[then(expr = "the groups are {string}")]
async fn then_groups_are(world: &mut SuiteWorld, groups: String) {
    let expected: Vec<&str> = groups.split(", ").collect();
    let actual: Vec<&str> = world.suite.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(actual, expected);
}

#[then(expr = "case {string} failed with {string}")]
async fn then_case_failed_with(world: &mut SuiteWorld, name: String, fragment: String) {
    let result = world
        .report()
        .results
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("No result for case '{}'", name));
    match &result.outcome {
        Outcome::Failed(reason) => assert!(
            reason.contains(&fragment),
            "Expected failure to contain '{}', got '{}'",
            fragment,
            reason
        ),
        Outcome::Passed => panic!("Expected case '{}' to fail", name),
    }
}
