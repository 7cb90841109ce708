//! Smoke scenarios
//!
//! The fixed credential pairs the CI smoke run checks `validate_login` against.

use log::{error, info};

use crate::auth::validate_login;

/// One smoke case: input pair and the verdict it must produce
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub username: &'static str,
    pub password: &'static str,
    pub expected: bool,
}

pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        username: "dev123@gmail.com",
        password: "123",
        expected: true,
    },
    Scenario {
        username: "",
        password: "123",
        expected: false,
    },
    Scenario {
        username: "de",
        password: "123",
        expected: false,
    },
    Scenario {
        username: "dev123@gmail.com",
        password: "12",
        expected: false,
    },
];

/// Outcome of one smoke case
#[derive(Debug, Clone, Copy)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub actual: bool,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.scenario.expected == self.actual
    }
}

/// Runs every scenario and returns one outcome per case, in order
pub fn run_smoke() -> Vec<ScenarioOutcome> {
    SCENARIOS
        .iter()
        .map(|scenario| {
            let actual = validate_login(scenario.username, scenario.password);
            let outcome = ScenarioOutcome {
                scenario: *scenario,
                actual,
            };
            if outcome.passed() {
                info!(
                    "validate_login({:?}, <{} chars>) = {}",
                    scenario.username,
                    scenario.password.chars().count(),
                    actual
                );
            } else {
                error!(
                    "validate_login({:?}, <{} chars>) = {}, expected {}",
                    scenario.username,
                    scenario.password.chars().count(),
                    actual,
                    scenario.expected
                );
            }
            outcome
        })
        .collect()
}
