//! Bugify pre-check - Entry Point
//!
//! With no arguments, runs the smoke scenarios against `validate_login`.
//! With `<username> <password>`, prints the verdict for that pair using the
//! thresholds from config.toml / BUGIFY_* environment variables.

use std::process::ExitCode;

use log::{info, warn};

use bugify_precheck::PrecheckConfig;
use bugify_precheck::error::PrecheckError;
use bugify_precheck::error::handlers::{handle_error, user_message};
use bugify_precheck::smoke::run_smoke;
use bugify_precheck::utils::logging::setup_logging;

fn run_smoke_suite() -> ExitCode {
    info!("Running login pre-check smoke scenarios...");

    let outcomes = run_smoke();
    for outcome in &outcomes {
        println!(
            "[{}] validate_login({:?}, {:?}) -> {}",
            if outcome.passed() { "ok" } else { "FAIL" },
            outcome.scenario.username,
            outcome.scenario.password,
            outcome.actual
        );
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed == 0 {
        info!("All {} scenarios passed", outcomes.len());
        ExitCode::SUCCESS
    } else {
        warn!("{} of {} scenarios failed", failed, outcomes.len());
        ExitCode::FAILURE
    }
}

fn check_pair(username: &str, password: &str) -> ExitCode {
    let config = match PrecheckConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to default thresholds: {}", e);
            PrecheckConfig::default()
        }
    };

    match bugify_precheck::check_login(username, password, &config.login) {
        Ok(()) => {
            println!("accepted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = PrecheckError::from(e);
            handle_error(&err);
            println!("rejected: {}", user_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_smoke_suite(),
        [username, password] => check_pair(username, password),
        _ => {
            eprintln!("usage: bugify-precheck [<username> <password>]");
            ExitCode::from(2)
        }
    }
}
