pub mod checks;
pub mod config;
pub mod linter;
pub mod reporter;
pub mod walker;

use checks::CheckResult;
use config::CheckerConfig;
use linter::{LinterError, WorkflowLinter};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckCommand {
    Lint,
    Format,
    #[default]
    Test,
    Docs,
    DocsLint,
    Workflows,
}

impl CheckCommand {
    pub const ALL: [CheckCommand; 6] = [
        CheckCommand::Lint,
        CheckCommand::Format,
        CheckCommand::Test,
        CheckCommand::Docs,
        CheckCommand::DocsLint,
        CheckCommand::Workflows,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CheckCommand::Lint => "lint",
            CheckCommand::Format => "format",
            CheckCommand::Test => "test",
            CheckCommand::Docs => "docs",
            CheckCommand::DocsLint => "docs-lint",
            CheckCommand::Workflows => "workflows",
        }
    }
}

impl fmt::Display for CheckCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command '{0}'. Use one of: {}.", command_list())]
pub struct UnknownCommand(pub String);

fn command_list() -> String {
    CheckCommand::ALL
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for CheckCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckCommand::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Run every check a command maps to. Combined commands always run both
/// halves so a single run reports every problem. `make_linter` is called
/// once, and only by commands that lint workflows.
pub async fn run<L, F, Fut>(
    command: CheckCommand,
    config: &CheckerConfig,
    make_linter: F,
) -> Vec<CheckResult>
where
    L: WorkflowLinter,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<L, LinterError>>,
{
    match command {
        CheckCommand::Lint => vec![timed(|| checks::trailing_whitespace::check(config))],
        CheckCommand::Format => vec![timed(|| checks::manifest_format::check(config))],
        CheckCommand::Test => {
            let docs = timed(|| checks::docs_summary::check(config));
            let linter = make_linter().await;
            let workflows = checks::workflow_lint::check(config, &linter).await;
            vec![docs, workflows]
        }
        CheckCommand::Docs | CheckCommand::DocsLint => vec![
            timed(|| checks::docs_summary::check(config)),
            timed(|| checks::trailing_whitespace::check(config)),
        ],
        CheckCommand::Workflows => {
            let syntax = timed(|| checks::workflow_syntax::check(config));
            let linter = make_linter().await;
            let workflows = checks::workflow_lint::check(config, &linter).await;
            vec![syntax, workflows]
        }
    }
}

pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}

fn timed(check_fn: impl FnOnce() -> CheckResult) -> CheckResult {
    let start = Instant::now();
    let result = check_fn();
    debug!(check = %result.name, elapsed = ?start.elapsed(), passed = result.passed, "check finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_name() {
        for command in CheckCommand::ALL {
            assert_eq!(command.name().parse::<CheckCommand>(), Ok(command));
        }
    }

    #[test]
    fn unknown_command_lists_valid_names() {
        let error = "deploy".parse::<CheckCommand>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown command 'deploy'. Use one of: lint, format, test, docs, docs-lint, workflows."
        );
    }

    #[test]
    fn default_command_is_test() {
        assert_eq!(CheckCommand::default(), CheckCommand::Test);
    }
}
