use crate::checks::CheckResult;
use crate::config::{CheckerConfig, WORKFLOWS_DIR};
use crate::linter::{LinterError, WorkflowLinter};
use crate::walker;
use std::fs;
use tracing::{debug, warn};

pub const NAME: &str = "Workflow lint (actionlint)";

/// Lint each workflow file in turn. One failing file never hides the others;
/// only an unusable linter or an unlistable directory stops the scan.
pub async fn check<L: WorkflowLinter>(
    config: &CheckerConfig,
    linter: &Result<L, LinterError>,
) -> CheckResult {
    let linter = match linter {
        Ok(linter) => linter,
        Err(error) => {
            return CheckResult::from_violations(
                NAME,
                vec![format!("Unable to start workflow linter: {error}")],
            )
        }
    };

    let files = match walker::list_workflow_files(&config.workflows_dir) {
        Ok(files) => files,
        Err(error) => {
            return CheckResult::from_violations(
                NAME,
                vec![format!("Failed to list {WORKFLOWS_DIR}: {error}")],
            )
        }
    };

    let mut violations = Vec::new();
    for file in &files {
        let rel_path = config.relative(file).to_string_lossy().replace('\\', "/");
        let text = match fs::read_to_string(file) {
            Ok(text) => text,
            Err(error) => {
                warn!(file = %rel_path, %error, "could not read workflow");
                violations.push(format!("Failed to read {rel_path}: {error}"));
                continue;
            }
        };

        match linter.lint(&text, &rel_path).await {
            Ok(findings) => {
                debug!(file = %rel_path, findings = findings.len(), "linted workflow");
                violations.extend(findings.iter().map(ToString::to_string));
            }
            Err(error) => {
                warn!(file = %rel_path, %error, "workflow linter failed");
                violations.push(format!("Failed to lint {rel_path}: {error}"));
            }
        }
    }

    CheckResult::from_violations(NAME, violations)
}
