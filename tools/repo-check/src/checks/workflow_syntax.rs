use crate::checks::{split_lines, CheckResult};
use crate::config::CheckerConfig;
use crate::walker;
use std::fs;

pub const NAME: &str = "Workflow YAML syntax";

/// Workflows must parse as YAML and keep `secrets.` out of `if:` conditions,
/// where GitHub does not allow the secrets context.
pub fn check(config: &CheckerConfig) -> CheckResult {
    if !config.workflows_dir.exists() {
        return CheckResult::clean(NAME);
    }

    let files = match walker::list_workflow_files(&config.workflows_dir) {
        Ok(files) => files,
        Err(error) => {
            return CheckResult::from_violations(
                NAME,
                vec![format!(
                    "Failed to list {}: {error}",
                    config.relative(&config.workflows_dir).display()
                )],
            )
        }
    };

    let mut violations = Vec::new();
    for file in &files {
        let rel_path = config.relative(file);
        let text = match fs::read_to_string(file) {
            Ok(text) => text,
            Err(error) => {
                violations.push(format!("Failed to read {}: {error}", rel_path.display()));
                continue;
            }
        };

        if let Err(error) = serde_yaml::from_str::<serde_yaml::Value>(&text) {
            violations.push(format!("{} is not valid YAML: {error}", rel_path.display()));
        }

        for (i, line) in split_lines(&text).enumerate() {
            if line.trim().starts_with("if:") && line.contains("secrets.") {
                violations.push(format!(
                    "{}:{} uses secrets context in if expression",
                    rel_path.display(),
                    i + 1
                ));
            }
        }
    }

    CheckResult::from_violations(NAME, violations)
}
