//! Workflow linter seam and the `actionlint` subprocess implementation.

use serde::Deserialize;
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Environment variable that overrides the `actionlint` binary location.
pub const ACTIONLINT_ENV: &str = "ACTIONLINT";

/// One problem reported by the workflow linter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Finding {
    #[serde(rename = "filepath")]
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub kind: String,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{} {} {}",
            self.file, self.line, self.column, self.kind, self.message
        )
    }
}

#[derive(Debug, Error)]
pub enum LinterError {
    #[error("actionlint not found ({0}); install dependencies (e.g. `brew install actionlint` or `go install github.com/rhysd/actionlint/cmd/actionlint@latest`) or set ACTIONLINT")]
    NotFound(String),
    #[error("failed to run actionlint: {0}")]
    Io(#[from] std::io::Error),
    #[error("actionlint exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
    #[error("could not decode actionlint output: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Lints one workflow file's text. `path` is the repo-relative path used in findings.
#[allow(async_fn_in_trait)]
pub trait WorkflowLinter {
    async fn lint(&self, text: &str, path: &str) -> Result<Vec<Finding>, LinterError>;
}

impl<T: WorkflowLinter + ?Sized> WorkflowLinter for &T {
    async fn lint(&self, text: &str, path: &str) -> Result<Vec<Finding>, LinterError> {
        (**self).lint(text, path).await
    }
}

/// `actionlint` driven over stdin with JSON output.
#[derive(Debug, Clone)]
pub struct Actionlint {
    program: PathBuf,
}

impl Actionlint {
    /// Locate the binary and confirm it runs.
    pub async fn locate() -> Result<Self, LinterError> {
        let program = match std::env::var_os(ACTIONLINT_ENV) {
            Some(bin) => PathBuf::from(bin),
            None => which::which("actionlint")
                .map_err(|error| LinterError::NotFound(error.to_string()))?,
        };
        Self::with_program(program).await
    }

    pub async fn with_program(program: PathBuf) -> Result<Self, LinterError> {
        let output = Command::new(&program)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|error| LinterError::NotFound(format!("{}: {error}", program.display())))?;
        if !output.status.success() {
            return Err(LinterError::Failed {
                status: output.status.code().unwrap_or(1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        debug!(
            program = %program.display(),
            version = %String::from_utf8_lossy(&output.stdout).lines().next().unwrap_or(""),
            "workflow linter ready"
        );
        Ok(Self { program })
    }
}

impl WorkflowLinter for Actionlint {
    async fn lint(&self, text: &str, path: &str) -> Result<Vec<Finding>, LinterError> {
        let mut child = Command::new(&self.program)
            .args(["-format", "{{json .}}", "-stdin-filename", path, "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }
        let output = child.wait_with_output().await?;

        // 0: clean, 1: problems found; anything else is a usage or fatal error.
        match output.status.code() {
            Some(0) | Some(1) => parse_findings(&String::from_utf8_lossy(&output.stdout)),
            status => Err(LinterError::Failed {
                status: status.unwrap_or(1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}

/// Decode `{{json .}}` output. Empty output and `null` both mean no findings.
pub fn parse_findings(stdout: &str) -> Result<Vec<Finding>, LinterError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let findings: Option<Vec<Finding>> = serde_json::from_str(trimmed)?;
    Ok(findings.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actionlint_json_output() {
        let stdout = r#"[{"message":"property \"foo\" is not defined","filepath":".github/workflows/ci.yml","line":12,"column":9,"kind":"expression","snippet":"  ${{ foo }}","end_column":15}]"#;
        let findings = parse_findings(stdout).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file, ".github/workflows/ci.yml");
        assert_eq!(
            findings[0].to_string(),
            ".github/workflows/ci.yml:12:9 expression property \"foo\" is not defined"
        );
    }

    #[test]
    fn empty_and_null_output_mean_no_findings() {
        assert!(parse_findings("").unwrap().is_empty());
        assert!(parse_findings("  \n").unwrap().is_empty());
        assert!(parse_findings("null\n").unwrap().is_empty());
        assert!(parse_findings("[]\n").unwrap().is_empty());
    }

    #[test]
    fn garbage_output_is_a_decode_error() {
        assert!(matches!(
            parse_findings("not json"),
            Err(LinterError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn missing_program_is_not_found() {
        let result =
            Actionlint::with_program(PathBuf::from("this-linter-does-not-exist-xyz")).await;
        assert!(matches!(result, Err(LinterError::NotFound(_))));
    }
}
