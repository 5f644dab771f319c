use crate::checks::{split_lines, CheckResult};
use crate::config::{CheckerConfig, DOCS_SUMMARY_FILE};
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

pub const NAME: &str = "Prompt docs summary table";

const SEPARATOR_PREFIX: &str = "|------";

static ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\| \[[^\]]+\]\([^)]+\) \|[^|]+\|$").unwrap()
});

pub fn check(config: &CheckerConfig) -> CheckResult {
    match fs::read_to_string(&config.docs_summary_path) {
        Ok(raw) => check_text(&raw),
        Err(error) => CheckResult::from_violations(
            NAME,
            vec![format!("Failed to read {DOCS_SUMMARY_FILE}: {error}")],
        ),
    }
}

/// Validate every data row after the separator. Rows are numbered
/// among candidate rows, not by file line.
pub fn check_text(raw: &str) -> CheckResult {
    let mut violations = Vec::new();
    let mut row_count = 0usize;

    for row in candidate_rows(raw) {
        row_count += 1;
        if !ROW_PATTERN.is_match(row) {
            violations.push(format!(
                "{DOCS_SUMMARY_FILE} row {row_count} is not a two-column Markdown table: {row}"
            ));
        }
    }

    if row_count == 0 {
        violations.push(format!(
            "{DOCS_SUMMARY_FILE} contains no table rows after the header."
        ));
    }

    CheckResult::from_violations(NAME, violations)
}

/// Lines after the first separator that start with `|`, trailing-trimmed.
fn candidate_rows(raw: &str) -> impl Iterator<Item = &str> {
    split_lines(raw)
        .skip_while(|line| !line.starts_with(SEPARATOR_PREFIX))
        .skip(1)
        .filter(|line| line.starts_with('|'))
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
}
