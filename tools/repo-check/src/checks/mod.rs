pub mod docs_summary;
pub mod manifest_format;
pub mod trailing_whitespace;
pub mod workflow_lint;
pub mod workflow_syntax;

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub violations: Vec<String>,
}

impl CheckResult {
    pub fn from_violations(name: &str, violations: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: violations.is_empty(),
            violations,
        }
    }

    pub fn clean(name: &str) -> Self {
        Self::from_violations(name, Vec::new())
    }
}

/// Split on `\n` or `\r\n`, keeping a trailing empty segment like a plain split would.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_handles_both_endings() {
        let lines: Vec<&str> = split_lines("a\r\nb\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn split_lines_keeps_trailing_empty_segment() {
        let lines: Vec<&str> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[test]
    fn from_violations_sets_passed() {
        assert!(CheckResult::clean("x").passed);
        assert!(!CheckResult::from_violations("x", vec!["bad".to_string()]).passed);
    }
}
