use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::checks::CheckResult;

pub fn print_result(result: &CheckResult) {
    if result.passed {
        eprintln!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stderr, |s| s.green()),
            result.name,
            "clean".if_supports_color(Stderr, |s| s.green()),
        );
    } else {
        eprintln!(
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stderr, |s| s.red()),
            result.name,
            format!("{} violation(s)", result.violations.len())
                .if_supports_color(Stderr, |s| s.red()),
        );
        for v in &result.violations {
            eprintln!("  {v}");
        }
    }
}

/// Print the closing summary line. Returns true if every check passed.
pub fn print_summary(results: &[CheckResult]) -> bool {
    let failed = results.iter().filter(|r| !r.passed).count();
    let total_violations: usize = results.iter().map(|r| r.violations.len()).sum();

    if failed == 0 {
        eprintln!(
            "{}",
            format!("All {}/{} checks passed.", results.len(), results.len())
                .if_supports_color(Stderr, |s| s.green()),
        );
        true
    } else {
        eprintln!(
            "{}",
            format!(
                "{}/{} check(s) failed with {} total violation(s).",
                failed,
                results.len(),
                total_violations,
            )
            .if_supports_color(Stderr, |s| s.red()),
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_passing_returns_true() {
        let results = vec![CheckResult::clean("lint"), CheckResult::clean("format")];
        assert!(print_summary(&results));
    }

    #[test]
    fn any_failure_returns_false() {
        let results = vec![
            CheckResult::clean("docs"),
            CheckResult::from_violations("workflows", vec!["ci.yml:1:1 syntax bad".to_string()]),
        ];
        assert!(!print_summary(&results));
    }

    #[test]
    fn empty_results_returns_true() {
        assert!(print_summary(&[]));
    }
}
