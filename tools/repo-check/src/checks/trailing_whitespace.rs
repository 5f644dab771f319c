use crate::checks::{split_lines, CheckResult};
use crate::config::CheckerConfig;
use crate::walker;
use std::fs;
use tracing::warn;

pub const NAME: &str = "Trailing whitespace in prompt docs";

pub fn check(config: &CheckerConfig) -> CheckResult {
    if !config.prompts_dir.exists() {
        return CheckResult::clean(NAME);
    }

    let mut violations = Vec::new();
    for file in walker::collect_markdown_files(&config.prompts_dir) {
        let rel_path = config.relative(&file);
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(error) => {
                warn!(file = %rel_path.display(), %error, "could not read markdown file");
                violations.push(format!("Failed to read {}: {}", rel_path.display(), error));
                continue;
            }
        };

        for (i, line) in split_lines(&content).enumerate() {
            let trimmed = line.trim_end();
            // Whitespace-only lines count as empty.
            if !trimmed.is_empty() && trimmed != line {
                violations.push(format!(
                    "Trailing whitespace in {}:{}",
                    rel_path.display(),
                    i + 1
                ));
            }
        }
    }

    CheckResult::from_violations(NAME, violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn passes_when_prompts_dir_is_missing() {
        let root = tempfile::tempdir().unwrap();
        let result = check(&CheckerConfig::from_root(root.path()));
        assert!(result.passed);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn passes_for_clean_files_with_crlf_and_blank_lines() {
        let root = tempfile::tempdir().unwrap();
        write_file(
            &root.path().join("docs/prompts/codex/clean.md"),
            "# Title\r\n\r\nBody text\r\n",
        );
        write_file(
            &root.path().join("docs/prompts/codex/nested/other.md"),
            "line one\n\nline two\n",
        );

        let result = check(&CheckerConfig::from_root(root.path()));
        assert!(result.passed, "{:?}", result.violations);
    }

    #[test]
    fn reports_relative_path_and_line_number() {
        let root = tempfile::tempdir().unwrap();
        write_file(
            &root.path().join("docs/prompts/codex/nested/dirty.md"),
            "# Title\nclean\ntrailing space \nindented\t\n",
        );

        let result = check(&CheckerConfig::from_root(root.path()));
        assert!(!result.passed);
        assert_eq!(
            result.violations,
            vec![
                "Trailing whitespace in docs/prompts/codex/nested/dirty.md:3".to_string(),
                "Trailing whitespace in docs/prompts/codex/nested/dirty.md:4".to_string(),
            ]
        );
    }

    #[test]
    fn whitespace_only_lines_are_exempt() {
        let root = tempfile::tempdir().unwrap();
        write_file(
            &root.path().join("docs/prompts/codex/blank.md"),
            "text\n\n   \n\t\nmore \n",
        );

        let result = check(&CheckerConfig::from_root(root.path()));
        assert_eq!(
            result.violations,
            vec!["Trailing whitespace in docs/prompts/codex/blank.md:5".to_string()]
        );
    }

    #[test]
    fn ignores_non_markdown_files() {
        let root = tempfile::tempdir().unwrap();
        write_file(&root.path().join("docs/prompts/codex/notes.txt"), "dirty  \n");

        assert!(check(&CheckerConfig::from_root(root.path())).passed);
    }
}
