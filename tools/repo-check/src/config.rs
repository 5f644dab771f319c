use std::path::{Path, PathBuf};

/// Markdown prompts scanned for trailing whitespace.
pub const PROMPTS_DIR: &str = "docs/prompts/codex";
pub const MANIFEST_FILE: &str = "package.json";
pub const DOCS_SUMMARY_FILE: &str = "docs/prompt-docs-summary.md";
pub const WORKFLOWS_DIR: &str = ".github/workflows";

pub struct CheckerConfig {
    pub root_dir: PathBuf,
    pub prompts_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub docs_summary_path: PathBuf,
    pub workflows_dir: PathBuf,
}

impl CheckerConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            prompts_dir: root.join(PROMPTS_DIR),
            manifest_path: root.join(MANIFEST_FILE),
            docs_summary_path: root.join(DOCS_SUMMARY_FILE),
            workflows_dir: root.join(WORKFLOWS_DIR),
        }
    }

    /// Discover repo root by walking up from cwd to find .git directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            if dir.join(".git").exists() {
                return Some(Self::from_root(&dir));
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Path relative to the repository root, for diagnostics.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root_dir).unwrap_or(path)
    }
}
