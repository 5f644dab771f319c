use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect .md files in directory-traversal order.
/// A missing or unreadable directory yields nothing. Symlinks are not followed.
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    collect_md_inner(dir, &mut results);
    results
}

fn collect_md_inner(dir: &Path, results: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if file_type.is_dir() {
                collect_md_inner(&path, results);
            } else if file_type.is_file() && name.ends_with(".md") {
                results.push(path);
            }
        }
    }
}

/// Collect .yml/.yaml files directly inside `dir`, sorted by name.
/// Unlike the markdown walk, a directory that cannot be listed is an error.
pub fn list_workflow_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_yaml(&path) {
            results.push(path);
        }
    }
    results.sort();
    Ok(results)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
        .unwrap_or(false)
}
