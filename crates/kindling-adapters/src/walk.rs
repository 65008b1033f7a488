//! Directory traversal for `kindling check <dir>`.
//!
//! Deliberately not a generic walker: the skip rules (hidden entries,
//! `node_modules`) mirror what the naming checker itself ignores, so a
//! directory check and a staged-file check agree on coverage.

use std::io;
use std::path::{Path, PathBuf};

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Collect every file under `root`, as paths relative to `root`, sorted.
///
/// Hidden entries (leading `.`) and `node_modules` are skipped entirely.
pub fn collect_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();

            if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
                continue;
            }

            if entry.file_type()?.is_dir() {
                stack.push(path);
            } else {
                let relative = path
                    .strip_prefix(root)
                    .unwrap_or(path.as_path())
                    .to_path_buf();
                files.push(relative);
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn collects_nested_files_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("src/components/Button.tsx"));
        touch(&dir.path().join("src/hooks/use-auth.ts"));
        touch(&dir.path().join("README.md"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("README.md"),
                PathBuf::from("src/components/Button.tsx"),
                PathBuf::from("src/hooks/use-auth.ts"),
            ]
        );
    }

    #[test]
    fn skips_hidden_and_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join(".git/HEAD"));
        touch(&dir.path().join(".env"));
        touch(&dir.path().join("node_modules/zod/index.js"));
        touch(&dir.path().join("src/index.ts"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(files, vec![PathBuf::from("src/index.ts")]);
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(collect_files(&missing).is_err());
    }
}
