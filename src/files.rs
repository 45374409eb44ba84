//! File collection: expand a section's glob patterns into files to analyze.

use crate::error::LintError;
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expand `patterns` relative to `root`, dropping anything matched by an
/// `ignore` pattern.
///
/// A pattern naming an existing file or directory is taken literally, so
/// paths containing glob metacharacters still work. Directories are walked
/// recursively. Returns regular files only, sorted and deduplicated. Paths
/// and ignore patterns drop any leading `./`, so a root of `.` yields the same
/// path for a file whether it came from a literal or a glob.
pub fn collect_files(
    patterns: &[String],
    ignore: &[String],
    root: &Path,
) -> Result<Vec<PathBuf>, LintError> {
    let ignore = compile_ignore(ignore, root)?;
    let mut files = Vec::new();

    for pattern in patterns {
        let anchored = anchor(pattern, root);
        let literal = Path::new(&anchored);

        if literal.exists() {
            push_path(literal, &mut files);
            continue;
        }

        let matches = glob::glob(&anchored).map_err(|e| LintError::Glob {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        let before = files.len();
        for entry in matches {
            match entry {
                Ok(path) => push_path(&path, &mut files),
                Err(e) => warn!(pattern = %pattern, error = %e, "Skipping unreadable match"),
            }
        }
        if files.len() == before {
            warn!(pattern = %pattern, "No file matches pattern");
        }
    }

    files.retain(|path| !ignore.iter().any(|p| p.matches_path_with(path, match_options())));
    files.sort();
    files.dedup();
    debug!(count = files.len(), "Collected files");
    Ok(files)
}

fn push_path(path: &Path, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        files.push(normalize(path));
    } else if path.is_dir() {
        files.extend(
            WalkDir::new(path)
                .follow_links(false)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| normalize(entry.path())),
        );
    }
}

fn compile_ignore(ignore: &[String], root: &Path) -> Result<Vec<Pattern>, LintError> {
    ignore
        .iter()
        .map(|pattern| {
            Pattern::new(&anchor(pattern, root)).map_err(|e| LintError::Glob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

fn anchor(pattern: &str, root: &Path) -> String {
    let anchored = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        root.join(pattern)
    };
    normalize(&anchored).to_string_lossy().into_owned()
}

/// Strip `.` components. `Path::components` only keeps them in leading position.
fn normalize(path: &Path) -> PathBuf {
    let stripped: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if stripped.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        stripped
    }
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}
