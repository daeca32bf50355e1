//! Discovery of the source files a lint run covers.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::core::parsers::SOURCE_EXTENSIONS;

/// Directories never worth linting.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/node_modules/**", "**/.git/**"];

/// Result of scanning files.
pub struct ScanResult {
    /// Sorted, de-duplicated file paths.
    pub files: BTreeSet<String>,
    /// Paths that could not be read while walking.
    pub skipped_count: usize,
}

/// Patterns with `*` or `?` are globs; anything else is a literal path.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Ignore rules of one scan. Globs are matched against the whole path,
/// literal paths (relative to the base directory) as prefixes.
struct IgnoreSet {
    globs: Vec<Pattern>,
    prefixes: Vec<PathBuf>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, patterns: &[String], verbose: bool) -> Self {
        let mut globs: Vec<Pattern> = DEFAULT_IGNORE_PATTERNS
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        let mut prefixes = Vec::new();

        for pattern in patterns {
            if !is_glob_pattern(pattern) {
                prefixes.push(base_dir.join(pattern));
                continue;
            }
            match Pattern::new(pattern) {
                Ok(glob) => globs.push(glob),
                Err(e) => warn(
                    verbose,
                    format_args!("Invalid ignore pattern '{}': {}", pattern, e),
                ),
            }
        }

        Self { globs, prefixes }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path = path.to_string_lossy();
        self.globs.iter().any(|glob| glob.matches(&path))
    }
}

/// Directories and files to walk: the base directory itself when there are no
/// includes, otherwise every existing include path or glob match.
fn include_roots(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = base_dir.join(include);
        if is_glob_pattern(include) {
            match glob(&path.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten()),
                Err(e) => warn(verbose, format_args!("Invalid glob pattern '{}': {}", include, e)),
            }
        } else if path.exists() {
            roots.push(path);
        } else {
            warn(
                verbose,
                format_args!("Include path does not exist: {}", path.display()),
            );
        }
    }
    roots
}

/// Collect the JS/TS sources under `base_dir`.
///
/// Ignored directories are pruned from the walk rather than filtered
/// afterwards, so large `node_modules` trees are never traversed.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let ignores = IgnoreSet::new(base_dir, ignore_patterns, verbose);

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in include_roots(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignores.is_ignored(entry.path()));
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_source_file(path) {
                        files.insert(path.to_string_lossy().into_owned());
                    }
                }
                Err(e) => {
                    skipped_count += 1;
                    warn(verbose, format_args!("Cannot access path: {}", e));
                }
            }
        }
    }

    tracing::debug!(files = files.len(), skipped = skipped_count, "scanned source files");

    ScanResult {
        files,
        skipped_count,
    }
}

/// JS/TS sources only; markdown and everything else is left alone.
fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
