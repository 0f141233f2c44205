use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use altmem_logging::{altmem_debug, altmem_warn};
use regex::Regex;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: [&str; 5] = [".xlf", ".xliff", ".mxliff", ".mqxliff", ".sdlxliff"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub recursive: bool,
    /// Accepted extensions, compared case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Lowercase and ensure a leading dot: `XLF` -> `.xlf`.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Expand files, directories and `*`/`?` patterns into a sorted, deduplicated
/// list of candidate inputs. Missing paths are warned about and skipped.
pub fn discover_inputs<S: AsRef<str>>(patterns: &[S], options: &DiscoveryOptions) -> Vec<PathBuf> {
    let extensions: Vec<String> = options
        .extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect();
    let mut collector = Collector {
        extensions: &extensions,
        recursive: options.recursive,
        seen: HashSet::new(),
        found: Vec::new(),
    };

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let path = Path::new(pattern);
        if path.exists() {
            collector.visit(path);
        } else if has_wildcard(pattern) {
            let matches = expand_wildcard(path);
            if matches.is_empty() {
                altmem_warn!("Pattern matched nothing: {}", pattern);
            }
            for matched in matches {
                collector.visit(&matched);
            }
        } else {
            altmem_warn!("Path not found: {}", path.display());
        }
    }

    let mut found = collector.found;
    found.sort();
    found
}

struct Collector<'a> {
    extensions: &'a [String],
    recursive: bool,
    seen: HashSet<PathBuf>,
    found: Vec<PathBuf>,
}

impl Collector<'_> {
    fn visit(&mut self, path: &Path) {
        if path.is_file() {
            self.accept(path);
        } else if path.is_dir() {
            let max_depth = if self.recursive { usize::MAX } else { 1 };
            for entry in WalkDir::new(path)
                .min_depth(1)
                .max_depth(max_depth)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.path().is_file() {
                    self.accept(entry.path());
                }
            }
        } else {
            altmem_warn!("Path not found: {}", path.display());
        }
    }

    fn accept(&mut self, path: &Path) {
        if !self.has_accepted_extension(path) {
            altmem_debug!("Skipping {} (extension not selected)", path.display());
            return;
        }
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if self.seen.insert(key) {
            self.found.push(path.to_path_buf());
        }
    }

    fn has_accepted_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(&['*', '?'][..])
}

/// Match the last path component against the entries of its parent directory.
fn expand_wildcard(pattern: &Path) -> Vec<PathBuf> {
    let Some(name) = pattern.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Vec::new();
    };
    let dir = match pattern.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let Ok(matcher) = wildcard_regex(&name) else {
        return Vec::new();
    };
    let Ok(entries) = fs::read_dir(&dir) else {
        return Vec::new();
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| matcher.is_match(&e.file_name().to_string_lossy()))
        .map(|e| {
            if pattern.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
                e.path()
            } else {
                PathBuf::from(e.file_name())
            }
        })
        .collect();
    matches.sort();
    matches
}

fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::from(if cfg!(windows) { "(?i)^" } else { "^" });
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            other => source.push_str(&regex::escape(&other.to_string())),
        }
    }
    source.push('$');
    Regex::new(&source)
}
