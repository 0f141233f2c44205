use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "tmx";

const COMBINED_STEM: &str = "combined";

/// Sibling output for individual mode: same directory and stem, `.tmx` extension.
pub fn individual_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Output path for merge mode.
///
/// Without a requested path the file lands next to the first input as
/// `combined_{N}files_{T}tus.tmx`. A requested path is kept verbatim when its
/// stem already mentions the counts, otherwise `_{N}files_{T}tus` is inserted
/// before the extension.
pub fn merged_output_path(
    requested: Option<&Path>,
    first_input: &Path,
    file_count: usize,
    tu_count: usize,
) -> PathBuf {
    let suffix = count_suffix(file_count, tu_count);
    match requested {
        None => {
            let dir = containing_dir(first_input);
            dir.join(format!("{COMBINED_STEM}{suffix}.{OUTPUT_EXTENSION}"))
        }
        Some(path) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| COMBINED_STEM.to_string());
            if encodes_counts(&stem) {
                return path.to_path_buf();
            }
            let extension = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_else(|| OUTPUT_EXTENSION.to_string());
            path.with_file_name(format!("{stem}{suffix}.{extension}"))
        }
    }
}

/// Heuristic: a stem mentioning "files" or "tus" (any case) already carries counts.
pub fn encodes_counts(stem: &str) -> bool {
    let lower = stem.to_lowercase();
    lower.contains("files") || lower.contains("tus")
}

fn count_suffix(file_count: usize, tu_count: usize) -> String {
    format!("_{file_count}files_{tu_count}tus")
}

fn containing_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
