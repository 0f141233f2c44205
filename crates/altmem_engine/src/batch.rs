use std::collections::HashMap;
use std::path::{Path, PathBuf};

use altmem_core::{
    individual_output_path, merged_output_path, render_individual_summary, render_merge_summary,
    FileRecord, RunStatistics, TmxDocument, TmxHeader,
};
use altmem_logging::{altmem_error, altmem_info, altmem_warn};

use crate::convert::{display_name, ConvertOptions, DocumentConverter};
use crate::error::{BatchError, OutputError};
use crate::persist::write_atomic;
use crate::serialize::serialize_tmx;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchMode {
    /// One `.tmx` beside every input.
    Individual,
    /// A single combined `.tmx`; `output` is the requested path, if any.
    Merge { output: Option<PathBuf> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSettings {
    pub convert: ConvertOptions,
    pub header: TmxHeader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub mode: BatchMode,
    pub statistics: RunStatistics,
    pub outputs: Vec<PathBuf>,
    /// Individual: every input converted. Merge: always true.
    pub success: bool,
}

impl BatchReport {
    pub fn render(&self) -> String {
        match (&self.mode, self.outputs.first()) {
            (BatchMode::Merge { .. }, Some(output)) => {
                render_merge_summary(&self.statistics, output)
            }
            _ => render_individual_summary(&self.statistics),
        }
    }
}

pub fn run_batch(
    mode: &BatchMode,
    inputs: &[PathBuf],
    converter: &DocumentConverter,
    settings: &BatchSettings,
) -> Result<BatchReport, BatchError> {
    match mode {
        BatchMode::Individual => Ok(convert_individual(inputs, converter, settings)),
        BatchMode::Merge { output } => {
            convert_merged(inputs, output.as_deref(), converter, settings)
        }
    }
}

/// Convert every input to its own sibling `.tmx`. A failed input yields a
/// failure record and no output; the rest of the batch carries on.
///
/// Inputs sharing a stem (`a.xlf`, `a.xliff`) map to the same `.tmx`; only the
/// first one is written and the later ones are recorded as failures.
pub fn convert_individual(
    inputs: &[PathBuf],
    converter: &DocumentConverter,
    settings: &BatchSettings,
) -> BatchReport {
    altmem_info!("INDIVIDUAL MODE: Converting {} file(s)", inputs.len());

    let mut statistics = RunStatistics::new();
    let mut outputs = Vec::new();
    let mut written: HashMap<PathBuf, String> = HashMap::new();
    for (index, input) in inputs.iter().enumerate() {
        altmem_info!("[{}/{}] {}", index + 1, inputs.len(), input.display());
        let name = display_name(input);

        let target = individual_output_path(input);
        if let Some(earlier) = written.get(&target) {
            let reason = format!(
                "output {} collides with earlier input {}",
                display_name(&target),
                earlier
            );
            altmem_warn!("Skipped {}: {}", name, reason);
            statistics.push(FileRecord::failed(name, reason));
            continue;
        }

        let converted = match converter.convert(input, &settings.convert) {
            Ok(converted) => converted,
            Err(failure) => {
                altmem_error!("Failed: {}", failure);
                statistics.push(FileRecord::failed(name, failure.error.to_string()));
                continue;
            }
        };

        let tu_count = converted.tu_count;
        let document = TmxDocument::from_fragment(settings.header.clone(), converted.fragment);
        match write_document(&document, &target) {
            Ok(path) => {
                written.insert(target, name.clone());
                altmem_info!("Output: {} ({} TUs)", display_name(&path), tu_count);
                statistics.push(FileRecord::converted(name, Some(display_name(&path)), tu_count));
                outputs.push(path);
            }
            Err(err) => {
                altmem_error!("Failed to write {}: {}", target.display(), err);
                statistics.push(FileRecord::failed(name, err.to_string()));
            }
        }
    }

    let success = statistics.all_succeeded();
    BatchReport {
        mode: BatchMode::Individual,
        statistics,
        outputs,
        success,
    }
}

/// Move the units of every successfully converted input into one document,
/// then name and write it once.
///
/// The operation reports success even when inputs failed; failures show up
/// only in the statistics.
pub fn convert_merged(
    inputs: &[PathBuf],
    requested_output: Option<&Path>,
    converter: &DocumentConverter,
    settings: &BatchSettings,
) -> Result<BatchReport, BatchError> {
    let first = inputs.first().ok_or(BatchError::NoInputs)?;
    altmem_info!(
        "MERGE MODE: Combining {} file(s) into one TMX",
        inputs.len()
    );

    let mut document = TmxDocument::new(settings.header.clone());
    let mut statistics = RunStatistics::new();
    for (index, input) in inputs.iter().enumerate() {
        altmem_info!("[{}/{}] {}", index + 1, inputs.len(), input.display());
        let name = display_name(input);
        match converter.convert(input, &settings.convert) {
            Ok(converted) => {
                let moved = document.append_fragment(converted.fragment);
                altmem_info!("Added {} TUs", moved);
                statistics.push(FileRecord::converted(name, None, moved));
            }
            Err(failure) => {
                altmem_error!("Failed: {}", failure);
                statistics.push(FileRecord::failed(name, failure.error.to_string()));
            }
        }
    }

    let target = merged_output_path(
        requested_output,
        first,
        inputs.len(),
        statistics.total_tus(),
    );
    let path = write_document(&document, &target).map_err(|source| BatchError::Output {
        path: target.clone(),
        source,
    })?;
    altmem_info!("Combined TMX saved to: {}", path.display());

    Ok(BatchReport {
        mode: BatchMode::Merge {
            output: requested_output.map(Path::to_path_buf),
        },
        statistics,
        outputs: vec![path],
        success: true,
    })
}

fn write_document(document: &TmxDocument, target: &Path) -> Result<PathBuf, OutputError> {
    let bytes = serialize_tmx(document)?;
    Ok(write_atomic(target, &bytes)?)
}
