use std::io;
use std::path::PathBuf;

use crate::decode::EncodingError;
use crate::persist::PersistError;
use crate::rules::RulesError;
use crate::serialize::SerializeError;
use crate::transform::TransformError;

/// Everything that can go wrong while converting one input.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("malformed XML: {0}")]
    Parse(#[from] roxmltree::Error),
    #[error("configuration error: {0}")]
    Configuration(#[from] RulesError),
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
}

/// Failure to produce an output file.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error("failed to write output: {0}")]
    Persist(#[from] PersistError),
}

/// Errors that abort a whole batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("no input files to process")]
    NoInputs,
    #[error("cannot write {path:?}: {source}")]
    Output { path: PathBuf, source: OutputError },
}
