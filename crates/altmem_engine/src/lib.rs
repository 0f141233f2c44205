//! Converter engine: decoding, rule-driven extraction and batch I/O.
mod batch;
mod convert;
mod decode;
mod discover;
mod error;
mod persist;
mod rules;
mod serialize;
mod transform;

pub use batch::{
    convert_individual, convert_merged, run_batch, BatchMode, BatchReport, BatchSettings,
};
pub use convert::{
    parse_document, ConversionFailure, ConversionResult, ConvertOptions, ConvertedDocument,
    DocumentConverter,
};
pub use decode::{
    candidates_for, decode_document, normalize_declaration, DecodedDocument, EncodingError,
    TextEncoding,
};
pub use discover::{discover_inputs, normalize_extension, DiscoveryOptions, DEFAULT_EXTENSIONS};
pub use error::{BatchError, ConversionError, OutputError};
pub use persist::{ensure_output_dir, write_atomic, AtomicFileWriter, PersistError};
pub use rules::{
    locate_rules, InlineRule, PropertyRule, RulesError, TransformRules, RULES_FILE_NAME,
};
pub use serialize::{serialize_tmx, SerializeError};
pub use transform::{AltTransTransform, Transform, TransformError, TransformParams};
