use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use altmem_core::TmxFragment;
use altmem_logging::{altmem_debug, altmem_warn};
use roxmltree::{Document, ParsingOptions};

use crate::decode::{decode_document, TextEncoding};
use crate::error::ConversionError;
use crate::rules::TransformRules;
use crate::transform::{AltTransTransform, Transform, TransformParams};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub export_match_quality: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub fragment: TmxFragment,
    pub tu_count: usize,
    pub encoding: TextEncoding,
}

#[derive(Debug)]
pub struct ConversionFailure {
    pub input: PathBuf,
    pub error: ConversionError,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.input.display(), self.error)
    }
}

/// Exactly one per input; failures never escape as panics or early returns.
pub type ConversionResult = Result<ConvertedDocument, ConversionFailure>;

/// Single-document pipeline: read -> decode -> parse -> load rules -> transform.
#[derive(Debug, Clone)]
pub struct DocumentConverter {
    rules_path: PathBuf,
}

impl DocumentConverter {
    pub fn new(rules_path: impl Into<PathBuf>) -> Self {
        Self {
            rules_path: rules_path.into(),
        }
    }

    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    pub fn convert(&self, input: &Path, options: &ConvertOptions) -> ConversionResult {
        self.try_convert(input, options).map_err(|error| {
            altmem_warn!("Error processing {}: {}", display_name(input), error);
            ConversionFailure {
                input: input.to_path_buf(),
                error,
            }
        })
    }

    fn try_convert(
        &self,
        input: &Path,
        options: &ConvertOptions,
    ) -> Result<ConvertedDocument, ConversionError> {
        altmem_debug!("Reading: {}", display_name(input));
        let bytes = fs::read(input).map_err(|source| ConversionError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let decoded = decode_document(&bytes)?;
        if decoded.encoding != TextEncoding::Utf8 {
            altmem_debug!("Detected {} encoding", decoded.encoding);
        }
        if let Some(declared) = &decoded.replaced_declaration {
            altmem_debug!("Rewrote declared encoding {:?} to UTF-8", declared);
        }

        let document = parse_document(&decoded.text)?;
        let rules = TransformRules::load(&self.rules_path)?;
        let params = TransformParams {
            export_match_quality: options.export_match_quality,
        };
        let fragment = AltTransTransform::new(rules).apply(&document, &params)?;
        let tu_count = fragment.len();
        altmem_debug!("Extracted: {} TUs", tu_count);

        Ok(ConvertedDocument {
            fragment,
            tu_count,
            encoding: decoded.encoding,
        })
    }
}

/// Parse normalized text. DTDs are allowed since some XLIFF producers emit a DOCTYPE.
pub fn parse_document(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
