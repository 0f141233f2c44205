use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const RULES_FILE_NAME: &str = "xliff_alttrans_to_tmx.ron";

/// Declarative extraction rules, loaded from a RON resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformRules {
    pub unit_elements: Vec<String>,
    pub alternate_element: String,
    pub source_element: String,
    pub target_element: String,
    pub file_element: String,
    pub source_language_attribute: String,
    pub target_language_attribute: String,
    #[serde(default)]
    pub unit_id_property: Option<String>,
    pub match_quality: PropertyRule,
    #[serde(default)]
    pub carried_properties: Vec<PropertyRule>,
    #[serde(default)]
    pub inline_codes: Vec<InlineRule>,
    #[serde(default = "default_skip_empty")]
    pub skip_empty_segments: bool,
}

/// Copies an attribute of the alternate translation into a TMX `<prop type=…>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyRule {
    pub attribute: String,
    pub property: String,
}

/// Maps an inline code element of the input onto a TMX inline element.
///
/// Attributes are translated by `attributes` (input name, TMX name); the first
/// input attribute producing a given TMX name wins and unlisted attributes are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InlineRule {
    pub element: String,
    /// TMX element name; the input name is kept when absent.
    #[serde(default)]
    pub emit_as: Option<String>,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl InlineRule {
    pub fn output_name(&self) -> &str {
        self.emit_as.as_deref().unwrap_or(&self.element)
    }
}

fn default_skip_empty() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("transform rules not found: {0:?}")]
    Missing(PathBuf),
    #[error("failed to read transform rules {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid transform rules {path:?}: {message}")]
    Invalid { path: PathBuf, message: String },
}

impl TransformRules {
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        if !path.is_file() {
            return Err(RulesError::Missing(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|err| RulesError::Invalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// Resolve the rules file: an explicit path wins; otherwise the first existing
/// candidate beside the executable, then under the working directory.
///
/// When nothing exists the executable-relative path is returned so the
/// eventual error names where the file was expected.
pub fn locate_rules(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let mut candidates = Vec::new();
    if let Some(dir) = &exe_dir {
        candidates.push(dir.join(RULES_FILE_NAME));
        candidates.push(dir.join("resources").join(RULES_FILE_NAME));
    }
    candidates.push(Path::new("resources").join(RULES_FILE_NAME));
    candidates.push(PathBuf::from(RULES_FILE_NAME));

    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .unwrap_or_else(|| match exe_dir {
            Some(dir) => dir.join(RULES_FILE_NAME),
            None => PathBuf::from(RULES_FILE_NAME),
        })
}
