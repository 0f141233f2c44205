use crate::xml::XmlElement;

pub const TMX_VERSION: &str = "1.4";

/// TMX `<header>` attributes written on every output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmxHeader {
    pub creation_tool: String,
    pub creation_tool_version: String,
    pub seg_type: String,
    pub admin_lang: String,
    pub src_lang: String,
    pub data_type: String,
}

impl TmxHeader {
    pub const TOOL_NAME: &'static str = "SamAltmem";
    pub const TOOL_VERSION: &'static str = "4.0";

    /// Attribute list in serialization order.
    pub fn attributes(&self) -> [(&'static str, &str); 6] {
        [
            ("creationtool", self.creation_tool.as_str()),
            ("creationtoolversion", self.creation_tool_version.as_str()),
            ("segtype", self.seg_type.as_str()),
            ("adminlang", self.admin_lang.as_str()),
            ("srclang", self.src_lang.as_str()),
            ("datatype", self.data_type.as_str()),
        ]
    }
}

impl Default for TmxHeader {
    fn default() -> Self {
        Self {
            creation_tool: Self::TOOL_NAME.to_string(),
            creation_tool_version: Self::TOOL_VERSION.to_string(),
            seg_type: "sentence".to_string(),
            admin_lang: "en".to_string(),
            src_lang: "*all*".to_string(),
            data_type: "xml".to_string(),
        }
    }
}

/// One `<tu>` subtree. The core never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit(XmlElement);

impl TranslationUnit {
    pub fn new(element: XmlElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &XmlElement {
        &self.0
    }

    pub fn into_element(self) -> XmlElement {
        self.0
    }
}

/// Units extracted from a single input, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TmxFragment {
    units: Vec<TranslationUnit>,
}

impl TmxFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, unit: TranslationUnit) {
        self.units.push(unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<TranslationUnit> {
        self.units
    }
}

impl FromIterator<TranslationUnit> for TmxFragment {
    fn from_iter<I: IntoIterator<Item = TranslationUnit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

/// A TMX output document: header plus an ordered body of units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmxDocument {
    header: TmxHeader,
    body: Vec<TranslationUnit>,
}

impl TmxDocument {
    pub fn new(header: TmxHeader) -> Self {
        Self {
            header,
            body: Vec::new(),
        }
    }

    pub fn from_fragment(header: TmxHeader, fragment: TmxFragment) -> Self {
        Self {
            header,
            body: fragment.into_units(),
        }
    }

    /// Moves every unit of `fragment` to the end of the body; returns how many were moved.
    pub fn append_fragment(&mut self, fragment: TmxFragment) -> usize {
        let units = fragment.into_units();
        let moved = units.len();
        self.body.extend(units);
        moved
    }

    pub fn header(&self) -> &TmxHeader {
        &self.header
    }

    pub fn units(&self) -> &[TranslationUnit] {
        &self.body
    }

    pub fn unit_count(&self) -> usize {
        self.body.len()
    }
}
