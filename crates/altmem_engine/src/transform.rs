use altmem_core::{TmxFragment, TranslationUnit, XmlElement, XmlNode};
use altmem_logging::altmem_debug;
use roxmltree::{Document, Node};

use crate::rules::{InlineRule, TransformRules};

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformParams {
    pub export_match_quality: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("no {role} language for unit {unit:?}: set xml:lang or the {attribute:?} attribute")]
    MissingLanguage {
        unit: String,
        role: &'static str,
        attribute: String,
    },
}

/// Extracts translation units from a parsed document.
pub trait Transform {
    fn apply(
        &self,
        document: &Document<'_>,
        params: &TransformParams,
    ) -> Result<TmxFragment, TransformError>;
}

/// Rule-driven extraction of alternate translations:
/// - every unit element contributes one `<tu>` per direct alternate child
/// - the alternate's own source is used when present, else the unit's source
/// - languages come from `xml:lang`, falling back to the enclosing file element
/// - match quality is emitted only when requested.
#[derive(Debug, Clone)]
pub struct AltTransTransform {
    rules: TransformRules,
}

impl AltTransTransform {
    pub fn new(rules: TransformRules) -> Self {
        Self { rules }
    }

    fn is_unit(&self, node: &Node) -> bool {
        node.is_element()
            && self
                .rules
                .unit_elements
                .iter()
                .any(|name| name == node.tag_name().name())
    }

    fn build_unit(
        &self,
        unit: Node,
        alternate: Node,
        params: &TransformParams,
    ) -> Result<Option<TranslationUnit>, TransformError> {
        let rules = &self.rules;
        let Some(target) = child_named(alternate, &rules.target_element) else {
            return Ok(None);
        };
        let unit_source = child_named(unit, &rules.source_element);
        let Some(source) = child_named(alternate, &rules.source_element).or(unit_source) else {
            return Ok(None);
        };

        let source_seg = self.segment(source);
        let target_seg = self.segment(target);
        if rules.skip_empty_segments && (is_blank(&source_seg) || is_blank(&target_seg)) {
            return Ok(None);
        }

        let file = unit
            .ancestors()
            .find(|n| n.is_element() && n.tag_name().name() == rules.file_element);
        let unit_label = || unit.attribute("id").unwrap_or("<unnamed>").to_string();

        let file_lang = |attribute: &str| file.and_then(|f| non_empty(f.attribute(attribute)));

        let source_lang = xml_lang(source)
            .or_else(|| unit_source.and_then(xml_lang))
            .or_else(|| file_lang(rules.source_language_attribute.as_str()))
            .ok_or_else(|| TransformError::MissingLanguage {
                unit: unit_label(),
                role: "source",
                attribute: rules.source_language_attribute.clone(),
            })?;
        let target_lang = xml_lang(target)
            .or_else(|| file_lang(rules.target_language_attribute.as_str()))
            .ok_or_else(|| TransformError::MissingLanguage {
                unit: unit_label(),
                role: "target",
                attribute: rules.target_language_attribute.clone(),
            })?;

        let mut tu = XmlElement::new("tu");
        if let (Some(property), Some(id)) = (&rules.unit_id_property, unit.attribute("id")) {
            tu = tu.with_child(prop(property, id));
        }
        for rule in &rules.carried_properties {
            if let Some(value) = non_empty(alternate.attribute(rule.attribute.as_str())) {
                tu = tu.with_child(prop(&rule.property, value));
            }
        }
        if params.export_match_quality {
            let rule = &rules.match_quality;
            if let Some(value) = non_empty(alternate.attribute(rule.attribute.as_str())) {
                tu = tu.with_child(prop(&rule.property, value));
            }
        }
        tu = tu
            .with_child(tuv(source_lang, source_seg))
            .with_child(tuv(target_lang, target_seg));

        Ok(Some(TranslationUnit::new(tu)))
    }

    fn segment(&self, node: Node) -> XmlElement {
        let mut seg = XmlElement::new("seg");
        self.flatten_into(node, &mut seg);
        seg
    }

    fn flatten_into(&self, node: Node, seg: &mut XmlElement) {
        for child in node.children() {
            if child.is_text() {
                seg.push_text(child.text().unwrap_or_default());
            } else if child.is_element() {
                let name = child.tag_name().name();
                if let Some(rule) = self.rules.inline_codes.iter().find(|r| r.element == name) {
                    seg.children.push(XmlNode::Element(inline_code(child, rule)));
                } else if child.has_children() {
                    self.flatten_into(child, seg);
                } else {
                    altmem_debug!("Dropped empty inline element <{}> from segment", name);
                }
            }
        }
    }
}

impl Transform for AltTransTransform {
    fn apply(
        &self,
        document: &Document<'_>,
        params: &TransformParams,
    ) -> Result<TmxFragment, TransformError> {
        let mut fragment = TmxFragment::new();
        for unit in document.descendants().filter(|n| self.is_unit(n)) {
            for alternate in unit
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == self.rules.alternate_element)
            {
                if let Some(tu) = self.build_unit(unit, alternate, params)? {
                    fragment.push(tu);
                }
            }
        }
        Ok(fragment)
    }
}

fn child_named<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn xml_lang<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    non_empty(node.attribute((XML_NS, "lang")))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_blank(seg: &XmlElement) -> bool {
    seg.text_content().trim().is_empty() && seg.child_elements().next().is_none()
}

fn prop(kind: &str, value: &str) -> XmlElement {
    XmlElement::new("prop")
        .with_attribute("type", kind)
        .with_text(value.trim())
}

fn tuv(lang: &str, seg: XmlElement) -> XmlElement {
    XmlElement::new("tuv")
        .with_attribute("xml:lang", lang)
        .with_child(seg)
}

fn inline_code(node: Node, rule: &InlineRule) -> XmlElement {
    let mut element = XmlElement::new(rule.output_name());
    for (from, to) in &rule.attributes {
        if element.attribute(to).is_some() {
            continue;
        }
        if let Some(value) = node.attribute(from.as_str()) {
            element.attributes.push((to.clone(), value.to_string()));
        }
    }
    for child in node.children() {
        if child.is_text() {
            element.push_text(child.text().unwrap_or_default());
        } else if child.is_element() {
            element.children.push(XmlNode::Element(copy_element(child)));
        }
    }
    element
}

fn copy_element(node: Node) -> XmlElement {
    let mut element = XmlElement::new(node.tag_name().name());
    for attr in node.attributes() {
        element
            .attributes
            .push((attr.name().to_string(), attr.value().to_string()));
    }
    for child in node.children() {
        if child.is_text() {
            element.push_text(child.text().unwrap_or_default());
        } else if child.is_element() {
            element.children.push(XmlNode::Element(copy_element(child)));
        }
    }
    element
}
