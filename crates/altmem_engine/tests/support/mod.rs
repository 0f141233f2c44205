#![allow(dead_code)]

use std::path::{Path, PathBuf};

use altmem_engine::{TransformRules, RULES_FILE_NAME};

/// The rule file shipped in the workspace `resources/` directory.
pub fn rules_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../resources")
        .join(RULES_FILE_NAME)
}

pub fn rules() -> TransformRules {
    TransformRules::load(&rules_path()).expect("bundled rules load")
}

pub fn init_logging() {
    altmem_logging::initialize_for_tests();
}

/// XLIFF 1.2 document with `count` units, each carrying one alt-trans proposal.
pub fn xliff_with_units(prefix: &str, count: usize) -> String {
    let units: String = (1..=count)
        .map(|i| {
            format!(
                r#"<trans-unit id="{prefix}{i}"><source>Source {prefix}{i}</source><target>Ziel {prefix}{i}</target><alt-trans match-quality="{q}" origin="tm"><source>Source {prefix}{i}!</source><target>Ziel {prefix}{i}!</target></alt-trans></trans-unit>"#,
                q = 70 + i
            )
        })
        .collect();
    wrap_units(&units)
}

pub fn wrap_units(units: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file original="doc.txt" source-language="en-US" target-language="de-DE" datatype="plaintext">
    <body>{units}</body>
  </file>
</xliff>
"#
    )
}

pub const MALFORMED_XLIFF: &str =
    r#"<?xml version="1.0"?><xliff version="1.2"><file><body><trans-unit id="1"></body></xliff>"#;

pub fn utf16le(text: &str, with_bom: bool) -> Vec<u8> {
    let mut out = if with_bom { vec![0xFF, 0xFE] } else { Vec::new() };
    out.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));
    out
}

pub fn utf16be(text: &str, with_bom: bool) -> Vec<u8> {
    let mut out = if with_bom { vec![0xFE, 0xFF] } else { Vec::new() };
    out.extend(text.encode_utf16().flat_map(|u| u.to_be_bytes()));
    out
}

pub fn utf32le_with_bom(text: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE, 0x00, 0x00];
    out.extend(text.chars().flat_map(|c| (c as u32).to_le_bytes()));
    out
}

pub fn utf32be_with_bom(text: &str) -> Vec<u8> {
    let mut out = vec![0x00, 0x00, 0xFE, 0xFF];
    out.extend(text.chars().flat_map(|c| (c as u32).to_be_bytes()));
    out
}

pub fn count_units(tmx: &str) -> usize {
    tmx.matches("<tu>").count()
}

/// Unit ids in the order they appear in serialized TMX.
pub fn unit_ids(tmx: &str) -> Vec<String> {
    tmx.split(r#"<prop type="x-unit-id">"#)
        .skip(1)
        .filter_map(|rest| rest.split('<').next())
        .map(str::to_string)
        .collect()
}
