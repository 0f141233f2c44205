mod support;

use std::fs;

use altmem_engine::{ConversionError, ConvertOptions, DocumentConverter, TextEncoding};
use pretty_assertions::assert_eq;
use support::{init_logging, rules_path, utf16le, xliff_with_units, MALFORMED_XLIFF};
use tempfile::TempDir;

#[test]
fn converts_utf8_file() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("a.xlf");
    fs::write(&input, xliff_with_units("a", 2)).unwrap();

    let converted = DocumentConverter::new(rules_path())
        .convert(&input, &ConvertOptions::default())
        .unwrap();
    assert_eq!(converted.tu_count, 2);
    assert_eq!(converted.fragment.len(), 2);
    assert_eq!(converted.encoding, TextEncoding::Utf8);
}

#[test]
fn converts_utf16_file_with_stale_declaration() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("wide.xliff");
    let xml = xliff_with_units("w", 3).replace("encoding=\"UTF-8\"", "encoding=\"UTF-16\"");
    fs::write(&input, utf16le(&xml, true)).unwrap();

    let converted = DocumentConverter::new(rules_path())
        .convert(&input, &ConvertOptions::default())
        .unwrap();
    assert_eq!(converted.tu_count, 3);
    assert_eq!(converted.encoding, TextEncoding::Utf16LeBom);
}

#[test]
fn malformed_input_is_a_parse_failure() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("broken.xlf");
    fs::write(&input, MALFORMED_XLIFF).unwrap();

    let failure = DocumentConverter::new(rules_path())
        .convert(&input, &ConvertOptions::default())
        .unwrap_err();
    assert_eq!(failure.input, input);
    assert!(matches!(failure.error, ConversionError::Parse(_)), "{failure}");
}

#[test]
fn missing_input_is_a_read_failure() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("absent.xlf");

    let failure = DocumentConverter::new(rules_path())
        .convert(&input, &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(failure.error, ConversionError::Read { .. }));
}

#[test]
fn missing_rules_is_a_configuration_failure() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("a.xlf");
    fs::write(&input, xliff_with_units("a", 1)).unwrap();

    let converter = DocumentConverter::new(temp.path().join("nope.ron"));
    let failure = converter
        .convert(&input, &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(failure.error, ConversionError::Configuration(_)));
    assert!(failure.to_string().contains("nope.ron"));
}

#[test]
fn invalid_rules_are_reported_with_their_path() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("a.xlf");
    fs::write(&input, xliff_with_units("a", 1)).unwrap();
    let rules = temp.path().join("rules.ron");
    fs::write(&rules, "TransformRules(unit_elements: 3)").unwrap();

    let failure = DocumentConverter::new(&rules)
        .convert(&input, &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(failure.error, ConversionError::Configuration(_)));
}

#[test]
fn match_quality_option_reaches_the_transform() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("a.xlf");
    fs::write(&input, xliff_with_units("a", 1)).unwrap();

    let converted = DocumentConverter::new(rules_path())
        .convert(
            &input,
            &ConvertOptions {
                export_match_quality: true,
            },
        )
        .unwrap();
    let unit = converted.fragment.units()[0].element();
    assert!(unit
        .child_elements()
        .any(|e| e.attribute("type") == Some("x-match-quality")));
}
