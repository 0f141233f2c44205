use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use regex::{Captures, Regex};

const BOM_UTF8: &[u8] = b"\xEF\xBB\xBF";
const BOM_UTF16LE: &[u8] = b"\xFF\xFE";
const BOM_UTF16BE: &[u8] = b"\xFE\xFF";
const BOM_UTF32LE: &[u8] = b"\xFF\xFE\x00\x00";
const BOM_UTF32BE: &[u8] = b"\x00\x00\xFE\xFF";

/// Candidate decodings, in the order they may be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf32Le,
    Utf32Be,
    Utf16LeBom,
    Utf16BeBom,
    /// BOM-sniffing UTF-16, little-endian when no BOM is present.
    Utf16,
    Utf16Le,
    Utf16Be,
    Utf8Bom,
    Utf8,
    /// Single-byte fallback; every byte sequence decodes.
    Legacy,
}

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf32Le => "UTF-32LE",
            TextEncoding::Utf32Be => "UTF-32BE",
            TextEncoding::Utf16LeBom => "UTF-16LE (BOM)",
            TextEncoding::Utf16BeBom => "UTF-16BE (BOM)",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf8Bom => "UTF-8 (BOM)",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Legacy => "windows-1252",
        }
    }

    fn is_utf16(self) -> bool {
        matches!(
            self,
            TextEncoding::Utf16
                | TextEncoding::Utf16Le
                | TextEncoding::Utf16Be
                | TextEncoding::Utf16LeBom
                | TextEncoding::Utf16BeBom
        )
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    /// Decoded text with a UTF-8 XML declaration (if it had one at all).
    pub text: String,
    pub encoding: TextEncoding,
    /// The declared encoding that was rewritten, if any.
    pub replaced_declaration: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("could not decode file with any known encoding (tried: {tried})")]
pub struct EncodingError {
    pub tried: String,
}

/// Decode raw bytes: BOM -> ordered candidates -> legacy fallback, then
/// rewrite a stale XML encoding declaration to UTF-8.
pub fn decode_document(bytes: &[u8]) -> Result<DecodedDocument, EncodingError> {
    let candidates = candidates_for(bytes);
    for &candidate in candidates {
        if let Some(text) = decode_as(bytes, candidate) {
            let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text);
            let (text, replaced_declaration) = normalize_declaration(text);
            return Ok(DecodedDocument {
                text,
                encoding: candidate,
                replaced_declaration,
            });
        }
    }
    Err(EncodingError {
        tried: candidates
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Ordered candidate list selected by the leading byte-order mark.
pub fn candidates_for(bytes: &[u8]) -> &'static [TextEncoding] {
    use TextEncoding::*;
    // UTF-32LE must be tested before UTF-16LE; they share the first two bytes.
    if bytes.starts_with(BOM_UTF32LE) {
        &[Utf32Le]
    } else if bytes.starts_with(BOM_UTF32BE) {
        &[Utf32Be]
    } else if bytes.starts_with(BOM_UTF16LE) {
        &[Utf16LeBom, Utf16]
    } else if bytes.starts_with(BOM_UTF16BE) {
        &[Utf16BeBom, Utf16]
    } else if bytes.starts_with(BOM_UTF8) {
        &[Utf8Bom, Utf8]
    } else {
        &[Utf8, Utf16, Utf16Le, Utf16Be, Legacy]
    }
}

/// Strict decode with one candidate; `None` on malformed or implausible input.
fn decode_as(bytes: &[u8], candidate: TextEncoding) -> Option<String> {
    let text = match candidate {
        TextEncoding::Utf32Le => decode_utf32(bytes, u32::from_le_bytes)?,
        TextEncoding::Utf32Be => decode_utf32(bytes, u32::from_be_bytes)?,
        TextEncoding::Utf16LeBom => strict(UTF_16LE, bytes.strip_prefix(BOM_UTF16LE)?)?,
        TextEncoding::Utf16BeBom => strict(UTF_16BE, bytes.strip_prefix(BOM_UTF16BE)?)?,
        TextEncoding::Utf16 => {
            if let Some(rest) = bytes.strip_prefix(BOM_UTF16BE) {
                strict(UTF_16BE, rest)?
            } else {
                strict(UTF_16LE, bytes.strip_prefix(BOM_UTF16LE).unwrap_or(bytes))?
            }
        }
        TextEncoding::Utf16Le => strict(UTF_16LE, bytes)?,
        TextEncoding::Utf16Be => strict(UTF_16BE, bytes)?,
        TextEncoding::Utf8Bom => strict(UTF_8, bytes.strip_prefix(BOM_UTF8)?)?,
        TextEncoding::Utf8 => strict(UTF_8, bytes)?,
        TextEncoding::Legacy => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    };
    is_plausible(&text, candidate).then_some(text)
}

fn strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

fn decode_utf32(bytes: &[u8], to_u32: fn([u8; 4]) -> u32) -> Option<String> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    bytes
        .chunks_exact(4)
        .map(|chunk| char::from_u32(to_u32([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .collect()
}

/// XML never contains U+0000, and a UTF-16 guess must start with markup.
/// The legacy fallback is exempt so it can never fail.
fn is_plausible(text: &str, candidate: TextEncoding) -> bool {
    if candidate == TextEncoding::Legacy {
        return true;
    }
    if text.contains('\0') {
        return false;
    }
    if candidate.is_utf16() {
        let body = text.trim_start_matches('\u{FEFF}').trim_start();
        return body.is_empty() || body.starts_with('<');
    }
    true
}

static XML_DECLARATION_ENCODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\s*<\?xml\b[^>]*?\bencoding\s*=\s*)(["'])([^"']*)(["'])"#)
        .expect("valid declaration regex")
});

/// Rewrite a non-UTF-8 `encoding` in the XML declaration to `UTF-8`.
/// Returns the normalized text and the label that was replaced.
pub fn normalize_declaration(text: &str) -> (String, Option<String>) {
    let Some(caps) = XML_DECLARATION_ENCODING.captures(text) else {
        return (text.to_string(), None);
    };
    let declared = caps[3].to_string();
    if declared.eq_ignore_ascii_case("utf-8") {
        return (text.to_string(), None);
    }
    let rewritten = XML_DECLARATION_ENCODING.replace(text, |caps: &Captures| {
        format!("{}{}UTF-8{}", &caps[1], &caps[2], &caps[4])
    });
    (rewritten.into_owned(), Some(declared))
}
