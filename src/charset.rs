//! Character-set resolution for byte-level inputs.
//!
//! Parsing a stylesheet from bytes is a two-pass affair: the first pass
//! sniffs a BOM or an `@charset "..."` declaration at the very start of the
//! stream, the second decodes the full stream with the encoding that pass
//! settled on. [`StreamProvider`] abstracts over inputs that can be opened
//! more than once so the second pass can start over; when a re-open fails,
//! the bytes from the first pass are decoded instead and the failure is only
//! logged. Decoding itself is `encoding_rs`, which never errors: malformed
//! sequences become replacement characters.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use encoding_rs::{Encoding, UTF_8};
use log::warn;

/// A byte source that can be opened repeatedly.
pub trait StreamProvider {
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// An in-memory byte source.
pub struct BytesProvider {
    bytes: Vec<u8>,
}

impl BytesProvider {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl StreamProvider for BytesProvider {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}

/// A file-backed byte source, re-opened from the path on every pass.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StreamProvider for FileProvider {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Extract the charset label from a leading `@charset "...";` declaration.
///
/// The scan is byte-level and ASCII-only, which is all the declaration
/// syntax permits; anything before it other than a UTF-8 BOM disqualifies
/// the declaration.
pub fn pre_scan_charset(bytes: &[u8]) -> Option<String> {
    let rest = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    if rest.len() < 8 || !rest[..8].eq_ignore_ascii_case(b"@charset") {
        return None;
    }
    let mut rest = &rest[8..];
    while let [b' ' | b'\t', tail @ ..] = rest {
        rest = tail;
    }
    let quote = match rest.first() {
        Some(q @ (b'"' | b'\'')) => *q,
        _ => return None,
    };
    rest = &rest[1..];
    let end = rest.iter().position(|b| *b == quote)?;
    let label = &rest[..end];
    if label.is_empty() || !label.is_ascii() {
        return None;
    }
    Some(String::from_utf8_lossy(label).into_owned())
}

/// Decide the encoding for `bytes`: BOM first, then a declared `@charset`,
/// then the caller's fallback.
pub fn detect_encoding(bytes: &[u8], fallback: &'static Encoding) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if let Some(label) = pre_scan_charset(bytes) {
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => return encoding,
            None => warn!("ignoring unknown charset label `{label}`"),
        }
    }
    fallback
}

/// Read the provider and decode it to text, honoring a BOM or `@charset`
/// declaration over `fallback`. Only the first open can fail; a failing
/// second pass falls back to the bytes already read.
pub fn resolve_source_text(
    provider: &dyn StreamProvider,
    fallback: &'static Encoding,
) -> io::Result<String> {
    let bytes = read_all(provider)?;
    let encoding = detect_encoding(&bytes, fallback);
    if encoding != fallback {
        match read_all(provider) {
            Ok(fresh) => return Ok(decode(encoding, &fresh)),
            Err(e) => warn!("re-open for charset `{}` failed: {e}", encoding.name()),
        }
    }
    Ok(decode(encoding, &bytes))
}

/// Decode `bytes` as UTF-8 unless a BOM or `@charset` says otherwise.
pub fn decode_bytes(bytes: &[u8]) -> String {
    decode(detect_encoding(bytes, UTF_8), bytes)
}

fn read_all(provider: &dyn StreamProvider) -> io::Result<Vec<u8>> {
    let mut reader = provider.open()?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn decode(encoding: &'static Encoding, bytes: &[u8]) -> String {
    // `decode` strips a BOM matching the encoding by itself.
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    #[test]
    fn pre_scan_finds_the_declared_charset() {
        assert_eq!(
            pre_scan_charset(b"@charset \"ISO-8859-1\";\nbody{}"),
            Some("ISO-8859-1".to_string())
        );
        assert_eq!(
            pre_scan_charset(b"@CHARSET 'utf-8';"),
            Some("utf-8".to_string())
        );
    }

    #[test]
    fn pre_scan_requires_a_leading_declaration() {
        assert_eq!(pre_scan_charset(b"body{} @charset \"utf-8\";"), None);
        assert_eq!(pre_scan_charset(b"@charset utf-8;"), None);
        assert_eq!(pre_scan_charset(b""), None);
    }

    #[test]
    fn bom_wins_over_declaration() {
        let mut bytes = b"\xef\xbb\xbf@charset \"ISO-8859-1\";".to_vec();
        bytes.extend_from_slice(b"body{}");
        assert_eq!(detect_encoding(&bytes, WINDOWS_1252), UTF_8);
    }

    #[test]
    fn declared_charset_decodes_non_utf8_bytes() {
        let mut bytes = b"@charset \"windows-1252\"; /* ".to_vec();
        bytes.push(0xe9); // e-acute in windows-1252
        bytes.extend_from_slice(b" */ body{}");
        let provider = BytesProvider::new(bytes);
        let text = resolve_source_text(&provider, UTF_8).unwrap();
        assert!(text.contains('\u{e9}'));
    }

    #[test]
    fn fallback_applies_without_any_declaration() {
        let provider = BytesProvider::new(b"body { color: red }".to_vec());
        let text = resolve_source_text(&provider, UTF_8).unwrap();
        assert_eq!(text, "body { color: red }");
    }
}
