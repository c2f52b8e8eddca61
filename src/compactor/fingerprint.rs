//! Deterministic fingerprints for selected frames.
//!
//! The fingerprint is SHA-1 over a canonical JSON serialization of the
//! selected `(filename, line_number, scope_name)` triples, truncated to
//! `FINGERPRINT_LEN` hex characters. The serialization uses sorted keys,
//! `", "`/`": "` separators and ASCII-only escaping so digests match those
//! of summaries produced by earlier versions of the tool.

use crate::parser::Frame;
use crate::utils::config::FINGERPRINT_LEN;
use crate::utils::error::CompactError;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use sha1::{Digest, Sha1};
use std::io;

/// One fingerprinted frame, serialized as `{"f": [file, line, scope]}`
#[derive(Serialize)]
struct FingerprintEntry<'a> {
    f: (&'a str, i64, &'a str),
}

/// Compute the short fingerprint of a set of selected frames
///
/// **Public** - frames must already be in render (position) order
///
/// # Errors
/// * `CompactError::Fingerprint` - canonical serialization failed
/// * `CompactError::Encoding` - serializer emitted invalid UTF-8
pub fn fingerprint_frames(frames: &[Frame]) -> Result<String, CompactError> {
    let canonical = canonical_json(frames)?;
    let mut digest = hex::encode(Sha1::digest(canonical.as_bytes()));
    digest.truncate(FINGERPRINT_LEN);
    Ok(digest)
}

/// Canonical serialization hashed by `fingerprint_frames`
///
/// **Public** - useful for debugging fingerprint mismatches
pub fn canonical_json(frames: &[Frame]) -> Result<String, CompactError> {
    let entries: Vec<FingerprintEntry<'_>> = frames
        .iter()
        .map(|frame| FingerprintEntry { f: frame.key() })
        .collect();

    // Round-trip through Value so object keys come out sorted
    let value = serde_json::to_value(&entries)?;

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiSpacedFormatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

/// Single-line JSON with spaced separators and `\uXXXX` for non-ASCII
struct AsciiSpacedFormatter;

impl Formatter for AsciiSpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(filename: &str, line_number: i64, scope_name: &str) -> Frame {
        Frame {
            filename: filename.to_string(),
            line_number,
            scope_name: scope_name.to_string(),
            source_line: None,
            position: 0,
        }
    }

    #[test]
    fn test_canonical_json_layout() {
        let frames = vec![frame("test.py", 5, "main"), frame("b.py", -1, "<module>")];
        assert_eq!(
            canonical_json(&frames).unwrap(),
            r#"[{"f": ["test.py", 5, "main"]}, {"f": ["b.py", -1, "<module>"]}]"#
        );
    }

    #[test]
    fn test_canonical_json_escapes_non_ascii() {
        let frames = vec![frame("tëst.py", 1, "🐍")];
        assert_eq!(
            canonical_json(&frames).unwrap(),
            r#"[{"f": ["t\u00ebst.py", 1, "\ud83d\udc0d"]}]"#
        );
    }

    #[test]
    fn test_known_fingerprints() {
        assert_eq!(
            fingerprint_frames(&[frame("test.py", 5, "main")]).unwrap(),
            "4a3da041b5"
        );
        assert_eq!(
            fingerprint_frames(&[frame("/home/user/tëst.py", 1, "función")]).unwrap(),
            "3ff59ff313"
        );
        assert_eq!(fingerprint_frames(&[]).unwrap(), "97d170e155");
    }

    #[test]
    fn test_source_line_does_not_affect_fingerprint() {
        let plain = frame("a.py", 3, "run");
        let mut with_source = plain.clone();
        with_source.source_line = Some("run()".to_string());
        with_source.position = 7;

        assert_eq!(
            fingerprint_frames(&[plain]).unwrap(),
            fingerprint_frames(&[with_source]).unwrap()
        );
    }
}
