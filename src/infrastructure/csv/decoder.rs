//! Byte-to-text transcoding for CSV sources.
//!
//! Uses encoding_rs. A leading byte-order mark overrides the requested
//! encoding and is stripped, so BOM-prefixed UTF-8 decodes the same as plain
//! UTF-8 regardless of what the caller asked for.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};

use crate::domain::SourceEncoding;

/// Decoded text plus what happened while decoding it
#[derive(Debug)]
pub struct DecodedText {
    pub text: String,

    /// Encoding actually used (differs from the request when a BOM overrode it)
    pub encoding: &'static Encoding,

    pub bom_removed: bool,

    /// Malformed sequences were replaced with U+FFFD
    pub had_errors: bool,
}

pub fn encoding_for(source: SourceEncoding) -> &'static Encoding {
    match source {
        SourceEncoding::Utf8 => UTF_8,
        SourceEncoding::ShiftJis => SHIFT_JIS,
    }
}

/// Decode a whole file's bytes
pub fn decode(bytes: &[u8], source: SourceEncoding) -> DecodedText {
    let bom_removed = Encoding::for_bom(bytes).is_some();
    let (text, encoding, had_errors) = encoding_for(source).decode(bytes);

    DecodedText {
        text: text.into_owned(),
        encoding,
        bom_removed,
        had_errors,
    }
}
