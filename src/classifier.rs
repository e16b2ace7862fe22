//! Per-line tagging of quoted text, headers and quote introducers

use crate::patterns::{HEADER_FIELD, QUOTE_INTRODUCER, SIGNATURE_LINE};
use serde::{Deserialize, Serialize};

/// How a single line of a message body reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineClassification {
    /// Line starts with one or more `>` markers
    pub quoted: bool,

    /// Line attributes the quoted text below it ("On ... wrote:")
    pub quote_introducer: bool,

    /// Line is a quote introducer or a forwarded header field
    pub header: bool,
}

/// Classify one line of a (normalized) message body
#[must_use]
pub fn classify_line(line: &str) -> LineClassification {
    let quote_introducer = QUOTE_INTRODUCER.is_match(line.trim());
    let quoted = line.starts_with('>');
    let header = quote_introducer || HEADER_FIELD.is_match(line);

    LineClassification {
        quoted,
        quote_introducer,
        header,
    }
}

/// Whether a line opens a signature block (delimiter or device boilerplate)
#[must_use]
pub fn opens_signature(line: &str) -> bool {
    SIGNATURE_LINE.is_match(line.trim())
}
