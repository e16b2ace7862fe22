// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Extraction
//!
//! Pulls the freshly written reply out of an email body, dropping quoted
//! thread history, forwarded headers and trailing signatures. Quote
//! introducers, header fields and sign-offs are recognised in roughly
//! twenty languages.
//!
//! # Features
//!
//! - Fragment view of a body: quoted, header, signature and hidden flags
//! - Multi-line "On ... wrote:" introducers and Outlook separator lines
//! - Sign-off aware cutoff, keeping or dropping the signature block
//! - Device boilerplate ("Sent from my iPhone") removal
//! - Word-limit fallback that keeps line breaks
//! - Raw RFC 5322 input via `mailparse`
//!
//! # Example
//!
//! ```rust
//! use email_reply_extract::{cut_off_at_signature, parse_reply};
//!
//! let body = "Sounds good.\n\nOn Jan 1, 2020, Jane wrote:\n> Shall we meet?";
//! assert_eq!(parse_reply(body), "Sounds good.");
//!
//! let signed = "Thanks\n\nKind regards,\n\nPerrin Aybara";
//! assert_eq!(cut_off_at_signature(signed, false, Some(100)), "Thanks");
//! ```

mod classifier;
mod config;
mod cutoff;
mod error;
mod fold;
mod parser;
mod patterns;
mod raw;
mod signoff;
mod types;

pub use classifier::{LineClassification, classify_line};
pub use config::{CutoffOptions, DEFAULT_BOILERPLATE, DEFAULT_WORD_LIMIT};
pub use cutoff::{cut_off_at_signature, cut_off_with};
pub use error::{ParseError, Result};
pub use fold::{SHIELDED_SYMBOLS, ascii_fold};
pub use parser::{parse_reply, read};
pub use patterns::{
    DEVICE_SIGNOFFS, HEADER_FIELDS, IntroducerPattern, LocalePattern, QUOTE_INTRODUCERS,
    SIGNOFF_PHRASES, THANKS_PHRASES,
};
pub use raw::{parse_reply_raw, read_raw};
pub use signoff::{
    DeviceSignoffMatch, SignoffKind, SignoffMatch, SignoffScan, is_device_signoff_line,
    locate_signoffs,
};
pub use types::{Fragment, Message};
