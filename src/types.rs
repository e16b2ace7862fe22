//! Core types for parsed messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous run of lines sharing one quoted/header classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Trimmed lines of the fragment in reading order
    content: String,

    /// Lines start with `>`
    quoted: bool,

    /// Lines are forwarded headers or a quote introducer
    headers: bool,

    /// Fragment opens with a signature delimiter or device boilerplate
    signature: bool,

    /// Fragment is not part of the reply
    hidden: bool,
}

impl Fragment {
    pub(crate) const fn new(
        content: String,
        quoted: bool,
        headers: bool,
        signature: bool,
    ) -> Self {
        Self {
            content,
            quoted,
            headers,
            signature,
            hidden: false,
        }
    }

    pub(crate) const fn hide(&mut self) {
        self.hidden = true;
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub const fn is_headers(&self) -> bool {
        self.headers
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the fragment contributes to the reply
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !(self.hidden || self.quoted)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// An email body split into fragments
///
/// Built once by [`crate::read`]; the fragment list is frozen afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Body text with line endings unified, after header collapsing
    text: String,

    /// Fragments in top-to-bottom order
    fragments: Vec<Fragment>,

    /// Visible, unquoted fragment contents joined by newlines
    reply: String,
}

impl Message {
    pub(crate) fn new(text: String, fragments: Vec<Fragment>) -> Self {
        let reply = fragments
            .iter()
            .filter(|f| f.is_visible())
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            text,
            fragments,
            reply,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[must_use]
    pub fn reply(&self) -> &str {
        &self.reply
    }

    /// Consume the message, keeping only the reply
    #[must_use]
    pub fn into_reply(self) -> String {
        self.reply
    }

    /// Fragments that make up the reply
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| f.is_visible())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reply)
    }
}
