//! Options controlling where a reply is cut off

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// Words kept when no sign-off is found
pub const DEFAULT_WORD_LIMIT: usize = 100;

/// Sender warnings that mail gateways paste into bodies
pub const DEFAULT_BOILERPLATE: &[&str] = &[
    "CAUTION: This email originated from outside of the organization. Do not click links or open attachments unless you recognize the sender and know the content is safe.",
    "CAUTION: This email originated from outside your organization. Exercise caution when opening attachments or clicking links, especially from unknown senders.",
    "EXTERNAL EMAIL: Use caution when clicking on links or opening attachments.",
    "[EXTERNAL]",
];

/// How `cut_off_with` trims a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutoffOptions {
    /// Keep the sign-off and the signature lines after it
    pub include_signature: bool,

    /// Words kept when no sign-off is found; `None` keeps everything
    pub word_limit: Option<usize>,

    /// Substrings removed wherever they occur
    pub boilerplate: Vec<String>,
}

impl Default for CutoffOptions {
    fn default() -> Self {
        Self {
            include_signature: true,
            word_limit: Some(DEFAULT_WORD_LIMIT),
            boilerplate: DEFAULT_BOILERPLATE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CutoffOptions {
    /// Load options from a JSON document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    #[must_use]
    pub const fn with_signature(mut self, include_signature: bool) -> Self {
        self.include_signature = include_signature;
        self
    }

    #[must_use]
    pub const fn with_word_limit(mut self, word_limit: Option<usize>) -> Self {
        self.word_limit = word_limit;
        self
    }

    #[must_use]
    pub fn with_boilerplate(mut self, warning: impl Into<String>) -> Self {
        self.boilerplate.push(warning.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if let Some(position) = self.boilerplate.iter().position(|b| b.trim().is_empty()) {
            return Err(ParseError::Config {
                option: "boilerplate".into(),
                details: format!("entry {position} is empty"),
            });
        }
        Ok(())
    }
}
