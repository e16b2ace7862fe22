//! Locating sign-offs and device boilerplate inside a parsed reply
//!
//! Matching runs on an ASCII-folded copy of the reply; every offset
//! reported here indexes the original, unfolded text.

use crate::fold::FoldedText;
use crate::patterns::{DEVICE_SIGNOFF, SIGNOFF};
use serde::{Deserialize, Serialize};

/// Closing salutation such as "Kind regards," or "Thanks!"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignoffMatch {
    pub start: usize,
    pub end: usize,
    pub kind: SignoffKind,
}

/// Which sign-off group matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignoffKind {
    /// "Regards", "Cordialement", "Mit freundlichen Grüßen", ...
    Closing,
    /// "Thanks", "Merci", "Grazie", ...
    Thanks,
}

/// Client-inserted line such as "Sent from my iPhone" or a bare `--`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSignoffMatch {
    pub start: usize,
    pub end: usize,
}

/// All sign-off candidates in a reply, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignoffScan {
    pub device: Vec<DeviceSignoffMatch>,
    pub signoff: Vec<SignoffMatch>,
}

impl SignoffScan {
    #[must_use]
    pub fn first_device(&self) -> Option<DeviceSignoffMatch> {
        self.device.first().copied()
    }

    #[must_use]
    pub fn first_signoff(&self) -> Option<SignoffMatch> {
        self.signoff.first().copied()
    }
}

/// Find device boilerplate and sign-off phrases in `reply`
///
/// Candidates starting on the first line are dropped, so an opening such
/// as "Dear Mr. Best," is never read as a sign-off.
#[must_use]
pub fn locate_signoffs(reply: &str) -> SignoffScan {
    let folded = FoldedText::new(reply);
    let text = folded.as_str();
    let first_break = text.find('\n').unwrap_or(text.len());

    let device = DEVICE_SIGNOFF
        .find_iter(text)
        .filter(|m| m.start() >= first_break)
        .map(|m| DeviceSignoffMatch {
            start: folded.original_offset(m.start()),
            end: folded.original_offset(m.end()),
        })
        .collect();

    let signoff = SIGNOFF
        .captures_iter(text)
        .filter_map(|caps| {
            caps.name("closing")
                .map(|m| (m, SignoffKind::Closing))
                .or_else(|| caps.name("thanks").map(|m| (m, SignoffKind::Thanks)))
        })
        .filter(|(m, _)| m.start() >= first_break)
        .map(|(m, kind)| SignoffMatch {
            start: folded.original_offset(m.start()),
            end: folded.original_offset(m.end()),
            kind,
        })
        .collect();

    SignoffScan { device, signoff }
}

/// Whether a single line is device boilerplate or a bare delimiter
#[must_use]
pub fn is_device_signoff_line(line: &str) -> bool {
    let folded = FoldedText::new(line.trim());
    DEVICE_SIGNOFF.is_match(folded.as_str())
}
