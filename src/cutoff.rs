//! Cutting a reply off at its signature
//!
//! Rules are tried in priority order. Device boilerplate is always dropped;
//! then the first sign-off decides where the reply ends, and when there is
//! none the word limit does. Offsets come from the untruncated reply, so
//! each is checked against the current length before it is used.

use crate::config::CutoffOptions;
use crate::parser::parse_reply;
use crate::patterns::SIGNATURE_RUN;
use crate::signoff::{SignoffMatch, is_device_signoff_line, locate_signoffs};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("word pattern compiles"));

/// Extract the reply from `body` and cut it off at the signature
///
/// With `include_signature` the sign-off and the signature lines under it
/// are kept; without it the reply ends before the sign-off. When no
/// sign-off is found the first `word_limit` words are kept.
#[must_use]
pub fn cut_off_at_signature(body: &str, include_signature: bool, word_limit: Option<usize>) -> String {
    let options = CutoffOptions::default()
        .with_signature(include_signature)
        .with_word_limit(word_limit);
    cut_off_with(body, &options)
}

/// [`cut_off_at_signature`] with explicit options
#[must_use]
pub fn cut_off_with(body: &str, options: &CutoffOptions) -> String {
    let reply = parse_reply(body);
    let scan = locate_signoffs(&reply);
    let mut text = reply.as_str();

    if let Some(device) = scan.first_device() {
        debug!("Dropping device signature at byte {}", device.start);
        text = prefix(text, device.start);
    }

    let cut = if options.include_signature {
        keep_signoff(text, scan.first_signoff(), options.word_limit)
    } else {
        remove_signoff(text, scan.first_signoff(), options.word_limit)
    };

    let mut cleaned = strip_device_edges(&cut).to_string();
    for warning in &options.boilerplate {
        cleaned = cleaned.replace(warning.as_str(), "");
    }
    cleaned.trim().to_string()
}

fn keep_signoff(text: &str, signoff: Option<SignoffMatch>, word_limit: Option<usize>) -> String {
    let Some(signoff) = signoff.filter(|s| s.end < text.len()) else {
        return limit_words(text, word_limit);
    };

    let tail = &text[signoff.end..];
    let end = SIGNATURE_RUN
        .find(tail)
        .map_or(signoff.end, |run| signoff.end + run.end());

    debug!("Keeping sign-off, cutting at byte {end}");
    prefix(text, end).to_string()
}

fn remove_signoff(text: &str, signoff: Option<SignoffMatch>, word_limit: Option<usize>) -> String {
    match signoff.filter(|s| s.start < text.len()) {
        Some(signoff) => {
            debug!("Removing sign-off at byte {}", signoff.start);
            prefix(text, signoff.start).to_string()
        }
        None => limit_words(text, word_limit),
    }
}

/// Keep the first `limit` words, preserving the line breaks between them
///
/// Runs of spaces collapse to one; runs containing newlines keep their
/// newlines. `None` returns the text unchanged.
fn limit_words(text: &str, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return text.to_string();
    };

    debug!("No usable sign-off, keeping {limit} words");
    let mut kept = String::with_capacity(text.len());
    let mut previous_end = None;

    for word in WORD.find_iter(text).take(limit) {
        if let Some(end) = previous_end {
            let breaks = text[end..word.start()].matches('\n').count();
            if breaks == 0 {
                kept.push(' ');
            } else {
                kept.extend(std::iter::repeat_n('\n', breaks));
            }
        }
        kept.push_str(word.as_str());
        previous_end = Some(word.end());
    }

    kept
}

/// Drop a first or last line that is only device boilerplate
fn strip_device_edges(text: &str) -> &str {
    let mut text = text.trim();

    if let Some((first, rest)) = text.split_once('\n')
        && is_device_signoff_line(first)
    {
        text = rest.trim_start();
    }

    if let Some((rest, last)) = text.rsplit_once('\n')
        && is_device_signoff_line(last)
    {
        text = rest.trim_end();
    }

    text
}

/// `text` up to `end`, or all of it when `end` is out of range
fn prefix(text: &str, end: usize) -> &str {
    text.get(..end).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_limit_keeps_line_breaks() {
        assert_eq!(
            limit_words("Hi,\n\nthis  is a\ntest of words", Some(5)),
            "Hi,\n\nthis is a\ntest"
        );
    }

    #[test]
    fn word_limit_none_is_identity() {
        let text = "Hi,\n\n  spaced   out\n";
        assert_eq!(limit_words(text, None), text);
    }

    #[test]
    fn word_limit_zero_is_empty() {
        assert_eq!(limit_words("one two", Some(0)), "");
    }

    #[test]
    fn device_edges_are_stripped() {
        assert_eq!(
            strip_device_edges("Sent from my iPhone\n\nHi,\n\nBody"),
            "Hi,\n\nBody"
        );
        assert_eq!(
            strip_device_edges("Hi,\n\nBody\nEnvoyé de mon iPhone"),
            "Hi,\n\nBody"
        );
        assert_eq!(strip_device_edges("Sent from my iPhone"), "Sent from my iPhone");
    }

    #[test]
    fn stale_offsets_fall_through() {
        let stale = SignoffMatch {
            start: 40,
            end: 50,
            kind: crate::signoff::SignoffKind::Closing,
        };
        assert_eq!(keep_signoff("short text", Some(stale), None), "short text");
        assert_eq!(remove_signoff("short text", Some(stale), Some(1)), "short");
    }
}
