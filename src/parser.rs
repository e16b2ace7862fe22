//! Fragment assembly
//!
//! Lines are scanned from the bottom of the message up. A blank line is the
//! cue to check whether the block gathered so far opens with a signature
//! delimiter, which is why the scan runs in reverse: no lookahead is needed
//! to find where a trailing signature begins.

use crate::classifier::{LineClassification, classify_line, opens_signature};
use crate::patterns::{BOUNDARY_LINE, QUOTE_INTRODUCER_SPAN};
use crate::types::{Fragment, Message};
use std::ops::Range;
use tracing::{debug, trace};

/// Split an email body into fragments
#[must_use]
pub fn read(text: &str) -> Message {
    let text = normalize(text);

    let fragments = {
        let mut assembler = Assembler::default();
        for line in text.split('\n').rev() {
            assembler.scan_line(line);
        }
        assembler.finish()
    };

    debug!(
        "Read message: {} fragments, {} visible",
        fragments.len(),
        fragments.iter().filter(|f| f.is_visible()).count()
    );

    Message::new(text, fragments)
}

/// The reply portion of an email body
#[must_use]
pub fn parse_reply(text: &str) -> String {
    read(text).into_reply()
}

fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = collapse_quote_introducer(&text);
    separate_boundary_lines(&text)
}

/// Join a quote introducer wrapped over several lines into one line
fn collapse_quote_introducer(text: &str) -> String {
    let Some(span) = first_introducer_span(text) else {
        return text.to_string();
    };

    let introducer = &text[span.clone()];
    if !introducer.contains('\n') {
        return text.to_string();
    }

    let mut collapsed = String::with_capacity(text.len());
    collapsed.push_str(&text[..span.start]);
    collapsed.push_str(&introducer.replace('\n', ""));
    collapsed.push_str(&text[span.end..]);
    collapsed
}

/// First introducer span, preferring a later candidate that starts inside it
fn first_introducer_span(text: &str) -> Option<Range<usize>> {
    let mut span = QUOTE_INTRODUCER_SPAN.find(text)?.range();

    loop {
        let next = span.start + text[span.start..].chars().next().map_or(1, char::len_utf8);
        match QUOTE_INTRODUCER_SPAN.find_at(text, next) {
            Some(inner) if inner.start() < span.end => span = inner.range(),
            _ => return Some(span),
        }
    }
}

/// Put a blank line between text and a `_____`/`-----` rule glued under it
fn separate_boundary_lines(text: &str) -> String {
    let mut separated = String::with_capacity(text.len());
    let mut copied = 0;

    for boundary in BOUNDARY_LINE.find_iter(text) {
        let before = &text[..boundary.start()];
        if before.is_empty() || before.ends_with('\n') {
            continue;
        }
        separated.push_str(&text[copied..boundary.start()]);
        separated.push('\n');
        copied = boundary.start();
    }

    separated.push_str(&text[copied..]);
    separated
}

/// Lines gathered for the fragment under construction, bottom line first
struct PendingFragment<'t> {
    lines: Vec<&'t str>,
    quoted: bool,
    headers: bool,
    signature: bool,
}

impl<'t> PendingFragment<'t> {
    fn start(line: &'t str, class: LineClassification) -> Self {
        Self {
            lines: vec![line],
            quoted: class.quoted,
            headers: class.header,
            signature: false,
        }
    }

    /// Whether `line` continues this fragment
    ///
    /// A quoted block also swallows blank lines and its own introducer.
    const fn accepts(&self, class: LineClassification, blank: bool) -> bool {
        (self.headers == class.header && self.quoted == class.quoted)
            || (self.quoted && (class.quote_introducer || blank))
    }

    /// The line nearest the top of the message gathered so far
    fn top_line(&self) -> Option<&'t str> {
        self.lines.last().copied()
    }

    fn finish(mut self) -> Fragment {
        self.lines.reverse();
        let content = self.lines.join("\n").trim().to_string();
        Fragment::new(content, self.quoted, self.headers, self.signature)
    }
}

#[derive(Default)]
struct Assembler<'t> {
    current: Option<PendingFragment<'t>>,
    fragments: Vec<Fragment>,
    found_visible: bool,
}

impl<'t> Assembler<'t> {
    fn scan_line(&mut self, line: &'t str) {
        let class = classify_line(line);
        let blank = line.trim().is_empty();

        if blank
            && self
                .current
                .as_ref()
                .and_then(PendingFragment::top_line)
                .is_some_and(opens_signature)
        {
            if let Some(pending) = self.current.as_mut() {
                pending.signature = true;
            }
            self.finish_fragment();
        }

        if let Some(pending) = self.current.as_mut()
            && pending.accepts(class, blank)
        {
            pending.lines.push(line);
            return;
        }

        self.finish_fragment();
        self.current = Some(PendingFragment::start(line, class));
    }

    fn finish_fragment(&mut self) {
        let Some(pending) = self.current.take() else {
            return;
        };
        let mut fragment = pending.finish();

        // A header block opens a new scope: everything below it is history.
        if fragment.is_headers() {
            self.found_visible = false;
            for earlier in &mut self.fragments {
                earlier.hide();
            }
        }

        if !self.found_visible {
            if fragment.is_quoted()
                || fragment.is_headers()
                || fragment.is_signature()
                || fragment.content().is_empty()
            {
                fragment.hide();
            } else {
                self.found_visible = true;
            }
        }

        trace!(
            "Finished fragment: quoted={} headers={} signature={} hidden={}",
            fragment.is_quoted(),
            fragment.is_headers(),
            fragment.is_signature(),
            fragment.is_hidden()
        );

        self.fragments.push(fragment);
    }

    fn finish(mut self) -> Vec<Fragment> {
        self.finish_fragment();
        self.fragments.reverse();
        self.fragments
    }
}
