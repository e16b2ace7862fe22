//! Reading replies straight from raw RFC 5322 messages

use crate::error::{ParseError, Result};
use crate::parser::read;
use crate::types::Message;
use mailparse::{DispositionType, ParsedMail};
use tracing::debug;

/// Parse a raw message and split its body into fragments
///
/// The first inline `text/plain` part is used; HTML-only messages are
/// flattened to text, with `<blockquote>` content turned into `>` lines.
pub fn read_raw(raw: &[u8]) -> Result<Message> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

    let mut parts = BodyParts::default();
    parts.collect(&parsed)?;

    let body = match (parts.plain, parts.html) {
        (Some(plain), _) => plain,
        (None, Some(html)) => {
            debug!("No text/plain part, flattening HTML body");
            html_to_text(&html)
        }
        (None, None) => String::new(),
    };

    Ok(read(&body))
}

/// The reply portion of a raw message
pub fn parse_reply_raw(raw: &[u8]) -> Result<String> {
    read_raw(raw).map(Message::into_reply)
}

#[derive(Default)]
struct BodyParts {
    plain: Option<String>,
    html: Option<String>,
}

impl BodyParts {
    fn collect(&mut self, part: &ParsedMail) -> Result<()> {
        if !part.subparts.is_empty() {
            for subpart in &part.subparts {
                self.collect(subpart)?;
            }
            return Ok(());
        }

        if matches!(
            part.get_content_disposition().disposition,
            DispositionType::Attachment
        ) {
            return Ok(());
        }

        let mimetype = part.ctype.mimetype.to_lowercase();
        let slot = match mimetype.as_str() {
            "text/plain" => &mut self.plain,
            "text/html" => &mut self.html,
            _ => return Ok(()),
        };

        if slot.is_none() {
            let body = part
                .get_body()
                .map_err(|e| ParseError::Decode(e.to_string()))?;
            *slot = Some(body);
        }
        Ok(())
    }
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "tr", "table", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
];

fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut quote_depth: usize = 0;
    let mut hidden_depth: usize = 0;
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        if hidden_depth == 0 {
            push_text(&mut text, &rest[..open], quote_depth);
        }

        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            rest = "";
            break;
        };
        let tag = after[..close].trim().to_ascii_lowercase();
        rest = &after[close + 1..];

        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default();

        match name {
            "script" | "style" | "head" => {
                hidden_depth = if closing {
                    hidden_depth.saturating_sub(1)
                } else {
                    hidden_depth + 1
                };
            }
            "blockquote" => {
                end_line(&mut text);
                quote_depth = if closing {
                    quote_depth.saturating_sub(1)
                } else {
                    quote_depth + 1
                };
            }
            "br" => text.push('\n'),
            "p" if closing => {
                end_line(&mut text);
                text.push('\n');
            }
            _ if BLOCK_TAGS.contains(&name) => end_line(&mut text),
            _ => {}
        }
    }

    if hidden_depth == 0 {
        push_text(&mut text, rest, quote_depth);
    }

    let text = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    decode_entities(text.trim())
}

/// Append an HTML text run, collapsing whitespace as a browser would
fn push_text(text: &mut String, segment: &str, quote_depth: usize) {
    let words: Vec<&str> = segment.split_whitespace().collect();
    let at_line_start = text.is_empty() || text.ends_with('\n');

    if words.is_empty() {
        if !segment.is_empty() && !at_line_start && !text.ends_with(' ') {
            text.push(' ');
        }
        return;
    }

    if at_line_start {
        if quote_depth > 0 {
            text.push_str(&">".repeat(quote_depth));
            text.push(' ');
        }
    } else if segment.starts_with(char::is_whitespace) && !text.ends_with(' ') {
        text.push(' ');
    }

    text.push_str(&words.join(" "));
    if segment.ends_with(char::is_whitespace) {
        text.push(' ');
    }
}

fn end_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blockquote_becomes_quoted_lines() {
        let html = "<div>Sounds good</div><div>On Mon, Jan 6, 2020 at 9:00 AM Ann wrote:</div>\
                    <blockquote><div>Shall we meet?</div><div>Tuesday works</div></blockquote>";
        assert_eq!(
            html_to_text(html),
            "Sounds good\nOn Mon, Jan 6, 2020 at 9:00 AM Ann wrote:\n> Shall we meet?\n> Tuesday works"
        );
    }

    #[test]
    fn scripts_and_styles_are_dropped() {
        let html = "<html><head><style>p { color: red }</style></head>\
                    <body><p>Hello <b>there</b></p><script>alert(1)</script></body></html>";
        assert_eq!(html_to_text(html), "Hello there");
    }

    #[test]
    fn entities_decode_once() {
        assert_eq!(decode_entities("a &amp;lt; b &lt; c"), "a &lt; b < c");
    }
}
