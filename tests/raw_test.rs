use email_reply_extract::{parse_reply_raw, read_raw};

#[test]
fn test_raw_plain_message() {
    let raw = b"From: Bob <bob@example.com>\r\n\
                To: Ann <ann@example.com>\r\n\
                Subject: Re: Planning\r\n\
                Date: Mon, 06 Jan 2020 10:00:00 +0000\r\n\
                \r\n\
                Sounds good.\r\n\
                \r\n\
                On Mon, Jan 6, 2020 at 9:00 AM Ann <ann@example.com> wrote:\r\n\
                > Shall we meet?\r\n";

    assert_eq!(parse_reply_raw(raw).unwrap(), "Sounds good.");
}

#[test]
fn test_raw_multipart_prefers_plain_text() {
    let raw = b"From: bob@example.com\r\n\
                Subject: Re: Planning\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/alternative; boundary=\"sep\"\r\n\
                \r\n\
                --sep\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                Plain reply.\r\n\
                \r\n\
                > quoted\r\n\
                --sep\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <p>HTML reply.</p>\r\n\
                --sep--\r\n";

    let message = read_raw(raw).unwrap();
    assert_eq!(message.reply(), "Plain reply.");
    assert!(message.fragments().iter().any(|f| f.is_quoted()));
}

#[test]
fn test_raw_html_only_message() {
    let raw = b"From: bob@example.com\r\n\
                Subject: Re: Planning\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <html><body><div>Sounds good</div>\
                <div>On Mon, Jan 6, 2020 at 9:00 AM Ann &lt;ann@example.com&gt; wrote:</div>\
                <blockquote><div>Shall we meet?</div></blockquote></body></html>\r\n";

    let message = read_raw(raw).unwrap();
    assert_eq!(message.reply(), "Sounds good");
    assert!(message.text().contains("> Shall we meet?"));
}

#[test]
fn test_raw_skips_attachments() {
    let raw = b"From: bob@example.com\r\n\
                Subject: Notes\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/mixed; boundary=\"sep\"\r\n\
                \r\n\
                --sep\r\n\
                Content-Type: text/plain\r\n\
                Content-Disposition: attachment; filename=\"notes.txt\"\r\n\
                \r\n\
                attached notes\r\n\
                --sep\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                Notes attached.\r\n\
                --sep--\r\n";

    assert_eq!(parse_reply_raw(raw).unwrap(), "Notes attached.");
}

#[test]
fn test_raw_without_text_part() {
    let raw = b"From: bob@example.com\r\n\
                Subject: Photo\r\n\
                Content-Type: image/png\r\n\
                Content-Transfer-Encoding: base64\r\n\
                \r\n\
                iVBORw0KGgo=\r\n";

    assert_eq!(parse_reply_raw(raw).unwrap(), "");
}
