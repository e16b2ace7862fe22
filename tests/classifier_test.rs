use email_reply_extract::{LineClassification, ascii_fold, classify_line, is_device_signoff_line};

// --- Quote introducers ---

#[test]
fn test_quote_introducers_across_languages() {
    let introducers = [
        "On Mon, Jan 6, 2020 at 9:00 AM Jane Doe <jane@example.com> wrote:",
        "Am 06.01.2020 um 09:00 schrieb Lukas Weber <lukas@example.de>:",
        "Le 6 janv. 2020 à 09:00, Marie Martin <marie@example.fr> a écrit :",
        "Il giorno lun 6 gen 2020 alle ore 09:00 Paolo Rossi <paolo@example.it> ha scritto:",
        "El lun, 6 ene 2020 a las 9:00, Ana García (<ana@example.es>) escribió:",
        "Op ma 6 jan. 2020 om 09:00 schreef Jan Jansen <jan@example.nl>:",
        "Em seg., 6 de jan. de 2020 às 09:00, João Silva <joao@example.com.br> escreveu:",
        "W dniu 6.01.2020 o 09:00, Jan Kowalski pisze:",
        "6 января 2020 г., в 9:00, Иван <ivan@example.ru> написал:",
        "在 2020年1月6日 09:00，张三 <zhang@example.cn> 写道：",
    ];

    for line in introducers {
        let class = classify_line(line);
        assert!(class.quote_introducer, "{line}");
        assert!(class.header, "{line}");
        assert!(!class.quoted, "{line}");
    }
}

#[test]
fn test_introducer_needs_trailing_colon() {
    let class = classify_line("On second thought, I wrote it myself.");
    assert_eq!(class, LineClassification::default());
}

#[test]
fn test_indented_introducer() {
    assert!(classify_line("   On Jan 1, 2020, Jane wrote:   ").quote_introducer);
}

// --- Header fields ---

#[test]
fn test_header_fields() {
    for line in [
        "From: Jane Doe <jane@example.com>",
        "*From:* Jane Doe",
        "**Subject:** Planning",
        "Von: Lukas Weber",
        "Objet : Réunion",
        "Asunto: Reunión",
        "主题：会议",
        "Тема: встреча",
    ] {
        let class = classify_line(line);
        assert!(class.header, "{line}");
        assert!(!class.quote_introducer, "{line}");
    }
}

#[test]
fn test_plain_lines_are_not_headers() {
    for line in ["Fromage is great: yes", "Hello there", "Dates: tbd", ""] {
        assert!(!classify_line(line).header, "{line}");
    }
}

// --- Quoted lines ---

#[test]
fn test_quoted_lines() {
    assert!(classify_line("> text").quoted);
    assert!(classify_line(">").quoted);
    assert!(classify_line(">> From: someone").quoted);
    assert!(!classify_line("a > b").quoted);
}

// --- Folding ---

#[test]
fn test_ascii_fold() {
    assert_eq!(ascii_fold("Hélène Grüßen"), "Helene Grussen");
    assert_eq!(ascii_fold("Preis: 250 €"), "Preis: 250 €");
    assert_eq!(ascii_fold("plain ascii"), "plain ascii");
}

#[test]
fn test_device_signoff_lines() {
    assert!(is_device_signoff_line("Sent from my iPhone"));
    assert!(is_device_signoff_line("sent from my Galaxy"));
    assert!(is_device_signoff_line("Gesendet von meinem iPad"));
    assert!(is_device_signoff_line("___"));
    assert!(!is_device_signoff_line("I sent it from my phone"));
}

// --- Tables ---

#[test]
fn test_table_language_coverage() {
    use email_reply_extract::{HEADER_FIELDS, QUOTE_INTRODUCERS, SIGNOFF_PHRASES};

    for language in ["English", "German", "French", "Russian", "Chinese"] {
        assert!(
            QUOTE_INTRODUCERS.iter().any(|p| p.language == language),
            "{language}"
        );
        assert!(
            HEADER_FIELDS.iter().any(|p| p.language == language),
            "{language}"
        );
    }
    assert!(SIGNOFF_PHRASES.iter().any(|p| p.language == "Polish"));
}
