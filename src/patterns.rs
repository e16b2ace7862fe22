//! Locale pattern tables and their compiled alternations
//!
//! Every family is kept as data: an ordered table of per-language entries
//! that is joined into a single alternation the first time it is used.
//! Table order is match-preference order, so new languages go at the end.

use regex::Regex;
use std::sync::LazyLock;

/// One language's contribution to a pattern family
#[derive(Debug, Clone, Copy)]
pub struct LocalePattern {
    pub language: &'static str,
    pub pattern: &'static str,
}

/// A quote introducer such as "On <date>, <name> wrote:"
///
/// `lead` opens the line (usually a preposition before the date). Entries
/// without a lead are recognised by their verb alone and must carry a digit
/// (the date) somewhere before it.
#[derive(Debug, Clone, Copy)]
pub struct IntroducerPattern {
    pub language: &'static str,
    pub lead: Option<&'static str>,
    pub verb: &'static str,
}

const fn locale(language: &'static str, pattern: &'static str) -> LocalePattern {
    LocalePattern { language, pattern }
}

const fn led(language: &'static str, lead: &'static str, verb: &'static str) -> IntroducerPattern {
    IntroducerPattern {
        language,
        lead: Some(lead),
        verb,
    }
}

const fn bare(language: &'static str, verb: &'static str) -> IntroducerPattern {
    IntroducerPattern {
        language,
        lead: None,
        verb,
    }
}

/// Lines that attribute the quoted text below them
pub const QUOTE_INTRODUCERS: &[IntroducerPattern] = &[
    led("English", "On", "wrote"),
    led("Italian", "Il", r"ha\s*scritto"),
    led("German", "Am", "schrieb"),
    led("Dutch", "Op", "(?:schreef|geschreven)"),
    led("French", "Le", r"a\s+[ée]crit"),
    led("Spanish", "El", "escribi[óo]"),
    led("Catalan", "El", r"va\s+escriure"),
    led("Portuguese", "(?:Em|No dia|A)", "escreveu"),
    led("Swedish", "(?:m[åa]n|tis|ons|tors|fre|l[öo]r|s[öo]n)", "skrev"),
    led("Danish", "(?:Den|man|tir|ons|tor|fre|l[øo]r|s[øo]n)", "skrev"),
    led("Finnish", "(?:ma|ti|ke|to|pe|la|su)", "kirjoitti"),
    led("Polish", "(?:Dnia|W dniu)", "(?:napisa[łl]|pisze)"),
    led("Slovak", "D[ňn]a", "nap[íi]sal"),
    led("Czech", "Dne", "napsal"),
    led("Romanian", "(?:Pe|[ÎI]n)", r"a\s+scris"),
    led("Greek", "Στις", "έγραψε"),
    led("Arabic", "في", "كتب"),
    led("Vietnamese", "Vào", r"đã\s+viết"),
    led("Indonesian", "Pada", "menulis"),
    bare("Hungarian", "[íi]rta"),
    bare("Turkish", "yazd[ıi]"),
    bare("Russian", "(?:написал|пишет)"),
    bare("Ukrainian", "(?:написав|написала|пише)"),
    bare("Hebrew", "כתב"),
    bare("Chinese", "(?:写道|寫道)"),
    bare("Korean", "작성"),
    bare("Japanese", "(?:書きました|のメッセージ)"),
    bare("Bulgarian", "написа"),
];

/// Field names of forwarded or quoted message headers
pub const HEADER_FIELDS: &[LocalePattern] = &[
    locale("English", "From|Sent|To|Cc|Bcc|Subject|Date|Reply-To"),
    locale("Italian", "Da|A|Data|Oggetto|Inviato"),
    locale("Swedish", "Från|Fran|Datum|Till|Ämne|Amne|Skickat|Kopia"),
    locale("German", "Von|Gesendet|An|Betreff|Datum|Kopie"),
    locale(
        "Finnish",
        "Lähettäjä|Lahettaja|Päiväys|Paivays|Vastaanottaja|Aihe|Lähetetty|Lahetetty",
    ),
    locale("Danish", "Fra|Sendt|Til|Emne|Dato"),
    locale("French", "De|À|Objet|Envoyé|Envoye|Date"),
    locale("Portuguese", "De|Para|Assunto|Enviado|Enviada|Data"),
    locale("Spanish", "De|Para|Asunto|Enviado|Fecha|CC"),
    locale("Dutch", "Van|Aan|Onderwerp|Verzonden|Datum"),
    locale("Polish", "Od|Do|Temat|Wysłano|Wyslano|Data|DW"),
    locale("Czech", "Od|Komu|Předmět|Predmet|Odesláno|Odeslano|Datum"),
    locale("Romanian", "De la|Către|Catre|Subiect|Trimis|Dată|Data"),
    locale("Hungarian", "Feladó|Felado|Címzett|Cimzett|Tárgy|Targy|Elküldve|Dátum"),
    locale("Turkish", "Kimden|Kime|Konu|Gönderildi|Gonderildi|Tarih"),
    locale("Russian", "От|Кому|Тема|Отправлено|Дата|Копия"),
    locale("Ukrainian", "Від|Кому|Тема|Надіслано"),
    locale("Greek", "Από|Προς|Θέμα|Στάλθηκε|Ημερομηνία|Κοιν"),
    locale("Arabic", "من|إلى|الموضوع|التاريخ|تاريخ الإرسال|نسخة"),
    locale("Hebrew", "מאת|אל|נושא|נשלח|תאריך"),
    locale("Chinese", "发件人|收件人|主题|发送时间|日期|抄送|寄件者|收件者|主旨"),
    locale("Japanese", "差出人|宛先|件名|送信日時|日付"),
    locale("Korean", "보낸 사람|받는 사람|제목|보낸 날짜|날짜"),
];

/// Mail-client boilerplate appended below a reply
pub const DEVICE_SIGNOFFS: &[LocalePattern] = &[
    locale("English", "Sent from"),
    locale("English", "Sent via"),
    locale("English", "Get Outlook for"),
    locale("Italian", "Inviato da"),
    locale("Italian", "Scarica Outlook per"),
    locale("Swedish", "Skickat fr[åa]n"),
    locale("Swedish", "Skaffa Outlook f[öo]r"),
    locale("German", "Gesendet (?:von|mit)"),
    locale("German", r"Von meinem \S+ gesendet"),
    locale("Finnish", "L[äa]hetetty"),
    locale("Finnish", "Hanki Outlook"),
    locale("Danish", "Sendt fra"),
    locale("Portuguese", "Enviado d[eo]"),
    locale("Portuguese", "Obter o Outlook"),
    locale("Spanish", "Enviado desde"),
    locale("Spanish", "Obtener Outlook"),
    locale("Dutch", "Verstuurd vanaf"),
    locale("Dutch", "Verzonden (?:vanaf|met)"),
    locale("French", "Envoy[ée] (?:de|depuis)"),
    locale("French", "Obtenir Outlook pour"),
    locale("French", "T[ée]l[ée]chargez Outlook"),
    locale("Polish", "Wys[łl]ane z"),
    locale("Romanian", "Trimis (?:de pe|din)"),
    locale("Czech", "Odesl[áa]no z"),
    locale("Russian", "(?:Отправлено с|Otpravleno s)"),
];

/// Bare signature delimiters recognised at the start of a line
const SIGNATURE_DELIMITERS: &str = r"--|__|-\w|\*\s?\*\s?\*";

/// Closing salutations, matched against ASCII-folded text
///
/// Single-word closings are limited to a small set; a lone "Cumprimentos"
/// or "Groeten" above a name is part of the signature block and is kept.
/// Other languages contribute multi-word closings only.
pub const SIGNOFF_PHRASES: &[LocalePattern] = &[
    locale(
        "English",
        "kind regards|warm regards|warmest regards|best regards|regards|best wishes|\
         all the best|yours sincerely|sincerely|yours truly|cheers|best",
    ),
    locale(
        "French",
        "tres cordialement|bien cordialement|cordialement|bien a vous|merci d'avance|\
         d'avance merci",
    ),
    locale(
        "German",
        "mit freundlichen grussen|freundliche grusse|herzliche grusse|liebe grusse|\
         viele grusse|beste grusse|vielen dank im voraus|vielen dank und lg|vielen dank|\
         grussen|grusse",
    ),
    locale(
        "Italian",
        "cordiali saluti|distinti saluti|un saluto|saluti|buona giornata|cordialmente",
    ),
    locale(
        "Romanian",
        "o zi buna va urez|o zi buna|cu respect|cu stima|cu bine|toate cele bune",
    ),
    locale("Spanish", "saludos cordiales|atentamente|un saludo|un abrazo"),
    locale("Portuguese", "com os melhores cumprimentos"),
    locale("Dutch", "met vriendelijke groet|hartelijke groet"),
    locale("Swedish", "med vanliga halsningar|vanliga halsningar"),
    locale("Danish", "med venlig hilsen|venlig hilsen|med vennlig hilsen|vennlig hilsen"),
    locale("Finnish", "ystavallisin terveisin"),
    locale("Polish", "z powazaniem|serdecznie pozdrawiam"),
    locale("Russian", "s uvazheniem"),
];

/// Terminal thank-you closings, matched against ASCII-folded text
pub const THANKS_PHRASES: &[LocalePattern] = &[
    locale(
        "English",
        "thank you in advance|thanks in advance|many thanks|thank you|thanks",
    ),
    locale("French", "merci beaucoup|merci"),
    locale("German", "danke schon|danke"),
    locale("Italian", "grazie mille|grazie"),
    locale(
        "Romanian",
        "multumesc anticipat|multumesc frumos|multumesc",
    ),
    locale("Spanish", "muchas gracias|muchos gracias|gracias"),
];

fn alternation<'a>(patterns: impl IntoIterator<Item = &'a str>) -> String {
    patterns
        .into_iter()
        .map(|p| format!("(?:{p})"))
        .collect::<Vec<_>>()
        .join("|")
}

fn introducer_line(entry: &IntroducerPattern) -> String {
    match entry.lead {
        Some(lead) => format!(r"(?:{lead})\s.*(?:{})[^\n]{{0,60}}[:：]", entry.verb),
        None => format!(r".*\d.*(?:{})[^\n]{{0,60}}[:：]", entry.verb),
    }
}

fn introducer_span(entry: &IntroducerPattern) -> Option<String> {
    entry.lead.map(|lead| {
        format!(
            r"(?:{lead})\s[^\n]*?(?:\n[^\n]*?){{0,3}}?(?:{})[^\n]{{0,60}}?[:：][ \t]*$",
            entry.verb
        )
    })
}

/// Whole-line quote introducer, tested against a trimmed line
pub static QUOTE_INTRODUCER: LazyLock<Regex> = LazyLock::new(|| {
    let lines: Vec<String> = QUOTE_INTRODUCERS.iter().map(introducer_line).collect();
    let body = alternation(lines.iter().map(String::as_str));
    Regex::new(&format!("^(?:{body})$")).expect("quote introducer table compiles")
});

/// Quote introducer that may be wrapped over up to four physical lines
pub static QUOTE_INTRODUCER_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    let spans: Vec<String> = QUOTE_INTRODUCERS.iter().filter_map(introducer_span).collect();
    let body = alternation(spans.iter().map(String::as_str));
    Regex::new(&format!(r"(?m)^[ \t]*(?:{body})")).expect("quote introducer span table compiles")
});

/// Forwarded/reply header field at the start of a line
pub static HEADER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    let body = alternation(HEADER_FIELDS.iter().map(|p| p.pattern));
    Regex::new(&format!(r"^[ \t]*\**[ \t]*(?:{body})[ \t]*\**[ \t]*[:：]"))
        .expect("header field table compiles")
});

/// Line that opens a signature block, tested against a trimmed line
pub static SIGNATURE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let body = alternation(DEVICE_SIGNOFFS.iter().map(|p| p.pattern));
    Regex::new(&format!(r"^(?:{SIGNATURE_DELIMITERS}|(?:{body})\b)"))
        .expect("signature line table compiles")
});

/// Device boilerplate or bare delimiter line anywhere in a text
pub static DEVICE_SIGNOFF: LazyLock<Regex> = LazyLock::new(|| {
    let body = alternation(DEVICE_SIGNOFFS.iter().map(|p| p.pattern));
    Regex::new(&format!(
        r"(?im)^[ \t]*(?:(?:-{{2,}}|_{{2,}}|\*[ \t]?\*[ \t]?\*)[ \t]*$|(?:{body})\b[^\n]{{0,50}}$)"
    ))
    .expect("device signoff table compiles")
});

/// Closing salutation (`closing`) or thank-you closing (`thanks`)
///
/// A sign-off has to open a line or follow the end of a sentence.
pub static SIGNOFF: LazyLock<Regex> = LazyLock::new(|| {
    let closing = alternation(SIGNOFF_PHRASES.iter().map(|p| p.pattern));
    let thanks = alternation(THANKS_PHRASES.iter().map(|p| p.pattern));
    Regex::new(&format!(
        r"(?im)(?:^|[.!?][ \t]+)[ \t]*(?:(?P<closing>\b(?:{closing})\b[^\n,]{{0,20}}?(?:,|\n))|(?P<thanks>\b(?:{thanks})\b[ \t]*[,!]*[ \t]*\n))"
    ))
    .expect("signoff table compiles")
});

/// Run of signature-shaped tokens following a sign-off
pub static SIGNATURE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\w+(?:[\n.]|\z))+").expect("signature run compiles"));

/// Separator run of seven or more `_`/`-` on its own line
pub static BOUNDARY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n ?[_-]{7,}").expect("boundary line compiles"));
