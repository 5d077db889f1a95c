//! Parse flashcard-generation output into term/definition records

use regex::{Captures, Regex};
use std::sync::LazyLock;
use studyguide_domain::Flashcard;
use tracing::debug;

const TERM_PREFIX: &str = "term:";
const DEFINITION_PREFIX: &str = "definition:";

// A tag starts with a letter after `<` or `</` and never spans a line, so a
// bare `<` in text such as "3 < 4" survives
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[A-Za-z][^<>\n]*>|<!--.*?-->").expect("tag pattern is valid")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|amp|lt|gt|quot|apos|nbsp);")
        .expect("entity pattern is valid")
});

/// Remove markup tags and decode common character entities
///
/// Model output sometimes arrives wrapped in HTML (`<b>Term:</b> ...`).
/// Entities are decoded in a single pass, so `&amp;lt;` becomes `&lt;`
/// rather than `<`. Unknown entities are left as they are.
///
/// # Examples
///
/// ```
/// use studyguide_generator::strip_markup;
///
/// assert_eq!(strip_markup("<b>Term:</b> A &amp; B"), "Term: A & B");
/// ```
pub fn strip_markup(raw: &str) -> String {
    let without_tags = TAG_RE.replace_all(raw, "");
    ENTITY_RE
        .replace_all(&without_tags, |caps: &Captures| decode_entity(&caps[1], &caps[0]))
        .into_owned()
}

fn decode_entity(name: &str, original: &str) -> String {
    let decoded = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let hex = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"));
            let code = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok()
            } else {
                name.strip_prefix('#').and_then(|dec| dec.parse::<u32>().ok())
            };
            code.and_then(char::from_u32)
        }
    };

    decoded.map_or_else(|| original.to_string(), String::from)
}

/// Return the trimmed remainder of `line` after `prefix`, matched ASCII case-insensitively
fn strip_keyword<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(line[prefix.len()..].trim())
    } else {
        None
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse raw model output into an ordered deck of flashcards
///
/// Lines beginning with `Term:` open a new record and lines beginning with
/// `Definition:` complete the pending one; keywords match regardless of case.
/// A definition with no pending term, a term that never receives a
/// definition and every other line are ignored. Never fails: unusable input
/// yields an empty deck.
///
/// # Examples
///
/// ```
/// use studyguide_generator::parse_flashcards;
///
/// let deck = parse_flashcards("Term: Atom\nDefinition: Smallest unit of matter\nTerm: Ion");
/// assert_eq!(deck.len(), 1);
/// assert_eq!(deck[0].term, "Atom");
/// ```
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    let text = strip_markup(raw);

    let mut deck = Vec::new();
    let mut term: Option<String> = None;
    let mut definition: Option<String> = None;

    for line in text.trim().lines().map(str::trim) {
        if let Some(rest) = strip_keyword(line, TERM_PREFIX) {
            if let (Some(t), Some(d)) = (term.take(), definition.take()) {
                push_card(&mut deck, t, d);
            }
            term = non_empty(rest);
            definition = None;
        } else if let Some(rest) = strip_keyword(line, DEFINITION_PREFIX) {
            if term.is_some() {
                definition = non_empty(rest);
            }
        }
    }

    if let (Some(t), Some(d)) = (term, definition) {
        push_card(&mut deck, t, d);
    }

    debug!("Parsed {} flashcards", deck.len());
    deck
}

fn push_card(deck: &mut Vec<Flashcard>, term: String, definition: String) {
    // Both fields are trimmed and non-empty here, so construction cannot fail
    if let Ok(card) = Flashcard::new(term, definition) {
        deck.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(term: &str, definition: &str) -> Flashcard {
        Flashcard::new(term, definition).unwrap()
    }

    #[test]
    fn test_parse_pairs_in_order() {
        let raw = "Term: Mitosis\nDefinition: Cell division\n\
                   Term: Meiosis\nDefinition: Reductive division\n";
        assert_eq!(
            parse_flashcards(raw),
            vec![card("Mitosis", "Cell division"), card("Meiosis", "Reductive division")]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_flashcards("").is_empty());
        assert!(parse_flashcards("   \n\n").is_empty());
    }

    #[test]
    fn test_orphan_definition_and_trailing_term_dropped() {
        let raw = "Definition: Orphan\nTerm: Osmosis\nDefinition: Water diffusion\nTerm: Dangling";
        assert_eq!(parse_flashcards(raw), vec![card("Osmosis", "Water diffusion")]);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let raw = "TERM: Enzyme\ndefinition: Biological catalyst";
        assert_eq!(parse_flashcards(raw), vec![card("Enzyme", "Biological catalyst")]);
    }

    #[test]
    fn test_markup_is_stripped_first() {
        let raw = "<p><b>Term:</b> Allele</p>\n\
                   <p><i>Definition:</i> Variant of a gene &amp; its locus</p>";
        assert_eq!(
            parse_flashcards(raw),
            vec![card("Allele", "Variant of a gene & its locus")]
        );
    }

    #[test]
    fn test_noise_lines_ignored() {
        let raw = concat!(
            "Here are your flashcards:\n\n  Term:  Ribosome  \nSome commentary\n",
            "  Definition:  Protein factory \n\nHope this helps!"
        );
        assert_eq!(parse_flashcards(raw), vec![card("Ribosome", "Protein factory")]);
    }

    #[test]
    fn test_later_definition_replaces_earlier() {
        let raw = "Term: Gene\nDefinition: First\nDefinition: Second";
        assert_eq!(parse_flashcards(raw), vec![card("Gene", "Second")]);
    }

    #[test]
    fn test_empty_fields_do_not_produce_cards() {
        let raw = "Term:\nDefinition: No term\nTerm: No definition\nDefinition:   ";
        assert!(parse_flashcards(raw).is_empty());
    }

    #[test]
    fn test_markdown_bullets_are_not_keywords() {
        // Only lines that start with the keyword count
        let raw = "- Term: Lipid\n- Definition: Fat molecule";
        assert!(parse_flashcards(raw).is_empty());
    }

    #[test]
    fn test_multibyte_line_shorter_than_keyword() {
        assert!(parse_flashcards("été\nDéf").is_empty());
    }

    #[test]
    fn test_many_pairs_round_trip() {
        let raw: String = (0..25)
            .map(|i| format!("Term: T{}\nDefinition: D{}\n", i, i))
            .collect();
        let deck = parse_flashcards(&raw);
        assert_eq!(deck.len(), 25);
        assert_eq!(deck[24], card("T24", "D24"));
    }

    #[test]
    fn test_comparison_operators_are_not_tags() {
        let raw = concat!(
            "Term: Less than\nDefinition: 3 < 4 holds\n",
            "Term: Greater than\nDefinition: 4 > 3 holds\n"
        );
        assert_eq!(
            parse_flashcards(raw),
            vec![card("Less than", "3 < 4 holds"), card("Greater than", "4 > 3 holds")]
        );
    }

    #[test]
    fn test_tags_do_not_span_lines() {
        assert_eq!(strip_markup("a <b\nc> d"), "a <b\nc> d");
        assert_eq!(strip_markup("x<br/>y<!-- note -->z</p >"), "xyz");
        assert_eq!(strip_markup("x < y > z"), "x < y > z");
    }

    #[test]
    fn test_strip_markup_entities() {
        assert_eq!(strip_markup("a&lt;b&gt;c"), "a<b>c");
        assert_eq!(strip_markup("&quot;x&quot; &#39;y&#39; &#x41;"), "\"x\" 'y' A");
        assert_eq!(strip_markup("&amp;lt;"), "&lt;");
        assert_eq!(strip_markup("&unknown; & plain"), "&unknown; & plain");
    }
}
