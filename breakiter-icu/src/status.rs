//! Rule-status derivation for ICU4X segments
//!
//! ICU4X reports a word type for word breaks only. Line and sentence
//! statuses are recovered from the text of the segment that ends at the
//! boundary, the way ICU4C's rule tags would tag it.

use breakiter_core::rule_status::{line, sentence, word};
use icu_segmenter::WordType;

/// Word status for the segment `text` that ICU4X typed as `word_type`
pub fn word_status(word_type: WordType, text: &str) -> i32 {
    match word_type {
        WordType::Number => word::NUMBER,
        WordType::Letter => {
            if text.chars().any(is_ideographic) {
                word::IDEO
            } else if text.chars().any(is_kana) {
                word::KANA
            } else {
                word::LETTER
            }
        }
        _ => word::NONE,
    }
}

/// Line status: hard when the segment ends in a mandatory break
pub fn line_status(text: &str) -> i32 {
    match text.chars().next_back() {
        Some(ch) if is_mandatory_break(ch) => line::HARD,
        _ => line::SOFT,
    }
}

/// Sentence status: separator-ended sentences without a terminator are `SEP`
pub fn sentence_status(text: &str) -> i32 {
    let body = text.trim_end();
    let trailing = &text[body.len()..];
    let body = body.trim_end_matches(is_closing_punctuation);

    match body.chars().next_back() {
        Some(ch) if is_terminator(ch) => sentence::TERM,
        _ if trailing.chars().any(is_separator) => sentence::SEP,
        _ => sentence::TERM,
    }
}

fn is_mandatory_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn is_terminator(ch: char) -> bool {
    matches!(
        ch,
        '.' | '?'
            | '!'
            | '\u{037E}' // Greek question mark
            | '\u{0589}' // Armenian full stop
            | '\u{061F}' // Arabic question mark
            | '\u{06D4}' // Arabic full stop
            | '\u{0964}'
            | '\u{0965}' // Devanagari danda
            | '\u{203C}'
            | '\u{203D}'
            | '\u{2047}'
            | '\u{2048}'
            | '\u{2049}'
            | '\u{2026}' // ellipsis
            | '\u{3002}' // ideographic full stop
            | '\u{FE52}'
            | '\u{FE56}'
            | '\u{FE57}'
            | '\u{FF01}'
            | '\u{FF0E}'
            | '\u{FF1F}'
            | '\u{FF61}'
    )
}

fn is_closing_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\''
            | ')'
            | ']'
            | '}'
            | '\u{00BB}'
            | '\u{2019}'
            | '\u{201D}'
            | '\u{300D}'
            | '\u{300F}'
            | '\u{FF09}'
    )
}

fn is_kana(ch: char) -> bool {
    matches!(
        ch,
        '\u{3040}'..='\u{309F}' // Hiragana
            | '\u{30A0}'..='\u{30FF}' // Katakana
            | '\u{31F0}'..='\u{31FF}'
            | '\u{FF66}'..='\u{FF9F}' // Halfwidth katakana
            | '\u{1B000}'..='\u{1B16F}'
    )
}

fn is_ideographic(ch: char) -> bool {
    matches!(
        ch,
        '\u{3005}'
            | '\u{3007}'
            | '\u{3021}'..='\u{3029}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}'
    )
}
