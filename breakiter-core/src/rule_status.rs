//! Rule-status tags and the token classifier
//!
//! Every boundary carries an integer rule status explaining why it occurred.
//! The meaning depends on the break type and is expressed as half-open
//! ranges of 100: a status `s` belongs to the tag whose range `[tag, limit)`
//! contains it.

use crate::types::BreakType;

/// Status used when the engine reports nothing
pub const DEFAULT_STATUS: i32 = 0;

/// Word rule-status ranges
pub mod word {
    /// Uncategorised run: spaces, punctuation, symbols
    pub const NONE: i32 = 0;
    /// Upper bound (exclusive) of [`NONE`]
    pub const NONE_LIMIT: i32 = 100;
    /// Numeric run
    pub const NUMBER: i32 = 100;
    /// Upper bound (exclusive) of [`NUMBER`]
    pub const NUMBER_LIMIT: i32 = 200;
    /// Alphabetic run
    pub const LETTER: i32 = 200;
    /// Upper bound (exclusive) of [`LETTER`]
    pub const LETTER_LIMIT: i32 = 300;
    /// Hiragana or katakana run
    pub const KANA: i32 = 300;
    /// Upper bound (exclusive) of [`KANA`]
    pub const KANA_LIMIT: i32 = 400;
    /// Ideographic run
    pub const IDEO: i32 = 400;
    /// Upper bound (exclusive) of [`IDEO`]
    pub const IDEO_LIMIT: i32 = 500;
}

/// Line rule-status ranges
pub mod line {
    /// Break opportunity (wrap allowed here)
    pub const SOFT: i32 = 0;
    /// Upper bound (exclusive) of [`SOFT`]
    pub const SOFT_LIMIT: i32 = 100;
    /// Mandatory break after a line terminator
    pub const HARD: i32 = 100;
    /// Upper bound (exclusive) of [`HARD`]
    pub const HARD_LIMIT: i32 = 200;
}

/// Sentence rule-status ranges
pub mod sentence {
    /// Sentence ended by a terminator such as `.`, `?` or `!`
    pub const TERM: i32 = 0;
    /// Upper bound (exclusive) of [`TERM`]
    pub const TERM_LIMIT: i32 = 100;
    /// Sentence ended by a line or paragraph separator
    pub const SEP: i32 = 100;
    /// Upper bound (exclusive) of [`SEP`]
    pub const SEP_LIMIT: i32 = 200;
}

/// Named category of a word-break status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordTag {
    /// Spaces and punctuation
    None,
    /// Numbers
    Number,
    /// Letters
    Letter,
    /// Kana
    Kana,
    /// Ideographs
    Ideo,
}

impl WordTag {
    /// Map a raw status into its range, `None` for values outside every range
    pub fn from_status(status: i32) -> Option<Self> {
        match status {
            word::NONE..word::NONE_LIMIT => Some(WordTag::None),
            word::NUMBER..word::NUMBER_LIMIT => Some(WordTag::Number),
            word::LETTER..word::LETTER_LIMIT => Some(WordTag::Letter),
            word::KANA..word::KANA_LIMIT => Some(WordTag::Kana),
            word::IDEO..word::IDEO_LIMIT => Some(WordTag::Ideo),
            _ => None,
        }
    }

    /// Lower bound of the tag's range
    pub fn status(&self) -> i32 {
        match self {
            WordTag::None => word::NONE,
            WordTag::Number => word::NUMBER,
            WordTag::Letter => word::LETTER,
            WordTag::Kana => word::KANA,
            WordTag::Ideo => word::IDEO,
        }
    }
}

/// Named category of a line-break status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTag {
    /// Optional break
    Soft,
    /// Mandatory break
    Hard,
}

impl LineTag {
    /// Map a raw status into its range
    pub fn from_status(status: i32) -> Option<Self> {
        match status {
            line::SOFT..line::SOFT_LIMIT => Some(LineTag::Soft),
            line::HARD..line::HARD_LIMIT => Some(LineTag::Hard),
            _ => None,
        }
    }

    /// Lower bound of the tag's range
    pub fn status(&self) -> i32 {
        match self {
            LineTag::Soft => line::SOFT,
            LineTag::Hard => line::HARD,
        }
    }
}

/// Named category of a sentence-break status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceTag {
    /// Ended by terminal punctuation
    Term,
    /// Ended by a separator
    Sep,
}

impl SentenceTag {
    /// Map a raw status into its range
    pub fn from_status(status: i32) -> Option<Self> {
        match status {
            sentence::TERM..sentence::TERM_LIMIT => Some(SentenceTag::Term),
            sentence::SEP..sentence::SEP_LIMIT => Some(SentenceTag::Sep),
            _ => None,
        }
    }

    /// Lower bound of the tag's range
    pub fn status(&self) -> i32 {
        match self {
            SentenceTag::Term => sentence::TERM,
            SentenceTag::Sep => sentence::SEP,
        }
    }
}

/// A rule status interpreted for a particular break type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTag {
    /// Word status
    Word(WordTag),
    /// Line status
    Line(LineTag),
    /// Sentence status
    Sentence(SentenceTag),
}

impl RuleTag {
    /// Interpret `status` for `kind`.
    ///
    /// Character breaks carry no categories and always yield `None`.
    pub fn classify(kind: BreakType, status: i32) -> Option<Self> {
        match kind {
            BreakType::Character => None,
            BreakType::Word => WordTag::from_status(status).map(RuleTag::Word),
            BreakType::Line => LineTag::from_status(status).map(RuleTag::Line),
            BreakType::Sentence => SentenceTag::from_status(status).map(RuleTag::Sentence),
        }
    }
}

/// Whether the segment ending at a boundary with `status` is a real token.
///
/// Character, line and sentence segments always count. A word segment counts
/// only when its run was categorised (number, letter, kana, ideograph) rather
/// than left as whitespace or punctuation.
pub fn is_token(kind: BreakType, status: i32) -> bool {
    match kind {
        BreakType::Character | BreakType::Line | BreakType::Sentence => true,
        BreakType::Word => !(word::NONE..word::NONE_LIMIT).contains(&status),
    }
}
