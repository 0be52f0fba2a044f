//! Core data types shared across the crate
//!
//! Defines the Penn Treebank part-of-speech tag set, tagged tokens and
//! word-frequency pairs.

use serde::Serialize;
use std::fmt;

/// Penn Treebank part-of-speech tags
///
/// Punctuation tags follow the Treebank convention of using the punctuation
/// itself as the label (`.`, `,`, `:`, `` ` ` ``, `''`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun (`PRP$`)
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun (`WP$`)
    WPS,
    /// Wh-adverb
    WRB,
    /// Sentence-final punctuation
    Period,
    /// Comma
    Comma,
    /// Colon, semicolon, dash or ellipsis
    Colon,
    /// Opening bracket
    LeftParen,
    /// Closing bracket
    RightParen,
    /// Opening quote
    OpenQuote,
    /// Closing quote
    CloseQuote,
    /// Dollar sign
    Dollar,
    /// Pound sign
    Hash,
}

impl PosTag {
    /// The Treebank label for this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WPS => "WP$",
            PosTag::WRB => "WRB",
            PosTag::Period => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::LeftParen => "(",
            PosTag::RightParen => ")",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
            PosTag::Dollar => "$",
            PosTag::Hash => "#",
        }
    }

    /// Check if this is a noun tag (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    /// Check if this is any verb form
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    /// Check if this is an adjective tag
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::JJ | PosTag::JJR | PosTag::JJS)
    }

    /// Check if this is an adverb tag
    pub fn is_adverb(&self) -> bool {
        matches!(self, PosTag::RB | PosTag::RBR | PosTag::RBS)
    }

    /// Check if this is a personal or possessive pronoun
    pub fn is_pronoun(&self) -> bool {
        matches!(self, PosTag::PRP | PosTag::PRPS)
    }

    /// Check if this is a punctuation tag
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            PosTag::Period
                | PosTag::Comma
                | PosTag::Colon
                | PosTag::LeftParen
                | PosTag::RightParen
                | PosTag::OpenQuote
                | PosTag::CloseQuote
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    /// Token text as produced by the word tokenizer
    pub text: String,
    /// Assigned tag
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// A word and the number of times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<WordCount> for (String, usize) {
    fn from(wc: WordCount) -> Self {
        (wc.word, wc.count)
    }
}
