//! Part-of-speech based word extraction
//!
//! Selects tagged tokens whose tag falls in a fixed whitelist and returns the
//! distinct words in sorted order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{PosTag, TaggedToken};

/// Word classes that can be extracted from tagged text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// `NN NNS NNP NNPS`
    Noun,
    /// `PRP PRP$`
    Pronoun,
    /// `VB VBD VBG VBN VBP VBZ`
    Verb,
    /// `RB RBR RBS`
    Adverb,
    /// `JJ JJR JJS`
    Adjective,
}

impl WordClass {
    /// Every word class
    pub const ALL: [WordClass; 5] = [
        WordClass::Noun,
        WordClass::Pronoun,
        WordClass::Verb,
        WordClass::Adverb,
        WordClass::Adjective,
    ];

    /// The tags belonging to this class
    pub fn tags(&self) -> &'static [PosTag] {
        match self {
            WordClass::Noun => &[PosTag::NN, PosTag::NNS, PosTag::NNP, PosTag::NNPS],
            WordClass::Pronoun => &[PosTag::PRP, PosTag::PRPS],
            WordClass::Verb => &[
                PosTag::VB,
                PosTag::VBD,
                PosTag::VBG,
                PosTag::VBN,
                PosTag::VBP,
                PosTag::VBZ,
            ],
            WordClass::Adverb => &[PosTag::RB, PosTag::RBR, PosTag::RBS],
            WordClass::Adjective => &[PosTag::JJ, PosTag::JJR, PosTag::JJS],
        }
    }

    /// Check if a tag belongs to this class
    pub fn matches(&self, tag: PosTag) -> bool {
        self.tags().contains(&tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Noun => "noun",
            WordClass::Pronoun => "pronoun",
            WordClass::Verb => "verb",
            WordClass::Adverb => "adverb",
            WordClass::Adjective => "adjective",
        }
    }
}

/// Distinct words of the given class, sorted
pub fn extract_words(tagged: &[TaggedToken], class: WordClass) -> Vec<String> {
    tagged
        .iter()
        .filter(|t| class.matches(t.pos))
        .map(|t| t.text.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TaggedToken> {
        vec![
            TaggedToken::new("the", PosTag::DT),
            TaggedToken::new("dog", PosTag::NN),
            TaggedToken::new("chased", PosTag::VBD),
            TaggedToken::new("the", PosTag::DT),
            TaggedToken::new("cats", PosTag::NNS),
            TaggedToken::new("and", PosTag::CC),
            TaggedToken::new("the", PosTag::DT),
            TaggedToken::new("dog", PosTag::NN),
            TaggedToken::new("barked", PosTag::VBD),
            TaggedToken::new("loudly", PosTag::RB),
        ]
    }

    #[test]
    fn test_extract_nouns_sorted_and_deduplicated() {
        assert_eq!(extract_words(&sample(), WordClass::Noun), vec!["cats", "dog"]);
    }

    #[test]
    fn test_extract_other_classes() {
        let tagged = sample();

        assert_eq!(
            extract_words(&tagged, WordClass::Verb),
            vec!["barked", "chased"]
        );
        assert_eq!(extract_words(&tagged, WordClass::Adverb), vec!["loudly"]);
        assert!(extract_words(&tagged, WordClass::Adjective).is_empty());
        assert!(extract_words(&tagged, WordClass::Pronoun).is_empty());
    }

    #[test]
    fn test_class_tag_sets_are_disjoint() {
        for (i, a) in WordClass::ALL.iter().enumerate() {
            for b in &WordClass::ALL[i + 1..] {
                assert!(a.tags().iter().all(|t| !b.matches(*t)));
            }
        }
    }

    #[test]
    fn test_possessive_pronoun_tag() {
        assert!(WordClass::Pronoun.matches(PosTag::PRPS));
        assert!(!WordClass::Pronoun.matches(PosTag::WP));
        assert_eq!(WordClass::Pronoun.as_str(), "pronoun");
    }
}
