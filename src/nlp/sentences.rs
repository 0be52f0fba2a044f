//! Sentence boundary detection
//!
//! A sentence ends after a run of terminators (`.`, `!`, `?`, `…`) and any
//! closing quotes or brackets, provided whitespace or the end of the text
//! follows. A lone period after a known abbreviation or a single capital
//! initial does not end a sentence.

use rustc_hash::FxHashSet;

/// Abbreviations that do not end a sentence (lowercase, without the final period)
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "e.g", "i.e", "cf",
    "inc", "ltd", "co", "corp", "dept", "univ", "gen", "gov", "sen", "rep", "lt", "col", "capt",
    "sgt", "rev", "hon", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "fig", "approx", "est", "a.m", "p.m", "u.s", "u.k", "ph.d",
];

const TERMINATORS: [char; 4] = ['.', '!', '?', '…'];
const CLOSERS: [char; 7] = ['"', '\'', ')', ']', '}', '”', '’'];

/// Splits text into sentences
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    /// Create a splitter with the default abbreviation list
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add abbreviations (a trailing period is ignored)
    pub fn with_abbreviations<S: AsRef<str>>(mut self, abbreviations: &[S]) -> Self {
        for abbr in abbreviations {
            let abbr = abbr.as_ref().trim().trim_end_matches('.').to_lowercase();
            if !abbr.is_empty() {
                self.abbreviations.insert(abbr);
            }
        }
        self
    }

    /// Check if a word (without its final period) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    /// Split text into trimmed, non-empty sentence slices
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !TERMINATORS.contains(&c) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
                j += 1;
            }
            let lone_period = c == '.' && j == i + 1;
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                j += 1;
            }

            let at_break = j == chars.len() || chars[j].1.is_whitespace();
            if at_break && !(lone_period && self.is_non_terminal_period(&text[start..pos])) {
                let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
            i = j;
        }

        if start < text.len() {
            push_trimmed(&mut sentences, &text[start..]);
        }

        sentences
    }

    /// Whether a period directly after `before` belongs to an abbreviation or initial
    fn is_non_terminal_period(&self, before: &str) -> bool {
        let word_start = before
            .char_indices()
            .rev()
            .take_while(|&(_, c)| c.is_alphanumeric() || c == '.')
            .last()
            .map_or(before.len(), |(idx, _)| idx);
        let word = &before[word_start..];
        if word.is_empty() {
            return false;
        }

        let mut letters = word.chars();
        if let (Some(first), None) = (letters.next(), letters.next()) {
            // Single capital initial, e.g. "J. Smith"; "I." is the pronoun
            if first.is_uppercase() && first != 'I' {
                return true;
            }
        }

        self.is_abbreviation(word)
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Hello world. How are you? I am fine!");

        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Mr. Smith met Dr. Jones. They talked.");

        assert_eq!(sentences, vec!["Mr. Smith met Dr. Jones.", "They talked."]);
    }

    #[test]
    fn test_initials_and_dotted_abbreviations() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("J. R. Tolkien wrote books, e.g. The Hobbit. Read it.");

        assert_eq!(
            sentences,
            vec!["J. R. Tolkien wrote books, e.g. The Hobbit.", "Read it."]
        );
    }

    #[test]
    fn test_pronoun_i_still_ends_sentence() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("So did I. Then we left.");

        assert_eq!(sentences, vec!["So did I.", "Then we left."]);
    }

    #[test]
    fn test_closing_quotes_stay_with_sentence() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("He said \"stop.\" Then he left.");

        assert_eq!(sentences, vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn test_decimal_numbers_and_runs() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Pi is 3.14!! Really?! Yes");

        assert_eq!(sentences, vec!["Pi is 3.14!!", "Really?!", "Yes"]);
    }

    #[test]
    fn test_custom_abbreviation() {
        let splitter = SentenceSplitter::new().with_abbreviations(&["Approx.", "bldg"]);
        let sentences = splitter.split("Meet at bldg. Four. Done.");

        assert!(splitter.is_abbreviation("BLDG"));
        assert_eq!(sentences, vec!["Meet at bldg. Four.", "Done."]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let splitter = SentenceSplitter::new();

        assert!(splitter.split("").is_empty());
        assert!(splitter.split("   \n ").is_empty());
        assert_eq!(splitter.split("no terminator"), vec!["no terminator"]);
    }
}
