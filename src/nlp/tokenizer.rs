//! Word tokenization
//!
//! Two tokenizers are provided:
//!
//! - [`word_tokenize`]: Treebank-style tokens. Text is split into sentences,
//!   each sentence is segmented on Unicode word boundaries, clitics are split
//!   off contractions (`don't` → `do n't`), and double quotes are rewritten as
//!   ``` `` ``` / `''`.
//! - [`wordpunct_tokenize`]: the simple regex tokenizer `\w+|[^\w\s]+`.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::sentences::SentenceSplitter;

const WORDPUNCT_PATTERN: &str = r"\w+|[^\w\s]+";

/// Clitic suffixes split off the end of a word, longest first
const CLITICS: &[&str] = &[
    "n't", "n’t", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'s", "’s", "'d", "’d", "'m", "’m",
];

fn wordpunct_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORDPUNCT_PATTERN).expect("wordpunct pattern is valid"))
}

/// Split text into runs of word characters and runs of other non-space characters
pub fn wordpunct_tokenize(text: &str) -> Vec<String> {
    wordpunct_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into Treebank-style word and punctuation tokens
pub fn word_tokenize(text: &str, splitter: &SentenceSplitter) -> Vec<String> {
    let mut tokens = Vec::new();
    for sentence in splitter.split(text) {
        tokenize_sentence(sentence, &mut tokens);
    }
    tokens
}

/// State carried between segments of one sentence
#[derive(Default)]
struct SegmentState {
    /// Byte offset just past the previous non-whitespace segment
    prev_end: Option<usize>,
    /// Previous segment was a word with no clitic split off
    prev_word: bool,
    /// Last token is a `-` directly attached to a preceding word
    pending_hyphen: bool,
}

fn tokenize_sentence(sentence: &str, out: &mut Vec<String>) {
    let first_token = out.len();
    let mut state = SegmentState::default();

    for (offset, segment) in sentence.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        let adjacent = state.prev_end == Some(offset);

        if segment.chars().any(char::is_alphanumeric) {
            let pieces = split_clitics(segment);
            let whole = pieces.len() == 1;
            let mut pieces = pieces.into_iter();
            let joins_hyphen = adjacent
                && state.pending_hyphen
                && out.len() >= first_token + 2
                && out.last().map(String::as_str) == Some("-");
            if joins_hyphen {
                // "well" "-" "known" → "well-known"
                out.pop();
                if let (Some(last), Some(first)) = (out.last_mut(), pieces.next()) {
                    last.push('-');
                    last.push_str(first);
                }
            }
            out.extend(pieces.map(str::to_string));
            state.prev_word = whole;
            state.pending_hyphen = false;
        } else {
            for c in segment.chars() {
                push_punctuation(c, adjacent, first_token, &mut state, out);
            }
        }
        state.prev_end = Some(offset + segment.len());
    }
}

fn push_punctuation(
    c: char,
    adjacent: bool,
    first_token: usize,
    state: &mut SegmentState,
    out: &mut Vec<String>,
) {
    let in_sentence = out.len() > first_token;
    let last = out.last().map(String::as_str);
    let after_word = adjacent && state.prev_word;
    state.prev_word = false;
    state.pending_hyphen = false;

    match c {
        '.' if adjacent && in_sentence && matches!(last, Some(".") | Some("..")) => {
            if let Some(last) = out.last_mut() {
                last.push('.');
            }
        }
        '-' if adjacent && in_sentence && last == Some("-") => {
            if let Some(last) = out.last_mut() {
                last.push('-');
            }
        }
        '-' => {
            state.pending_hyphen = after_word;
            out.push("-".to_string());
        }
        '"' => {
            let opening = !adjacent
                || !in_sentence
                || matches!(last, Some("(") | Some("[") | Some("{") | Some("``") | Some("-"));
            out.push(if opening { "``" } else { "''" }.to_string());
        }
        '“' => out.push("``".to_string()),
        '”' => out.push("''".to_string()),
        _ => out.push(c.to_string()),
    }
}

/// Split a word into its stem and trailing clitic, if any
///
/// `can't` → `ca n't`, `won't` → `wo n't`, `cannot` → `can not`, `it's` → `it 's`
pub fn split_clitics(word: &str) -> Vec<&str> {
    if word.eq_ignore_ascii_case("cannot") {
        return vec![&word[..3], &word[3..]];
    }

    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let idx = word.len() - clitic.len();
        if word.is_char_boundary(idx) && word[idx..].eq_ignore_ascii_case(clitic) {
            return vec![&word[..idx], &word[idx..]];
        }
    }

    vec![word]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        word_tokenize(text, &SentenceSplitter::new())
    }

    #[test]
    fn test_basic_word_tokenize() {
        assert_eq!(
            tokenize("the quick brown fox jumps."),
            vec!["the", "quick", "brown", "fox", "jumps", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            tokenize("i can't go, it's late and we won't stay"),
            vec!["i", "ca", "n't", "go", ",", "it", "'s", "late", "and", "we", "wo", "n't", "stay"]
        );
        assert_eq!(tokenize("you cannot"), vec!["you", "can", "not"]);
    }

    #[test]
    fn test_hyphens_and_dashes() {
        assert_eq!(
            tokenize("a well-known fact -- sort of"),
            vec!["a", "well-known", "fact", "--", "sort", "of"]
        );
    }

    #[test]
    fn test_hyphen_before_punctuation_is_not_joined() {
        assert_eq!(tokenize("pre-(1990) data"), vec!["pre", "-", "(", "1990", ")", "data"]);
        assert_eq!(tokenize("e-\"mail\" me"), vec!["e", "-", "``", "mail", "''", "me"]);
        assert_eq!(tokenize("it's-known"), vec!["it", "'s", "-", "known"]);
    }

    #[test]
    fn test_ellipsis_and_quotes() {
        assert_eq!(
            tokenize("he said \"wait...\" and left"),
            vec!["he", "said", "``", "wait", "...", "''", "and", "left"]
        );
    }

    #[test]
    fn test_numbers_stay_whole() {
        assert_eq!(
            tokenize("it costs $1,000.50 today"),
            vec!["it", "costs", "$", "1,000.50", "today"]
        );
    }

    #[test]
    fn test_multiple_sentences() {
        assert_eq!(
            tokenize("hi there. how are you?"),
            vec!["hi", "there", ".", "how", "are", "you", "?"]
        );
    }

    #[test]
    fn test_wordpunct_tokenize() {
        assert_eq!(
            wordpunct_tokenize("good muffins cost $3.88 in new york. don't!"),
            vec![
                "good", "muffins", "cost", "$", "3", ".", "88", "in", "new", "york", ".", "don",
                "'", "t", "!"
            ]
        );
    }

    #[test]
    fn test_wordpunct_groups_punctuation_runs() {
        assert_eq!(wordpunct_tokenize("wait?!... ok"), vec!["wait", "?!...", "ok"]);
    }

    #[test]
    fn test_split_clitics() {
        assert_eq!(split_clitics("don't"), vec!["do", "n't"]);
        assert_eq!(split_clitics("they’re"), vec!["they", "’re"]);
        assert_eq!(split_clitics("'s"), vec!["'s"]);
        assert_eq!(split_clitics("word"), vec!["word"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(wordpunct_tokenize("   ").is_empty());
    }
}
