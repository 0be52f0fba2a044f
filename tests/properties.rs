//! Property tests for the analysis operations

use std::collections::BTreeSet;

use nlp_utilities::{TextAnalyzer, WordClass};
use proptest::prelude::*;

fn sentence_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.!?;:'()-]{0,160}"
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..30)
}

proptest! {
    #[test]
    fn expunge_punctuation_is_idempotent(text in "[ -~\t\n]{0,200}") {
        let analyzer = TextAnalyzer::shared();
        let once = analyzer.expunge_punctuation(&text);
        let twice = analyzer.expunge_punctuation(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn ngram_count_matches_window_count(words in word_list(), n in 1usize..6) {
        let analyzer = TextAnalyzer::shared();
        let text = words.join(" ");
        let token_count = analyzer.word_tokens(&text).len();
        let grams = analyzer.ngrams(&text, n).unwrap();

        let expected = if token_count >= n { token_count - n + 1 } else { 0 };
        prop_assert_eq!(grams.len(), expected);
        for gram in &grams {
            prop_assert_eq!(gram.split(' ').count(), n);
        }
    }

    #[test]
    fn most_common_is_bounded_and_sorted(text in sentence_text(), n in 1usize..10) {
        let analyzer = TextAnalyzer::shared();
        let top = analyzer.most_common_words(&text, n).unwrap();

        prop_assert!(top.len() <= n);
        for pair in top.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        let distinct: BTreeSet<_> = top.iter().map(|wc| wc.word.as_str()).collect();
        prop_assert_eq!(distinct.len(), top.len());
    }

    #[test]
    fn frequency_distribution_matches_most_common(text in sentence_text(), n in 1usize..10) {
        let analyzer = TextAnalyzer::shared();
        prop_assert_eq!(
            analyzer.frequency_distribution(&text, n as f64 + 0.75).unwrap(),
            analyzer.most_common_words(&text, n).unwrap()
        );
    }

    #[test]
    fn extracted_words_are_sorted_unique_subsets(text in sentence_text()) {
        let analyzer = TextAnalyzer::shared();
        let vocabulary: BTreeSet<String> = analyzer.word_tokens(&text).into_iter().collect();

        for class in WordClass::ALL {
            let words = analyzer.extract(&text, class);
            for pair in words.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for word in &words {
                prop_assert!(vocabulary.contains(word));
            }
        }
    }

    #[test]
    fn outputs_are_lowercase(text in sentence_text()) {
        let analyzer = TextAnalyzer::shared();
        for sentence in analyzer.sentences(&text) {
            prop_assert_eq!(sentence.to_lowercase(), sentence.clone());
        }
        for token in analyzer.word_punct(&text) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }
}
