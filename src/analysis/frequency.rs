//! Word frequency counting
//!
//! Counts are kept in an `FxHashMap` alongside first-occurrence order, so
//! ties in [`FrequencyDistribution::most_common`] are broken deterministically
//! by whichever word appeared first.

use rustc_hash::FxHashMap;

use crate::types::WordCount;

/// Token occurrence counts
#[derive(Debug, Clone, Default)]
pub struct FrequencyDistribution {
    counts: FxHashMap<String, usize>,
    /// Distinct tokens in first-occurrence order
    order: Vec<String>,
    total: usize,
}

impl FrequencyDistribution {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token in the sequence
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dist = Self::new();
        for token in tokens {
            dist.add(token.as_ref());
        }
        dist
    }

    /// Record one occurrence of a token
    pub fn add(&mut self, token: &str) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
            return;
        }
        self.counts.insert(token.to_string(), 1);
        self.order.push(token.to_string());
    }

    /// Occurrence count for a token (0 if never seen)
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Relative frequency of a token in `[0, 1]`
    pub fn freq(&self, token: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.get(token) as f64 / self.total as f64
    }

    /// The `n` most frequent tokens, by descending count
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<&String> = self.order.iter().collect();
        // Stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| self.counts[*b].cmp(&self.counts[*a]));
        ranked
            .into_iter()
            .take(n)
            .map(|word| WordCount::new(word.as_str(), self.counts[word]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let dist = FrequencyDistribution::from_tokens(["a", "b", "a", "c", "a", "b"]);

        assert_eq!(dist.get("a"), 3);
        assert_eq!(dist.get("b"), 2);
        assert_eq!(dist.get("z"), 0);
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.len(), 3);
        assert!((dist.freq("a") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_most_common_order() {
        let dist = FrequencyDistribution::from_tokens(["x", "y", "z", "y", "x", "w", "y"]);
        let top = dist.most_common(3);

        assert_eq!(
            top,
            vec![
                WordCount::new("y", 3),
                WordCount::new("x", 2),
                WordCount::new("z", 1),
            ]
        );
    }

    #[test]
    fn test_most_common_more_than_available() {
        let dist = FrequencyDistribution::from_tokens(vec!["one".to_string()]);
        assert_eq!(dist.most_common(10), vec![WordCount::new("one", 1)]);
    }

    #[test]
    fn test_empty_distribution() {
        let dist = FrequencyDistribution::new();

        assert!(dist.is_empty());
        assert_eq!(dist.freq("a"), 0.0);
        assert!(dist.most_common(5).is_empty());
    }
}
