//! Sliding-window n-grams

/// Iterate over every contiguous window of `n` items
///
/// Yields nothing when `n` is zero or larger than the input.
pub fn ngrams<T>(items: &[T], n: usize) -> impl Iterator<Item = &[T]> {
    let windows = if n == 0 { None } else { Some(items.windows(n)) };
    windows.into_iter().flatten()
}

/// Space-joined n-grams over a token sequence
pub fn joined_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    ngrams(tokens, n)
        .map(|gram| {
            gram.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect()
}
