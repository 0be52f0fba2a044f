//! ASCII punctuation set

/// The 32 ASCII punctuation characters
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Check whether a character belongs to the ASCII punctuation set
#[inline]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Remove every ASCII punctuation character, keeping everything else
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| !is_punctuation(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_matches_ascii_punctuation() {
        assert_eq!(ASCII_PUNCTUATION.len(), 32);
        assert!(ASCII_PUNCTUATION.chars().all(is_punctuation));
        let count = (0u8..128)
            .map(char::from)
            .filter(|&c| is_punctuation(c))
            .count();
        assert_eq!(count, 32);
    }

    #[test]
    fn test_strip_keeps_whitespace_and_unicode() {
        assert_eq!(strip("a, b;\tc!"), "a b\tc");
        assert_eq!(strip("café — “quoted”"), "café — “quoted”");
    }
}
