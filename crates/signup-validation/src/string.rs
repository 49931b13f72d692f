//! String validation functions

/// Number of characters in `s`, counted as Unicode scalar values
///
/// Byte length would count "ç" as two, which is not what a user typing a
/// password sees.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// A value is present when it is not the empty string
///
/// Whitespace counts as content: `"  "` is present.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Checks that `s` has at least `min` characters
pub fn meets_min_length(s: &str, min: usize) -> bool {
    char_count(s) >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        assert!(meets_min_length("abcdef", 6));
        assert!(meets_min_length("abcdefg", 6));
        assert!(!meets_min_length("abcde", 6));
        assert!(meets_min_length("", 0));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // six characters, eight bytes
        let value = "çãoabc";
        assert_eq!(char_count(value), 6);
        assert!(meets_min_length(value, 6));
        assert!(!meets_min_length("çãoab", 6));
    }

    #[test]
    fn test_presence() {
        assert!(!is_present(""));
        assert!(is_present(" "));
        assert!(is_present("Ana"));
    }
}
