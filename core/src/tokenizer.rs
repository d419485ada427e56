/// Split text into terms on the ASCII space character only.
///
/// Consecutive spaces produce empty terms and other whitespace (tabs, newlines)
/// stays inside the surrounding term. No case folding or stemming is applied.
pub fn split_terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

/// True when `query` is exactly one term under [`split_terms`].
pub fn is_single_term(query: &str) -> bool {
    split_terms(query).nth(1).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_spaces() {
        let t: Vec<&str> = split_terms("cat dog  cat").collect();
        assert_eq!(t, ["cat", "dog", "", "cat"]);
    }

    #[test]
    fn single_term_check() {
        assert!(is_single_term("dog"));
        assert!(is_single_term(""));
        assert!(!is_single_term("dog cat"));
        assert!(!is_single_term("dog "));
    }
}
