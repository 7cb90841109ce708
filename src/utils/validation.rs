//! Input validation utilities
//!
//! Character counting and e-mail plausibility checks shared by the validators.

/// Length in characters (Unicode scalar values), not bytes
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

/// True when `input` has at least `min` characters.
///
/// Stops counting at `min`, so very long input costs no more than short input.
pub fn has_min_chars(input: &str, min: usize) -> bool {
    min == 0 || input.chars().nth(min - 1).is_some()
}

/// True when the character length of `input` lies in `min..=max`
pub fn char_len_within(input: &str, min: usize, max: usize) -> bool {
    let len = char_len(input);
    len >= min && len <= max
}

fn is_valid_domain(domain: &str) -> bool {
    if !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-')
    })
}

/// Syntactic e-mail plausibility check: `local@domain.tld`, no whitespace or
/// control characters. Not a full RFC 5322 parser.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    match input.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && is_valid_domain(domain)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("dev123@gmail.com"), 16);
        assert_eq!(char_len("héllo"), 5);
        assert_eq!("héllo".len(), 6);
    }

    #[test]
    fn test_has_min_chars() {
        assert!(has_min_chars("", 0));
        assert!(!has_min_chars("", 1));
        assert!(has_min_chars("abc", 3));
        assert!(!has_min_chars("ab", 3));
        assert!(has_min_chars("ééé", 3));
    }

    #[test]
    fn test_char_len_within() {
        assert!(char_len_within("ab", 2, 100));
        assert!(!char_len_within("a", 2, 100));
        assert!(!char_len_within(&"x".repeat(101), 2, 100));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("dev123@gmail.com"));
        assert!(is_valid_email("john@bugify.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("@bugify.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john@localhost"));
        assert!(!is_valid_email("john@@bugify.com"));
        assert!(!is_valid_email("john@bugify..com"));
        assert!(!is_valid_email("john@.bugify.com"));
        assert!(!is_valid_email("john@-bugify.com"));
        assert!(!is_valid_email("jo hn@bugify.com"));
        assert!(!is_valid_email("john@bugify.com\n"));
    }
}
