//! Free text to message normalisation.

use crate::model::{Message, Symbol};

/// Maps arbitrary text onto the message alphabet.
///
/// Letters are upper-cased (ASCII rules). Every run of other characters
/// becomes a single separator, and separators at either end are dropped:
///
/// ```
/// use helixcode::normalize::normalize;
///
/// assert_eq!(normalize("  BioRuby is fun!").to_string(), "BIORUBY*IS*FUN");
/// ```
pub fn normalize(raw: &str) -> Message {
    let mut symbols = Vec::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars() {
        match Symbol::new(c.to_ascii_uppercase()).filter(|s| !s.is_separator()) {
            Some(letter) => {
                if pending_separator && !symbols.is_empty() {
                    symbols.push(Symbol::SEPARATOR);
                }
                pending_separator = false;
                symbols.push(letter);
            }
            None => pending_separator = true,
        }
    }

    Message::new(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_words() {
        assert_eq!(normalize("BioRuby is fun").to_string(), "BIORUBY*IS*FUN");
        assert_eq!(normalize("I love you").to_string(), "I*LOVE*YOU");
        assert_eq!(normalize("A happy new year").to_string(), "A*HAPPY*NEW*YEAR");
    }

    #[test]
    fn test_runs_collapse_and_ends_trim() {
        assert_eq!(normalize("  hello,   world!!  ").to_string(), "HELLO*WORLD");
        assert_eq!(normalize("a1b2c").to_string(), "A*B*C");
        assert_eq!(normalize("I*LOVE**YOU\n").to_string(), "I*LOVE*YOU");
    }

    #[test]
    fn test_nothing_left() {
        assert!(normalize("").is_empty());
        assert!(normalize(" 123 *** ").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(normalize("caf\u{e9} au lait").to_string(), "CAF*AU*LAIT");
        assert_eq!(normalize("stra\u{df}e").to_string(), "STRA*E");
    }

    proptest! {
        #[test]
        fn normalized_text_stays_in_alphabet(raw in "\\PC*") {
            let message = normalize(&raw).to_string();
            prop_assert!(message.chars().all(|c| c.is_ascii_uppercase() || c == '*'));
            prop_assert!(!message.starts_with('*'));
            prop_assert!(!message.ends_with('*'));
            prop_assert!(!message.contains("**"));
        }

        #[test]
        fn normalize_is_idempotent(raw in "\\PC*") {
            let once = normalize(&raw);
            let twice = normalize(&once.to_string());
            prop_assert_eq!(once, twice);
        }
    }
}
