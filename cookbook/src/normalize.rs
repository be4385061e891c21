use crate::{CookbookError, Result};

/// Turns a scribbled recipe name like `"  meatball--sub_2 "` into `"Meatball Sub"`.
///
/// Dashes, underscores and the ASCII information separators (`U+001C..=U+001F`) become spaces,
/// anything else that isn't an ASCII letter or whitespace is dropped, and the remaining words are
/// capitalized and joined by single spaces.
pub fn parse_handwriting(input: &str) -> Result<String> {
    let letters: String = input
        .chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let words: Vec<String> = letters.split_whitespace().map(capitalize).collect();

    if words.is_empty() {
        return Err(CookbookError::EmptyName);
    }

    Ok(words.join(" "))
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '\u{1c}'..='\u{1f}')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn separators_become_spaces() {
        assert_eq!(
            parse_handwriting("Riz@z RISO00tto!").unwrap(),
            "Rizz Risotto"
        );
        assert_eq!(
            parse_handwriting("meatball--sub_sandwich").unwrap(),
            "Meatball Sub Sandwich"
        );
    }

    #[test]
    fn information_separators_split_words() {
        assert_eq!(parse_handwriting("a\u{1c}b").unwrap(), "A B");
        assert_eq!(
            parse_handwriting("fish\u{1d}and\u{1e}chips\u{1f}").unwrap(),
            "Fish And Chips"
        );
        assert_eq!(parse_handwriting("\u{1c}\u{1f}"), Err(CookbookError::EmptyName));
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            parse_handwriting("   skibidi \t spaghetti\n").unwrap(),
            "Skibidi Spaghetti"
        );
    }

    #[test]
    fn digits_and_punctuation_are_dropped() {
        assert_eq!(parse_handwriting("alpHa-alFRedo 2.0").unwrap(), "Alpha Alfredo");
    }

    #[test]
    fn nothing_left_is_an_error() {
        for input in ["", "   ", "--__", "1234 !?", "ÉÈ"] {
            assert_eq!(
                parse_handwriting(input),
                Err(CookbookError::EmptyName),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        for input in ["Riz@z RISO00tto!", "meatball--sub", "a_b-c d"] {
            let once = parse_handwriting(input).unwrap();
            let twice = parse_handwriting(&once).unwrap();

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn output_is_single_spaced_capitalized_letters() {
        let parsed = parse_handwriting("  hello-WORLD__foo99 bar!baz ").unwrap();

        assert_eq!(parsed, "Hello World Foo Barbaz");
        assert!(!parsed.contains("  "));
        assert!(parsed.chars().all(|c| c.is_ascii_alphabetic() || c == ' '));
    }
}
