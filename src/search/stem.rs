//! A small English-only suffix stripper.
//!
//! Trims the handful of common affixes needed for token-set overlap
//! ("searching" ~ "search") without claiming full Snowball fidelity.

const SUFFIXES: &[&str] = &["tion", "ing", "ed", "ly", "s"];

/// Minimum length a stem must retain; prevents over-stripping short words
/// down to nothing (`"as"` should not become `""`).
const MIN_STEM_LEN: usize = 3;

/// Strips the first matching suffix from `word`, longest suffix first, only
/// when enough of the word remains afterward.
pub(crate) fn stem(word: &str) -> String {
    for suffix in SUFFIXES {
        if let Some(stripped) = word.strip_suffix(suffix) {
            if stripped.chars().count() >= MIN_STEM_LEN {
                return stripped.to_string();
            }
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ing_suffix() {
        assert_eq!(stem("searching"), "search");
    }

    #[test]
    fn strips_tion_before_shorter_suffixes() {
        assert_eq!(stem("application"), "applica");
    }

    #[test]
    fn leaves_short_words_untouched() {
        assert_eq!(stem("as"), "as");
        assert_eq!(stem("is"), "is");
    }

    #[test]
    fn leaves_unsuffixed_words_untouched() {
        assert_eq!(stem("gedit"), "gedit");
    }
}
