const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

const BULLET: &str = "•";

/// Split text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(&SENTENCE_TERMINATORS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Render each sentence as a `•` bullet line
pub fn to_bullets(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .map(|sentence| format!("{} {}", BULLET, sentence))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_for_each_terminator() {
        assert_eq!(to_bullets("One. Two! Three?"), "• One\n• Two\n• Three");
    }

    #[test]
    fn test_text_without_terminators_is_one_bullet() {
        assert_eq!(to_bullets("  just one thought  "), "• just one thought");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(to_bullets("Wait... what?! Yes."), "• Wait\n• what\n• Yes");
        assert_eq!(split_sentences("..!?"), Vec::<&str>::new());
        assert_eq!(to_bullets(""), "");
    }

    #[test]
    fn test_decimal_points_split() {
        // Numbers are split too; only the three terminators are recognised
        assert_eq!(split_sentences("Growth was 3.5 percent"), vec!["Growth was 3", "5 percent"]);
    }
}
