/// Match strength of a candidate page against the query phrase
///
/// Ordered most- to least-specific. A phrase found in the title alone is
/// not considered relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceTier {
    /// Phrase appears in both the title and the body text
    TitleAndBody,

    /// Phrase appears in the body text only
    BodyOnly,

    /// Phrase appears in neither, or in the title only
    Rejected,
}

impl RelevanceTier {
    /// True for tiers that proceed to deduplication and admission
    pub fn is_relevant(&self) -> bool {
        !matches!(self, RelevanceTier::Rejected)
    }
}

/// Classifies a fetched page against the query phrase
///
/// Matching is case-insensitive containment of the full phrase, never
/// tokenized, checked independently against title and body.
pub fn classify(title: &str, body_text: &str, phrase: &str) -> RelevanceTier {
    let in_title = find_phrase(title, phrase).is_some();
    let in_body = find_phrase(body_text, phrase).is_some();

    match (in_title, in_body) {
        (true, true) => RelevanceTier::TitleAndBody,
        (false, true) => RelevanceTier::BodyOnly,
        _ => RelevanceTier::Rejected,
    }
}

/// Finds the first case-insensitive occurrence of `phrase` in `text`
///
/// Returns the byte range of the occurrence within the original `text`.
/// Scans char-wise rather than lowercasing the whole haystack, because
/// lowercasing can change byte offsets and would make the returned range
/// useless for slicing.
pub(crate) fn find_phrase(text: &str, phrase: &str) -> Option<(usize, usize)> {
    if phrase.is_empty() {
        return None;
    }

    let phrase_chars: Vec<char> = phrase.chars().collect();

    for (start, _) in text.char_indices() {
        let mut remaining = text[start..].chars();
        let mut matched_bytes = 0;
        let mut matched = true;

        for &expected in &phrase_chars {
            match remaining.next() {
                Some(found) if chars_eq_ignore_case(found, expected) => {
                    matched_bytes += found.len_utf8();
                }
                _ => {
                    matched = false;
                    break;
                }
            }
        }

        if matched {
            return Some((start, start + matched_bytes));
        }
    }

    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_title_and_body() {
        let tier = classify(
            "All About Fluffy Cats",
            "Everything you need to know about fluffy cats.",
            "fluffy cats",
        );
        assert_eq!(tier, RelevanceTier::TitleAndBody);
        assert!(tier.is_relevant());
    }

    #[test]
    fn test_classify_body_only() {
        let tier = classify(
            "Pet Care Weekly",
            "This issue covers fluffy cats and their grooming.",
            "fluffy cats",
        );
        assert_eq!(tier, RelevanceTier::BodyOnly);
        assert!(tier.is_relevant());
    }

    #[test]
    fn test_classify_title_only_is_rejected() {
        let tier = classify(
            "Fluffy Cats Monthly",
            "A magazine about dogs, mostly.",
            "fluffy cats",
        );
        assert_eq!(tier, RelevanceTier::Rejected);
        assert!(!tier.is_relevant());
    }

    #[test]
    fn test_classify_no_match_is_rejected() {
        let tier = classify("Dog News", "All about dogs.", "fluffy cats");
        assert_eq!(tier, RelevanceTier::Rejected);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let tier = classify(
            "FLUFFY CATS",
            "We love Fluffy Cats here.",
            "fluffy cats",
        );
        assert_eq!(tier, RelevanceTier::TitleAndBody);
    }

    #[test]
    fn test_classify_matches_whole_phrase_not_words() {
        // Both words appear, but never adjacent as one phrase.
        let tier = classify(
            "Cats",
            "A fluffy dog met some cats.",
            "fluffy cats",
        );
        assert_eq!(tier, RelevanceTier::Rejected);
    }

    #[test]
    fn test_find_phrase_returns_byte_range() {
        let text = "the quick brown fox";
        assert_eq!(find_phrase(text, "quick"), Some((4, 9)));
        assert_eq!(&text[4..9], "quick");
    }

    #[test]
    fn test_find_phrase_at_start() {
        assert_eq!(find_phrase("cats everywhere", "cats"), Some((0, 4)));
    }

    #[test]
    fn test_find_phrase_case_insensitive() {
        let text = "Socks the Cat";
        let (start, end) = find_phrase(text, "THE CAT").unwrap();
        assert_eq!(&text[start..end], "the Cat");
    }

    #[test]
    fn test_find_phrase_first_occurrence_wins() {
        let text = "cat and cat again";
        assert_eq!(find_phrase(text, "cat"), Some((0, 3)));
    }

    #[test]
    fn test_find_phrase_no_match() {
        assert_eq!(find_phrase("nothing here", "cats"), None);
    }

    #[test]
    fn test_find_phrase_empty_phrase() {
        assert_eq!(find_phrase("some text", ""), None);
    }

    #[test]
    fn test_find_phrase_multibyte_text() {
        let text = "naïve café chät";
        let (start, end) = find_phrase(text, "CAFÉ").unwrap();
        assert_eq!(&text[start..end], "café");
    }
}
