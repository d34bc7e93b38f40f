//! Text normalization for fuzzy name and place matching.

/// Normalizes free text for loose comparison.
///
/// Lowercases, turns punctuation into spaces, collapses whitespace and folds
/// common abbreviations to one spelling ("saint" → "st", "mount" → "mt",
/// "&" → "and"), so "St. Alphonsus" and "Saint Alphonsus" compare equal.
pub fn normalize(text: &str) -> String {
    let spaced: String = text
        .replace('&', " and ")
        .chars()
        .filter(|c| !matches!(c, '\'' | '’'))
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    spaced
        .split_whitespace()
        .map(fold_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_word(word: &str) -> &str {
    match word {
        "saint" => "st",
        "mount" => "mt",
        "township" => "twp",
        other => other,
    }
}

/// Splits normalized text into words.
pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_saint() {
        assert_eq!(normalize("St. Alphonsus"), "st alphonsus");
        assert_eq!(normalize("Saint Alphonsus"), "st alphonsus");
    }

    #[test]
    fn test_normalize_folds_mount() {
        assert_eq!(normalize("Mt. Lebanon"), "mt lebanon");
        assert_eq!(normalize("Mount  Lebanon"), "mt lebanon");
    }

    #[test]
    fn test_normalize_strips_apostrophes() {
        assert_eq!(normalize("St. Mary's"), "st marys");
        assert_eq!(normalize("O’Hara"), "ohara");
    }

    #[test]
    fn test_normalize_ampersand() {
        assert_eq!(normalize("Sts. Peter & Paul"), "sts peter and paul");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("St. Alphonsus Church", "st. ALPHONSUS"));
        assert!(!contains_ignore_case("St. Anne", "alphonsus"));
    }

    #[test]
    fn test_words() {
        assert_eq!(words("Holy Family, Parish"), vec!["holy", "family", "parish"]);
    }
}
