//! Ordering of topic names.
//!
//! Names are compared level by level, the way a root-locale collator does
//! for plain text: base letters ignoring accents and case, then accents
//! (unaccented first), then case (lower case first), then raw code points
//! so the order is total.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| with_accents(a).cmp(&with_accents(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

/// NFD, combining marks dropped, lower-cased: `"Ölfilter"` -> `"olfilter"`.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// NFD, lower-cased, marks kept. A mark sorts after any letter, so the
/// unaccented form of a word comes first.
fn with_accents(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabetical_ignoring_case_first() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_names("Arrays", "Binary Trees"), Ordering::Less);
        assert_eq!(compare_names("Binary Trees", "Linked Lists"), Ordering::Less);
    }

    #[test]
    fn lower_case_before_upper_case_on_tie() {
        assert_eq!(compare_names("graph", "Graph"), Ordering::Less);
        assert_eq!(compare_names("Graph", "graph"), Ordering::Greater);
        assert_eq!(compare_names("heap Sort", "heap sort"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Tree", "Trees"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        let mut names = vec!["zebra", "éclair", "Ölfilter", "apple"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, ["apple", "éclair", "Ölfilter", "zebra"]);
    }

    #[test]
    fn unaccented_before_accented_before_upper_case() {
        let mut names = vec!["Élan", "élan", "elan", "Elan"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, ["elan", "Elan", "élan", "Élan"]);

        assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_names("résumé", "resumes"), Ordering::Less);
    }

    #[test]
    fn composed_and_decomposed_forms_sort_together() {
        // "é" as one code point vs "e" + U+0301
        assert_ne!(compare_names("caf\u{e9}", "cafe\u{301}s"), Ordering::Greater);
        assert_eq!(compare_names("cafe\u{301}", "cafes"), Ordering::Less);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(compare_names("Queues", "Queues"), Ordering::Equal);
    }
}
