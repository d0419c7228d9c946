// ════════════════════════════════════════════════════════════════
//  Case folding
// ════════════════════════════════════════════════════════════════

/// Uniform case used for every name comparison in the service.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

// ════════════════════════════════════════════════════════════════
//  SearchTerm
// ════════════════════════════════════════════════════════════════

/// A normalized, non-empty search string: trimmed and case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize `raw`. `None` if nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let folded = fold_case(raw.trim());
        if folded.is_empty() {
            None
        } else {
            Some(Self(folded))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against a topic name.
    pub fn matches(&self, name: &str) -> bool {
        fold_case(name).contains(&self.0)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ════════════════════════════════════════════════════════════════
//  SortKey
// ════════════════════════════════════════════════════════════════

/// Field a topic collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
}

impl SortKey {
    /// Exact, case-sensitive match of the query-string literal.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ════════════════════════════════════════════════════════════════
//  TopicQuery
// ════════════════════════════════════════════════════════════════

/// Validated parameters of a topic listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicQuery {
    /// Keep only topics whose name contains this term.
    pub search: Option<SearchTerm>,
    /// Order the result by this key; source order when `None`.
    pub sort: Option<SortKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_is_trimmed_and_folded() {
        let term = SearchTerm::new("  LiSt \t").unwrap();
        assert_eq!(term.as_str(), "list");
        assert!(term.matches("Linked Lists"));
        assert!(!term.matches("Arrays"));
    }

    #[test]
    fn blank_search_term_is_rejected() {
        assert_eq!(SearchTerm::new(""), None);
        assert_eq!(SearchTerm::new("   "), None);
        assert_eq!(SearchTerm::new("\n\t"), None);
    }

    #[test]
    fn search_term_folds_non_ascii() {
        let term = SearchTerm::new("ÄRGER").unwrap();
        assert!(term.matches("Der Ärger"));
    }

    #[test]
    fn sort_key_is_exact() {
        assert_eq!(SortKey::parse("name"), Some(SortKey::Name));
        assert_eq!(SortKey::parse("Name"), None);
        assert_eq!(SortKey::parse("date"), None);
        assert_eq!(SortKey::parse(""), None);
    }
}
