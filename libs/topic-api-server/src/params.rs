use topic_api::{SearchTerm, SortKey, TopicQuery};

// ═══════════════════════════════════════════════════════════════
//  Query-string validation for GET /api/topics
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("Search parameter must be a string")]
    SearchNotString,

    #[error("Sort parameter must be \"name\"")]
    SortInvalid,

    #[error("Search parameter cannot be empty")]
    SearchEmpty,

    #[error("{0}")]
    Malformed(String),
}

/// How a key shows up in the decoded query string.
enum Lookup<'a> {
    Absent,
    Single(&'a str),
    /// Repeated (`k=a&k=b`) or bracketed (`k[]=a`, `k[x]=a`): a list or a
    /// map, not one string.
    NotAString,
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Lookup<'a> {
    let mut found = Lookup::Absent;
    for (k, v) in pairs {
        if k == key {
            found = match found {
                Lookup::Absent => Lookup::Single(v.as_str()),
                _ => return Lookup::NotAString,
            };
        } else if k.strip_prefix(key).is_some_and(|rest| rest.starts_with('[')) {
            return Lookup::NotAString;
        }
    }
    found
}

/// Turn decoded query pairs into a validated `TopicQuery`.
///
/// Checks run in a fixed order: `search` shape, then `sort` value, then
/// `search` emptiness. Unknown keys are ignored.
pub fn parse_topic_query(pairs: &[(String, String)]) -> Result<TopicQuery, ParamError> {
    let raw_search = match lookup(pairs, "search") {
        Lookup::Absent => None,
        Lookup::Single(v) => Some(v),
        Lookup::NotAString => return Err(ParamError::SearchNotString),
    };

    let sort = match lookup(pairs, "sort") {
        Lookup::Absent => None,
        Lookup::Single(v) => Some(SortKey::parse(v).ok_or(ParamError::SortInvalid)?),
        Lookup::NotAString => return Err(ParamError::SortInvalid),
    };

    let search = match raw_search {
        Some(raw) => Some(SearchTerm::new(raw).ok_or(ParamError::SearchEmpty)?),
        None => None,
    };

    Ok(TopicQuery { search, sort })
}
