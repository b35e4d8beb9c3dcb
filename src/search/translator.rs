use super::types::{Page, QueryContainer, SearchBody, SimpleQueryString};

/// Translates a raw query string into the engine's structured request body.
///
/// Empty or whitespace-only text becomes a match-all container (every
/// document, engine default order). Anything else becomes a
/// simple-query-string container searched across all fields with AND
/// semantics: a document matches only if every whitespace-separated term is
/// present.
///
/// This function is total. The text is passed through as literal query
/// syntax with no escaping; a malformed query is the engine's to interpret
/// and at worst returns zero hits.
pub fn build_search_body(text: &str, page: Page) -> SearchBody {
    let query = if text.trim().is_empty() {
        QueryContainer::MatchAll {}
    } else {
        QueryContainer::SimpleQueryString(SimpleQueryString {
            query: text.to_string(),
            fields: vec!["*".to_string()],
            default_operator: "and".to_string(),
        })
    };

    SearchBody {
        from: page.from,
        size: page.size,
        query,
    }
}
