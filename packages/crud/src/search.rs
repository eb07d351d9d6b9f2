//! Client-side search over the rows currently loaded.
//!
//! Matching is a case-insensitive substring test against a per-resource set of
//! searchable strings. It never triggers a request and, for paginated
//! resources, only sees the current page.

/// Returns true when `query` is blank or any of `haystack` contains it,
/// ignoring case.
pub fn matches<S: AsRef<str>>(query: &str, haystack: &[S]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystack
        .iter()
        .any(|s| s.as_ref().to_lowercase().contains(&needle))
}

/// Rows of `records` matching `query`, order preserved.
pub fn filter<'a, T>(
    records: &'a [T],
    query: &str,
    search_text: impl Fn(&T) -> Vec<String>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| matches(query, &search_text(r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Row {
        name: &'static str,
        city: &'static str,
    }

    fn text(r: &Row) -> Vec<String> {
        vec![r.name.to_string(), r.city.to_string()]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Nellis Auto",
                city: "Las Vegas",
            },
            Row {
                name: "Desert Motors",
                city: "Henderson",
            },
        ]
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let rows = rows();
        assert_eq!(filter(&rows, "", text).len(), 2);
        assert_eq!(filter(&rows, "   ", text).len(), 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let rows = rows();
        let hits = filter(&rows, "VEGAS", text);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Nellis Auto");

        let hits = filter(&rows, "motor", text);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].city, "Henderson");
    }

    #[test]
    fn test_no_match() {
        let rows = rows();
        assert!(filter(&rows, "reno", text).is_empty());
    }
}
