//! Comma-separated list fields ("services", "hours", "tags", ...).
//!
//! Array-valued record fields are edited as one text input. Going out,
//! [`split_list`] splits on `,`, trims every entry and drops the empty ones.
//! Coming back for display, [`join_list`] joins with `", "`.

use serde::{Deserialize, Serialize};

/// How a list-valued text input is submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEncoding {
    /// Split with [`split_list`] and send as an array.
    Array,
    /// Send the raw input string unchanged; the API does the splitting.
    Literal,
}

pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_trims_and_drops_empty() {
        assert_eq!(split_list("A, B,  , C"), vec!["A", "B", "C"]);
        assert_eq!(split_list(" Mon-Fri 9-5 ,Sat 10-2,"), vec!["Mon-Fri 9-5", "Sat 10-2"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join_list(&["Oil Change", "Tires"]), "Oil Change, Tires");
        assert_eq!(join_list::<&str>(&[]), "");
        assert_eq!(join_list(&["only".to_string()]), "only");
    }

    proptest! {
        #[test]
        fn test_split_join_roundtrip(items in prop::collection::vec("[A-Za-z0-9][A-Za-z0-9 ]{0,10}[A-Za-z0-9]|[A-Za-z0-9]", 0..8)) {
            prop_assert_eq!(split_list(&join_list(&items)), items);
        }

        #[test]
        fn test_split_never_yields_blank_entries(input in ".*") {
            for item in split_list(&input) {
                prop_assert!(!item.is_empty());
                prop_assert_eq!(item.trim(), item.as_str());
                prop_assert!(!item.contains(','));
            }
        }
    }
}
