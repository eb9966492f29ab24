//! Distinct category listing for filter pickers.
//!
//! Reads the category of every record, so cost grows with the collection.
//! Categories are few compared to records, which keeps this acceptable.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::store::InspirationStore;

/// Distinct non-empty categories, sorted lexicographically.
pub async fn list_categories<S: InspirationStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    let raw = store.categories().await?;
    Ok(distinct_sorted(raw))
}

fn distinct_sorted(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_sorted() {
        let raw = vec![
            "Quote".to_string(),
            "Link".to_string(),
            "".to_string(),
            "Quote".to_string(),
            " ".to_string(),
            "Task".to_string(),
        ];
        assert_eq!(distinct_sorted(raw), vec!["Link", "Quote", "Task"]);
    }

    #[test]
    fn test_distinct_sorted_empty() {
        assert!(distinct_sorted(Vec::new()).is_empty());
    }
}
