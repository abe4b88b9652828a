use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

use crate::models::{Catalog, ProductId};

pub const EMPTY_HISTORY_MESSAGE: &str = "No products viewed yet.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryEntry {
    pub id: ProductId,
    pub name: String,
    pub category: String,
}

/// Viewed-products panel joined against the current catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "entries", rename_all = "snake_case")]
pub enum HistoryView {
    Empty,
    /// Non-empty history; offers the clear action even when no entry
    /// resolves against the catalog
    Listed(Vec<HistoryEntry>),
}

impl HistoryView {
    /// Entries follow catalog order. Ids the catalog no longer has are
    /// omitted.
    pub fn render(history: &[ProductId], catalog: &Catalog) -> Self {
        if history.is_empty() {
            return HistoryView::Empty;
        }
        let viewed: HashSet<&ProductId> = history.iter().collect();
        let entries = catalog
            .iter()
            .filter(|product| viewed.contains(&product.id))
            .map(|product| HistoryEntry {
                id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
            })
            .collect();
        HistoryView::Listed(entries)
    }

    pub fn can_clear(&self) -> bool {
        matches!(self, HistoryView::Listed(_))
    }
}

impl Display for HistoryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryView::Empty => writeln!(f, "{}", EMPTY_HISTORY_MESSAGE),
            HistoryView::Listed(entries) => {
                for entry in entries {
                    writeln!(f, "- {} ({})", entry.name, entry.category)?;
                }
                writeln!(f, "(type `clear` to clear history)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::test_product;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            test_product(1, "Books", "Acme", 10.0),
            test_product(2, "Tools", "Acme", 10.0),
            test_product(3, "Garden", "Acme", 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_history() {
        let view = HistoryView::render(&[], &catalog());
        assert_eq!(view, HistoryView::Empty);
        assert!(!view.can_clear());
    }

    #[test]
    fn test_entries_follow_catalog_order_and_skip_unknown_ids() {
        let history = vec![ProductId::from(3), ProductId::from(99), ProductId::from(1)];
        let HistoryView::Listed(entries) = HistoryView::render(&history, &catalog()) else {
            panic!("expected listed view");
        };
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unresolvable_history_is_still_clearable() {
        let view = HistoryView::render(&[ProductId::from("gone")], &catalog());
        assert_eq!(view, HistoryView::Listed(Vec::new()));
        assert!(view.can_clear());
    }
}
