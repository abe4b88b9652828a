use std::collections::HashSet;

use crate::models::Product;

/// Categorical product attribute used to build filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Category,
    Brand,
}

impl CatalogField {
    fn value<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            CatalogField::Category => &product.category,
            CatalogField::Brand => &product.brand,
        }
    }
}

/// Distinct values of `field` across the catalog, in first-seen order.
///
/// Empty values are skipped.
pub fn extract(catalog: &[Product], field: CatalogField) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(|product| field.value(product))
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
