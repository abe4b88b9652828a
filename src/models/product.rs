use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display, path::Path};

use crate::error::{AppError, AppResult};

/// Identifier for a catalog product
///
/// Catalog exports use either string or numeric ids; both are normalized to
/// their string form so history snapshots and catalog entries compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawProductId", into = "String")]
pub struct ProductId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Text(String),
    Number(u64),
}

impl From<RawProductId> for ProductId {
    fn from(raw: RawProductId) -> Self {
        match raw {
            RawProductId::Text(id) => ProductId(id),
            RawProductId::Number(id) => ProductId(id.to_string()),
        }
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id.to_string())
    }
}

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product as exported by the catalog backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub price: f64,
    pub brand: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// "Category - Subcategory", or just the category when there is no
    /// (non-empty) subcategory
    pub fn category_line(&self) -> String {
        match self.subcategory.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{} - {}", self.category, sub),
            _ => self.category.clone(),
        }
    }
}

/// Ordered product catalog with unique ids
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting lists that reuse a product id
    pub fn new(products: Vec<Product>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(AppError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parses a JSON array of products
    pub fn from_json(json: &str) -> AppResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Reads a JSON catalog export from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            product_count = catalog.len(),
            "Loaded product catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
pub(crate) fn test_product(id: u64, category: &str, brand: &str, price: f64) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("Product {}", id),
        category: category.to_string(),
        subcategory: None,
        price,
        brand: brand.to_string(),
        rating: 4.0,
        description: String::new(),
        tags: Vec::new(),
    }
}
