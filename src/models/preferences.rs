use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use crate::error::AppError;

use super::Product;

/// Price bucket offered by the preference form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-50")]
    Under50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-200")]
    From100To200,
    #[serde(rename = "200-")]
    Over200,
}

impl PriceRange {
    /// Every bucket, in the order the form lists them
    pub const ALL: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Under50,
        PriceRange::From50To100,
        PriceRange::From100To200,
        PriceRange::Over200,
    ];

    /// Wire value, e.g. `"50-100"`
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under50 => "0-50",
            PriceRange::From50To100 => "50-100",
            PriceRange::From100To200 => "100-200",
            PriceRange::Over200 => "200-",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "Any",
            PriceRange::Under50 => "Under $50",
            PriceRange::From50To100 => "$50 - $100",
            PriceRange::From100To200 => "$100 - $200",
            PriceRange::Over200 => "Over $200",
        }
    }

    /// Inclusive lower bound and optional inclusive upper bound
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            PriceRange::All => (0.0, None),
            PriceRange::Under50 => (0.0, Some(50.0)),
            PriceRange::From50To100 => (50.0, Some(100.0)),
            PriceRange::From100To200 => (100.0, Some(200.0)),
            PriceRange::Over200 => (200.0, None),
        }
    }

    /// Parses a bucket from host-supplied starting values, where an
    /// unrecognized value falls back to "no selection" with a warning
    pub fn parse_or_ignore(raw: &str) -> Option<PriceRange> {
        match raw.parse::<PriceRange>() {
            Ok(range) => Some(range),
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "Ignoring unknown price range in starting preferences"
                );
                None
            }
        }
    }

    /// Whether a price falls inside this bucket (bounds inclusive)
    pub fn contains(&self, price: f64) -> bool {
        if *self == PriceRange::All {
            return true;
        }
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price <= max)
    }
}

impl Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s.trim())
            .ok_or_else(|| AppError::UnknownPriceRange(s.to_string()))
    }
}

/// Normalized user filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub price_range: PriceRange,
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
}

impl Preferences {
    /// Whether a product passes the price, category and brand filters.
    ///
    /// An empty category or brand set places no restriction on that field.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&product.category);
        let brand_ok = self.brands.is_empty() || self.brands.contains(&product.brand);
        category_ok && brand_ok && self.price_range.contains(product.price)
    }
}

/// Partially specified preferences supplied by the host
///
/// Seeding never fails on an unknown price bucket: the bucket is dropped and
/// the remaining fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesSeed {
    #[serde(default, deserialize_with = "deserialize_seed_price_range")]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub brands: Option<Vec<String>>,
}

fn deserialize_seed_price_range<'de, D>(deserializer: D) -> Result<Option<PriceRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PriceRange::parse_or_ignore))
}

impl From<PreferencesSeed> for Preferences {
    fn from(seed: PreferencesSeed) -> Self {
        Self {
            price_range: seed.price_range.unwrap_or_default(),
            categories: seed.categories.unwrap_or_default().into_iter().collect(),
            brands: seed.brands.unwrap_or_default().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::test_product;

    #[test]
    fn test_price_range_wire_values() {
        let json = serde_json::to_string(&PriceRange::From50To100).unwrap();
        assert_eq!(json, "\"50-100\"");

        let parsed: PriceRange = serde_json::from_str("\"200-\"").unwrap();
        assert_eq!(parsed, PriceRange::Over200);

        assert!(serde_json::from_str::<PriceRange>("\"cheap\"").is_err());
    }

    #[test]
    fn test_price_range_from_str() {
        for range in PriceRange::ALL {
            assert_eq!(range.as_str().parse::<PriceRange>().unwrap(), range);
        }
        let err = "1000-".parse::<PriceRange>().unwrap_err();
        assert!(matches!(err, AppError::UnknownPriceRange(value) if value == "1000-"));
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        assert!(PriceRange::Under50.contains(50.0));
        assert!(PriceRange::From50To100.contains(50.0));
        assert!(PriceRange::From50To100.contains(100.0));
        assert!(!PriceRange::From50To100.contains(100.01));
        assert!(PriceRange::Over200.contains(5000.0));
        assert!(!PriceRange::Over200.contains(199.99));
        assert!(PriceRange::All.contains(0.0));
    }

    #[test]
    fn test_seed_defaults() {
        let prefs = Preferences::from(PreferencesSeed::default());
        assert_eq!(prefs.price_range, PriceRange::All);
        assert!(prefs.categories.is_empty());
        assert!(prefs.brands.is_empty());
    }

    #[test]
    fn test_seed_from_partial_json() {
        let seed: PreferencesSeed =
            serde_json::from_str(r#"{"categories": ["Books", "Books", "Tools"]}"#).unwrap();
        let prefs = Preferences::from(seed);
        assert_eq!(prefs.price_range, PriceRange::All);
        assert_eq!(prefs.categories.len(), 2);
        assert!(prefs.brands.is_empty());
    }

    #[test]
    fn test_seed_ignores_unknown_price_range() {
        let seed: PreferencesSeed =
            serde_json::from_str(r#"{"priceRange": "cheap", "categories": ["Books"]}"#).unwrap();
        assert_eq!(seed.price_range, None);

        let prefs = Preferences::from(seed);
        assert_eq!(
            prefs,
            Preferences {
                price_range: PriceRange::All,
                categories: ["Books".to_string()].into_iter().collect(),
                brands: BTreeSet::new(),
            }
        );
    }

    #[test]
    fn test_seed_accepts_known_and_null_price_range() {
        let seed: PreferencesSeed = serde_json::from_str(r#"{"priceRange": "100-200"}"#).unwrap();
        assert_eq!(seed.price_range, Some(PriceRange::From100To200));

        let seed: PreferencesSeed = serde_json::from_str(r#"{"priceRange": null}"#).unwrap();
        assert_eq!(seed.price_range, None);
    }

    #[test]
    fn test_parse_or_ignore() {
        assert_eq!(PriceRange::parse_or_ignore("200-"), Some(PriceRange::Over200));
        assert_eq!(PriceRange::parse_or_ignore("1000-"), None);
    }

    #[test]
    fn test_preferences_json_shape() {
        let prefs = Preferences {
            price_range: PriceRange::From50To100,
            categories: ["Books".to_string()].into_iter().collect(),
            brands: BTreeSet::new(),
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"priceRange": "50-100", "categories": ["Books"], "brands": []})
        );
    }

    #[test]
    fn test_matches() {
        let book = test_product(1, "Books", "Acme", 30.0);
        let drill = test_product(2, "Tools", "Bolt", 150.0);

        let mut prefs = Preferences::default();
        assert!(prefs.matches(&book));
        assert!(prefs.matches(&drill));

        prefs.categories.insert("Books".to_string());
        assert!(prefs.matches(&book));
        assert!(!prefs.matches(&drill));

        prefs.price_range = PriceRange::From50To100;
        assert!(!prefs.matches(&book));

        prefs.categories.clear();
        prefs.price_range = PriceRange::From100To200;
        prefs.brands.insert("Bolt".to_string());
        assert!(prefs.matches(&drill));
        assert!(!prefs.matches(&book));
    }
}
