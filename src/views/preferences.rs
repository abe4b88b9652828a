use serde::Serialize;
use std::fmt::Display;

use crate::{
    models::{PriceRange, Preferences, Product},
    services::{extract, CatalogField},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceOption {
    pub value: PriceRange,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Checkbox {
    pub value: String,
    pub checked: bool,
}

/// Preference form: price select plus category and brand checkboxes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreferencesForm {
    pub price_options: Vec<PriceOption>,
    pub categories: Vec<Checkbox>,
    pub brands: Vec<Checkbox>,
}

impl PreferencesForm {
    /// Checkboxes are offered only for values present in `catalog`; stale
    /// selections stay in `preferences` but get no checkbox.
    pub fn render(preferences: &Preferences, catalog: &[Product]) -> Self {
        let price_options = PriceRange::ALL
            .into_iter()
            .map(|value| PriceOption {
                value,
                label: value.label(),
                selected: value == preferences.price_range,
            })
            .collect();

        let categories = extract(catalog, CatalogField::Category)
            .into_iter()
            .map(|value| Checkbox {
                checked: preferences.categories.contains(&value),
                value,
            })
            .collect();

        let brands = extract(catalog, CatalogField::Brand)
            .into_iter()
            .map(|value| Checkbox {
                checked: preferences.brands.contains(&value),
                value,
            })
            .collect();

        Self {
            price_options,
            categories,
            brands,
        }
    }
}

impl Display for PreferencesForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Price Range:")?;
        for option in &self.price_options {
            let mark = if option.selected { "(x)" } else { "( )" };
            write!(f, " {} {} [{}]", mark, option.label, option.value)?;
        }
        writeln!(f)?;

        for (legend, boxes) in [("Categories", &self.categories), ("Brands", &self.brands)] {
            write!(f, "{}:", legend)?;
            for checkbox in boxes {
                let mark = if checkbox.checked { "[x]" } else { "[ ]" };
                write!(f, " {} {}", mark, checkbox.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
