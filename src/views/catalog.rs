use serde::Serialize;
use std::fmt::Display;

use crate::models::{Preferences, Product, ProductId};

pub const EMPTY_CATALOG_MESSAGE: &str = "No products available.";

/// Input event on a product card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEvent {
    Click,
    Enter,
    Space,
    /// Any other key press; never activates
    OtherKey,
}

impl ActivationEvent {
    pub fn activates(&self) -> bool {
        !matches!(self, ActivationEvent::OtherKey)
    }
}

/// One rendered product in the catalog grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category_line: String,
    pub price: f64,
    pub brand: String,
    pub description: String,
    pub rating: f64,
    pub viewed: bool,
}

impl ProductCard {
    fn new(product: &Product, viewed: bool) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category_line: product.category_line(),
            price: product.price,
            brand: product.brand.clone(),
            description: product.description.clone(),
            rating: product.rating,
            viewed,
        }
    }

    /// Toggle-button pressed state mirrors the viewed marker
    pub fn aria_pressed(&self) -> bool {
        self.viewed
    }
}

/// Catalog grid annotated with viewed markers
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "cards", rename_all = "snake_case")]
pub enum CatalogView {
    Empty,
    Grid(Vec<ProductCard>),
}

impl CatalogView {
    pub fn render<'a>(
        catalog: impl IntoIterator<Item = &'a Product>,
        history_contains: impl Fn(&ProductId) -> bool,
    ) -> Self {
        let cards: Vec<ProductCard> = catalog
            .into_iter()
            .map(|product| ProductCard::new(product, history_contains(&product.id)))
            .collect();

        if cards.is_empty() {
            CatalogView::Empty
        } else {
            CatalogView::Grid(cards)
        }
    }

    /// Renders only the products the preferences admit
    pub fn render_filtered<'a>(
        catalog: impl IntoIterator<Item = &'a Product>,
        history_contains: impl Fn(&ProductId) -> bool,
        preferences: &Preferences,
    ) -> Self {
        Self::render(
            catalog.into_iter().filter(|product| preferences.matches(product)),
            history_contains,
        )
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            CatalogView::Empty => &[],
            CatalogView::Grid(cards) => cards,
        }
    }

    /// Dispatches `on_activate` once for an activating event on a rendered
    /// card. Returns whether the callback ran.
    pub fn activate(
        &self,
        id: &ProductId,
        event: ActivationEvent,
        on_activate: impl FnOnce(&ProductId),
    ) -> bool {
        if !event.activates() {
            return false;
        }
        match self.cards().iter().find(|card| &card.id == id) {
            Some(card) => {
                on_activate(&card.id);
                true
            }
            None => false,
        }
    }
}

impl Display for CatalogView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogView::Empty => writeln!(f, "{}", EMPTY_CATALOG_MESSAGE),
            CatalogView::Grid(cards) => {
                for card in cards {
                    let marker = if card.viewed { "*" } else { " " };
                    writeln!(
                        f,
                        "{} [{}] {} ({}) ${} | {} | rating {}",
                        marker,
                        card.id,
                        card.name,
                        card.category_line,
                        card.price,
                        card.brand,
                        card.rating
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{product::test_product, Catalog, PriceRange},
        services::BrowsingHistoryStore,
    };

    #[test]
    fn test_empty_catalog_renders_empty_state() {
        let view = CatalogView::render(&Catalog::default(), |_| false);
        assert_eq!(view, CatalogView::Empty);
        assert_eq!(view.to_string().trim(), EMPTY_CATALOG_MESSAGE);
    }

    #[test]
    fn test_history_tolerance() {
        let catalog = Catalog::new(vec![test_product(1, "Books", "Acme", 10.0)]).unwrap();
        let history = BrowsingHistoryStore::from_ids(vec![ProductId::from(1), ProductId::from(2)]);

        let view = CatalogView::render(&catalog, |id| history.contains(id));
        let cards = view.cards();
        assert_eq!(cards.len(), 1);
        assert!(cards[0].viewed);
        assert!(cards[0].aria_pressed());

        let mut activated = Vec::new();
        let ran = view.activate(&ProductId::from(2), ActivationEvent::Click, |id| {
            activated.push(id.clone())
        });
        assert!(!ran);
        assert!(activated.is_empty());
    }

    #[test]
    fn test_unviewed_products_are_unmarked() {
        let catalog = Catalog::new(vec![
            test_product(1, "Books", "Acme", 10.0),
            test_product(2, "Tools", "Acme", 10.0),
        ])
        .unwrap();
        let view = CatalogView::render(&catalog, |id| id.as_str() == "2");
        let viewed: Vec<bool> = view.cards().iter().map(|c| c.viewed).collect();
        assert_eq!(viewed, vec![false, true]);
    }

    #[test]
    fn test_activation_events() {
        let catalog = Catalog::new(vec![test_product(7, "Books", "Acme", 10.0)]).unwrap();
        let view = CatalogView::render(&catalog, |_| false);
        let id = ProductId::from(7);

        let mut calls = 0;
        for event in [ActivationEvent::Click, ActivationEvent::Enter, ActivationEvent::Space] {
            assert!(view.activate(&id, event, |_| calls += 1));
        }
        assert!(!view.activate(&id, ActivationEvent::OtherKey, |_| calls += 1));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_render_filtered() {
        let catalog = Catalog::new(vec![
            test_product(1, "Books", "Acme", 20.0),
            test_product(2, "Books", "Acme", 75.0),
            test_product(3, "Tools", "Acme", 80.0),
        ])
        .unwrap();
        let mut prefs = Preferences {
            price_range: PriceRange::From50To100,
            ..Preferences::default()
        };
        prefs.categories.insert("Books".to_string());

        let view = CatalogView::render_filtered(&catalog, |_| false, &prefs);
        let ids: Vec<&str> = view.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        prefs.brands.insert("Nobody".to_string());
        assert_eq!(CatalogView::render_filtered(&catalog, |_| false, &prefs), CatalogView::Empty);
    }

    #[test]
    fn test_serialize_shape() {
        let catalog = Catalog::new(vec![test_product(1, "Books", "Acme", 10.0)]).unwrap();
        let json = serde_json::to_value(CatalogView::render(&catalog, |_| true)).unwrap();
        assert_eq!(json["state"], "grid");
        assert_eq!(json["cards"][0]["viewed"], true);

        let json = serde_json::to_value(CatalogView::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"state": "empty"}));
    }
}
