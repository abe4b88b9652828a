use serde::Serialize;
use std::fmt::Display;

use crate::models::{ProductId, Recommendation};

pub const LOADING_MESSAGE: &str = "Loading recommendations...";
pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No recommendations yet. Set your preferences and browse some products!";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationCard {
    pub id: ProductId,
    pub name: String,
    pub category_line: String,
    pub price: f64,
    pub brand: String,
    pub rating: f64,
    pub explanation: Option<String>,
}

impl From<&Recommendation> for RecommendationCard {
    fn from(rec: &Recommendation) -> Self {
        let product = &rec.product;
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category_line: product.category_line(),
            price: product.price,
            brand: product.brand.clone(),
            rating: product.rating,
            explanation: rec.explanation.clone().filter(|text| !text.is_empty()),
        }
    }
}

/// Recommendation panel, recomputed from its two inputs on every render
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "cards", rename_all = "snake_case")]
pub enum RecommendationView {
    Loading,
    Empty,
    Populated(Vec<RecommendationCard>),
}

impl RecommendationView {
    /// Loading wins over any list; an absent or empty list is Empty
    pub fn render(is_loading: bool, recommendations: Option<&[Recommendation]>) -> Self {
        if is_loading {
            return RecommendationView::Loading;
        }
        match recommendations {
            Some(recs) if !recs.is_empty() => {
                RecommendationView::Populated(recs.iter().map(RecommendationCard::from).collect())
            }
            _ => RecommendationView::Empty,
        }
    }
}

impl Display for RecommendationView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationView::Loading => writeln!(f, "{}", LOADING_MESSAGE),
            RecommendationView::Empty => writeln!(f, "{}", NO_RECOMMENDATIONS_MESSAGE),
            RecommendationView::Populated(cards) => {
                for card in cards {
                    writeln!(
                        f,
                        "[{}] {} ({}) ${} | {} | rating {}",
                        card.id, card.name, card.category_line, card.price, card.brand, card.rating
                    )?;
                    if let Some(explanation) = &card.explanation {
                        writeln!(f, "    Why? {}", explanation)?;
                    }
                }
                Ok(())
            }
        }
    }
}
