pub mod catalog;
pub mod history;
pub mod preferences;
pub mod recommendations;

pub use catalog::{ActivationEvent, CatalogView, ProductCard};
pub use history::{HistoryEntry, HistoryView};
pub use preferences::{Checkbox, PreferencesForm, PriceOption};
pub use recommendations::{RecommendationCard, RecommendationView};
