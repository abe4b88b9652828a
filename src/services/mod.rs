pub mod history;
pub mod preference_state;
pub mod recommendations;
pub mod unique_values;

pub use history::BrowsingHistoryStore;
pub use preference_state::{ListenerId, PreferenceState, PreferencesListener};
pub use recommendations::{RecommendationEngine, RecommendationFeed};
pub use unique_values::{extract, CatalogField};
