use std::{cell::RefCell, path::Path, rc::Rc};

use crate::{
    error::AppResult,
    models::{
        Catalog, PriceRange, Preferences, PreferencesSeed, ProductId, RecommendationRequest,
        RecommendationResponse,
    },
    services::{BrowsingHistoryStore, PreferenceState, RecommendationEngine, RecommendationFeed},
    views::{ActivationEvent, CatalogView, HistoryView, PreferencesForm, RecommendationView},
};

/// Owning context for one storefront session
///
/// Receives every preference emission, records product activations in the
/// browsing history and holds the recommendation feed.
pub struct AppState {
    catalog: Catalog,
    history: BrowsingHistoryStore,
    preferences: PreferenceState,
    latest: Rc<RefCell<Preferences>>,
    feed: RecommendationFeed,
}

impl AppState {
    /// Creates a session with an empty browsing history
    pub fn new(catalog: Catalog, seed: PreferencesSeed) -> Self {
        Self::with_history(catalog, seed, BrowsingHistoryStore::new())
    }

    /// Creates a session from a host-supplied history snapshot
    pub fn with_history(
        catalog: Catalog,
        seed: PreferencesSeed,
        history: BrowsingHistoryStore,
    ) -> Self {
        let latest = Rc::new(RefCell::new(Preferences::default()));
        let sink = Rc::clone(&latest);
        let preferences = PreferenceState::initialize(seed, move |prefs| {
            *sink.borrow_mut() = prefs.clone();
        });

        Self {
            catalog,
            history,
            preferences,
            latest,
            feed: RecommendationFeed::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &BrowsingHistoryStore {
        &self.history
    }

    /// Last snapshot delivered to this context
    pub fn preferences(&self) -> Preferences {
        self.latest.borrow().clone()
    }

    /// Direct access for hosts that register their own listeners
    pub fn preference_state_mut(&mut self) -> &mut PreferenceState {
        &mut self.preferences
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) -> Preferences {
        self.preferences.set_price_range(price_range)
    }

    pub fn select_price_range(&mut self, raw: &str) -> AppResult<Preferences> {
        self.preferences.select_price_range(raw)
    }

    pub fn toggle_category(&mut self, value: &str, included: bool) -> Preferences {
        self.preferences.toggle_category(value, included)
    }

    pub fn toggle_brand(&mut self, value: &str, included: bool) -> Preferences {
        self.preferences.toggle_brand(value, included)
    }

    /// Full catalog with viewed markers
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::render(&self.catalog, |id| self.history.contains(id))
    }

    /// Catalog narrowed to the current preferences
    pub fn filtered_catalog_view(&self) -> CatalogView {
        CatalogView::render_filtered(
            &self.catalog,
            |id| self.history.contains(id),
            &self.latest.borrow(),
        )
    }

    /// Handles an input event on a catalog card; returns whether the product
    /// was activated
    pub fn activate_product(&mut self, id: &ProductId, event: ActivationEvent) -> bool {
        let view = self.catalog_view();
        let history = &mut self.history;
        view.activate(id, event, |id| {
            if history.record(id.clone()) {
                tracing::info!(product_id = %id, history_len = history.len(), "Product viewed");
            }
        })
    }

    pub fn history_view(&self) -> HistoryView {
        HistoryView::render(self.history.list(), &self.catalog)
    }

    /// Clear-history action of the history panel
    pub fn clear_history(&mut self) {
        let cleared = self.history.len();
        self.history.clear();
        tracing::info!(cleared, "Browsing history cleared");
    }

    pub fn preferences_form(&self) -> PreferencesForm {
        PreferencesForm::render(&self.latest.borrow(), self.catalog.products())
    }

    /// Request for the recommendation engine built from the latest snapshot
    pub fn recommendation_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            preferences: self.preferences(),
            browsing_history: self.history.list().to_vec(),
        }
    }

    /// Asks `engine` for fresh recommendations; the panel shows Loading
    /// until it answers
    pub async fn refresh_recommendations(&mut self, engine: &dyn RecommendationEngine) {
        let request = self.recommendation_request();
        self.feed.refresh(engine, &request).await;
    }

    /// Feeds a recommendation backend payload into the panel
    pub fn apply_recommendation_response(&mut self, response: RecommendationResponse) {
        self.feed.apply_response(response);
    }

    /// Reads a saved recommendation backend payload from disk and applies it
    pub fn load_recommendations(&mut self, path: impl AsRef<Path>) -> AppResult<()> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let response: RecommendationResponse = serde_json::from_str(&json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = response.recommendations.len(),
            "Loaded recommendation response"
        );
        self.apply_recommendation_response(response);
        Ok(())
    }

    pub fn recommendation_view(&self) -> RecommendationView {
        self.feed.view()
    }
}
