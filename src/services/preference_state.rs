use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{PriceRange, Preferences, PreferencesSeed},
};

/// Observer invoked with every preference snapshot
pub type PreferencesListener = Box<dyn FnMut(&Preferences)>;

/// Handle returned by [`PreferenceState::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub Uuid);

impl ListenerId {
    /// Creates a new random listener ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Holder of the current filter selection.
///
/// Each mutating call replaces the snapshot and synchronously delivers the
/// full new snapshot to every registered listener exactly once before
/// returning it.
pub struct PreferenceState {
    current: Preferences,
    listeners: Vec<(ListenerId, PreferencesListener)>,
}

impl PreferenceState {
    /// Creates the state from a partial seed and emits the starting snapshot
    /// to `observer`.
    pub fn initialize(
        seed: PreferencesSeed,
        observer: impl FnMut(&Preferences) + 'static,
    ) -> Self {
        let mut state = Self {
            current: Preferences::from(seed),
            listeners: vec![(ListenerId::new(), Box::new(observer))],
        };
        state.emit();
        state
    }

    /// The latest snapshot, identical to what listeners last received
    pub fn current(&self) -> &Preferences {
        &self.current
    }

    /// Registers another listener and replays the current snapshot to it
    pub fn subscribe(&mut self, mut listener: impl FnMut(&Preferences) + 'static) -> ListenerId {
        let id = ListenerId::new();
        listener(&self.current);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Replaces the price bucket and emits; re-selecting the current bucket
    /// still emits
    pub fn set_price_range(&mut self, price_range: PriceRange) -> Preferences {
        self.current.price_range = price_range;
        self.emit()
    }

    /// Parses an externally supplied bucket and applies it.
    ///
    /// Unknown values leave the state untouched and emit nothing.
    pub fn select_price_range(&mut self, raw: &str) -> AppResult<Preferences> {
        let price_range = raw.parse::<PriceRange>().map_err(|e| {
            tracing::warn!(value = %raw, "Ignoring unknown price range");
            e
        })?;
        Ok(self.set_price_range(price_range))
    }

    /// Adds (`included`) or removes a category and emits.
    ///
    /// Values are not checked against the catalog.
    pub fn toggle_category(&mut self, value: &str, included: bool) -> Preferences {
        if included {
            self.current.categories.insert(value.to_string());
        } else {
            self.current.categories.remove(value);
        }
        self.emit()
    }

    /// Adds (`included`) or removes a brand and emits
    pub fn toggle_brand(&mut self, value: &str, included: bool) -> Preferences {
        if included {
            self.current.brands.insert(value.to_string());
        } else {
            self.current.brands.remove(value);
        }
        self.emit()
    }

    /// Delivers the current snapshot to every listener and returns a copy
    fn emit(&mut self) -> Preferences {
        tracing::debug!(
            listener_count = self.listeners.len(),
            price_range = %self.current.price_range,
            category_count = self.current.categories.len(),
            brand_count = self.current.brands.len(),
            "Emitting preferences"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.current);
        }
        self.current.clone()
    }
}

impl std::fmt::Debug for PreferenceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceState")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
