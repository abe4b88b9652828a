use crate::{
    error::AppResult,
    models::{Recommendation, RecommendationRequest, RecommendationResponse},
    views::RecommendationView,
};

/// External recommendation source
///
/// Ranking, scoring and explanation text are entirely the engine's concern;
/// the returned order is displayed unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Computes recommendations for the given preferences and history
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<Recommendation>>;

    /// Engine name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Loading flag and latest result supplied to the recommendation view
#[derive(Debug, Clone, Default)]
pub struct RecommendationFeed {
    is_loading: bool,
    recommendations: Option<Vec<Recommendation>>,
}

impl RecommendationFeed {
    /// Creates an idle feed with no result yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Latest result, or `None` before the first response
    pub fn recommendations(&self) -> Option<&[Recommendation]> {
        self.recommendations.as_deref()
    }

    /// Marks a request as in flight; the previous list is kept until it resolves
    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    /// Stores a successful result and clears the loading flag
    pub fn complete(&mut self, recommendations: Vec<Recommendation>) {
        self.is_loading = false;
        self.recommendations = Some(recommendations);
    }

    /// Engine failures surface only as an empty, idle feed
    pub fn fail(&mut self) {
        self.is_loading = false;
        self.recommendations = Some(Vec::new());
    }

    /// Applies a backend payload; a reported error counts as a failure even
    /// if partial results came back
    pub fn apply_response(&mut self, response: RecommendationResponse) {
        match response.error {
            Some(error) => {
                tracing::warn!(error = %error, "Recommendation backend reported an error");
                self.fail();
            }
            None => self.complete(response.recommendations),
        }
    }

    /// Renders the panel from the current flag and list
    pub fn view(&self) -> RecommendationView {
        RecommendationView::render(self.is_loading, self.recommendations())
    }

    /// Runs one engine round trip, keeping the loading flag set while it is
    /// outstanding
    pub async fn refresh(
        &mut self,
        engine: &dyn RecommendationEngine,
        request: &RecommendationRequest,
    ) {
        self.begin();
        match engine.recommend(request).await {
            Ok(recommendations) => {
                tracing::info!(
                    engine = engine.name(),
                    count = recommendations.len(),
                    "Received recommendations"
                );
                self.complete(recommendations);
            }
            Err(e) => {
                tracing::warn!(engine = engine.name(), error = %e, "Recommendation engine failed");
                self.fail();
            }
        }
    }
}
