mod preferences;
pub(crate) mod product;
mod recommendation;

pub use preferences::{PriceRange, Preferences, PreferencesSeed};
pub use product::{Catalog, Product, ProductId};
pub use recommendation::{Recommendation, RecommendationRequest, RecommendationResponse};
