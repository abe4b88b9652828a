use serde::{Deserialize, Serialize};

use super::{Preferences, Product, ProductId};

/// A recommended product with the engine's rationale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

/// Payload returned by the recommendation backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request handed to the recommendation engine after each preference change
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationRequest {
    pub preferences: Preferences,
    pub browsing_history: Vec<ProductId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRange;

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "recommendations": [
                {
                    "product": {"id": "p9", "name": "Lamp", "category": "Home", "price": 40, "brand": "Glow", "rating": 4.5},
                    "explanation": "You viewed other lighting",
                    "confidence_score": 8
                },
                {
                    "product": {"id": "p3", "name": "Mug", "category": "Home", "price": 12, "brand": "Glow", "rating": 3.9}
                }
            ],
            "count": 2
        }"#;
        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, Some(2));
        assert!(response.error.is_none());
        assert_eq!(response.recommendations[0].product.id, ProductId::from("p9"));
        assert_eq!(response.recommendations[0].confidence_score, Some(8.0));
        assert_eq!(response.recommendations[1].explanation, None);
    }

    #[test]
    fn test_error_response() {
        let json = r#"{"recommendations": [], "error": "Could not parse recommendations"}"#;
        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        assert!(response.recommendations.is_empty());
        assert_eq!(response.error.as_deref(), Some("Could not parse recommendations"));
    }

    #[test]
    fn test_request_shape() {
        let request = RecommendationRequest {
            preferences: Preferences {
                price_range: PriceRange::Over200,
                ..Preferences::default()
            },
            browsing_history: vec![ProductId::from("a"), ProductId::from(7)],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["preferences"]["priceRange"], "200-");
        assert_eq!(json["browsing_history"], serde_json::json!(["a", "7"]));
    }
}
