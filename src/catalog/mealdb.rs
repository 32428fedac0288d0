//! TheMealDB catalog adapter.
//!
//! Uses the public `filter.php?i=` endpoint, which takes a comma-separated
//! ingredient list and answers `{"meals": [...]}` or `{"meals": null}` when
//! nothing matches.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::trace;

use crate::catalog::{CatalogError, RecipeCatalog};
use crate::config::MealDbConfig;
use crate::types::identifiers::RecipeId;
use crate::types::recipe::RecipeRecord;

const MEAL_PAGE_BASE_URL: &str = "https://www.themealdb.com/meal";

pub struct MealDbCatalog {
    name: String,
    base_url: String,
    client: reqwest::Client,
}

impl MealDbCatalog {
    pub fn new(config: &MealDbConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            name: "mealdb".into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Point at a different API root (e.g. a paid key or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Public page for a recipe.
    pub fn recipe_url(id: &RecipeId) -> String {
        format!("{MEAL_PAGE_BASE_URL}/{id}")
    }
}

#[derive(Debug, Deserialize)]
struct FilterResponse {
    #[serde(default)]
    meals: Option<Vec<MealSummary>>,
}

#[derive(Debug, Deserialize)]
struct MealSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl From<MealSummary> for RecipeRecord {
    fn from(meal: MealSummary) -> Self {
        RecipeRecord {
            id: RecipeId::new(meal.id),
            name: meal.name.unwrap_or_default(),
            image_url: meal.thumbnail.unwrap_or_default(),
            extra: meal.extra,
        }
    }
}

#[async_trait]
impl RecipeCatalog for MealDbCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    async fn query_by_ingredients(
        &self,
        keywords: &[String],
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        let filter = keywords.join(",");
        let url = format!("{}/filter.php", self.base_url);
        trace!(url = %url, filter = %filter, "MealDB request");

        let response = self
            .client
            .get(&url)
            .query(&[("i", filter.as_str())])
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status_code: status.as_u16(),
                message: "MealDB request failed".into(),
            });
        }

        let body: FilterResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(body
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(RecipeRecord::from)
            .collect())
    }
}
