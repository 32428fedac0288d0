//! The recipe catalog seam and the tiered query strategy run against it.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::recipe::RecipeRecord;

#[cfg(feature = "mealdb")]
pub mod mealdb;
pub mod planner;

#[cfg(feature = "mealdb")]
pub use mealdb::MealDbCatalog;
pub use planner::{CatalogQueryPlanner, PlannerOutcome, QueryPlan, QueryTask, TierPlan};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog returned status {status_code}: {message}")]
    Status { status_code: u16, message: String },

    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),
}

/// A searchable recipe catalog.
///
/// One call filters by every ingredient in `keywords`; callers never pass an
/// empty list.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    fn name(&self) -> &str;

    async fn query_by_ingredients(
        &self,
        keywords: &[String],
    ) -> Result<Vec<RecipeRecord>, CatalogError>;
}
