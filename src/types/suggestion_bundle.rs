use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::types::identifiers::KeywordFingerprint;
use crate::types::recipe::RecipeRecord;

/// Escalating catalog query strategies, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTier {
    /// All keywords in one query.
    Combined,
    /// One query per unordered keyword pair.
    Pairwise,
    /// One query per keyword, each capped.
    Single,
}

impl QueryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryTier::Combined => "combined",
            QueryTier::Pairwise => "pairwise",
            QueryTier::Single => "single",
        }
    }
}

impl std::fmt::Display for QueryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested recipe and its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    pub recipe: RecipeRecord,
    /// Number of selected keywords found in the recipe name.
    pub hit_count: usize,
}

/// How the suggestions were arrived at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionMetadata {
    pub keywords: Vec<String>,
    pub fingerprint: Option<KeywordFingerprint>,

    pub items_considered: usize,
    pub usable_count: usize,
    pub dropped_count: usize,

    /// Tier whose records were accepted; `None` when nothing matched.
    pub tier: Option<QueryTier>,
    pub catalog_calls: usize,
}

/// The final result of a suggestion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub recipes: Vec<ScoredRecipe>,
    /// Distinct recipes found before truncation.
    pub total: usize,
    pub metadata: SuggestionMetadata,
}

impl SelectionResult {
    pub fn empty(metadata: SuggestionMetadata) -> Self {
        Self {
            recipes: Vec::new(),
            total: 0,
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}
