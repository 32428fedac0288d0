pub mod identifiers;
pub mod recipe;
pub mod suggestion_bundle;

pub use identifiers::{KeywordFingerprint, RecipeId};
pub use recipe::RecipeRecord;
pub use suggestion_bundle::{
    QueryTier, ScoredRecipe, SelectionResult, SuggestError, SuggestionMetadata,
};
