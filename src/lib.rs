//! Urgency-ranked recipe suggestions from a food inventory.
//!
//! `pantry-recipes` drops expired and used-up items, turns the most urgent
//! remaining ones into up to three search keywords, asks a recipe catalog
//! for matches with a combined → pairwise → single-ingredient fallback, and
//! returns a deduplicated list ranked by how many keywords each recipe name
//! mentions. Given the same inventory, day and catalog answers, the output
//! is identical.

pub mod catalog;
pub mod config;
pub mod inventory;
pub mod selection;
pub mod session;
pub mod types;

pub use catalog::{CatalogError, RecipeCatalog};
pub use config::SuggestionConfig;
pub use inventory::{CalendarShelfLife, InventoryItem, ItemStatus, ShelfLife};
pub use selection::{CountObserver, RecipeSuggester};
pub use session::{RunOutcome, SuggestionSession};
pub use types::{RecipeRecord, ScoredRecipe, SelectionResult, SuggestError};
