pub mod aggregation;
pub mod observer;
pub mod priority;
pub mod ranking;
pub mod truncation;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{CatalogQueryPlanner, RecipeCatalog};
use crate::config::SuggestionConfig;
use crate::inventory::{filter_usable, InventoryItem, ShelfLife};
use crate::types::identifiers::KeywordFingerprint;
use crate::types::suggestion_bundle::{SelectionResult, SuggestError, SuggestionMetadata};
pub use aggregation::merge_by_id;
pub use observer::{CountObserver, RecordingObserver};
pub use priority::{PrioritySelector, Urgency};
pub use ranking::{rank, KeywordHitScorer, Scorer};
pub use truncation::{apply_limit, LimitResult};

/// Inventory in, ranked recipe suggestions out.
pub struct RecipeSuggester<C, L, S = KeywordHitScorer> {
    catalog: C,
    shelf_life: L,
    scorer: S,
    selector: PrioritySelector,
    planner: CatalogQueryPlanner,
    max_suggestions: usize,
    observer: Option<Arc<dyn CountObserver>>,
}

impl<C, L> RecipeSuggester<C, L, KeywordHitScorer>
where
    C: RecipeCatalog,
    L: ShelfLife,
{
    pub fn new(catalog: C, shelf_life: L, config: &SuggestionConfig) -> Self {
        Self {
            catalog,
            shelf_life,
            scorer: KeywordHitScorer,
            selector: PrioritySelector::new(config.urgency, config.max_keywords),
            planner: CatalogQueryPlanner::new(config.per_keyword_limit),
            max_suggestions: config.max_suggestions,
            observer: None,
        }
    }
}

impl<C, L, S> RecipeSuggester<C, L, S>
where
    C: RecipeCatalog,
    L: ShelfLife,
    S: Scorer,
{
    pub fn with_scorer<S2: Scorer>(self, scorer: S2) -> RecipeSuggester<C, L, S2> {
        RecipeSuggester {
            catalog: self.catalog,
            shelf_life: self.shelf_life,
            scorer,
            selector: self.selector,
            planner: self.planner,
            max_suggestions: self.max_suggestions,
            observer: self.observer,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn CountObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Keywords the next run would search for.
    pub fn keywords(&self, items: &[InventoryItem]) -> Vec<String> {
        let report = filter_usable(items, &self.shelf_life);
        self.selector.select(&report.usable, &self.shelf_life)
    }

    /// Run the pipeline and report the outcome to the observer.
    ///
    /// A failed run reports 0.
    pub async fn suggest(&self, items: &[InventoryItem]) -> Result<SelectionResult, SuggestError> {
        let result = self.evaluate(items).await;
        self.notify(result.as_ref().map_or(0, |r| r.total));
        result
    }

    /// Run the pipeline without notifying anyone.
    pub async fn evaluate(&self, items: &[InventoryItem]) -> Result<SelectionResult, SuggestError> {
        // 1. Freshness Phase
        let report = filter_usable(items, &self.shelf_life);

        // 2. Keyword Phase
        let keywords = self.selector.select(&report.usable, &self.shelf_life);

        let fingerprint =
            (!keywords.is_empty()).then(|| KeywordFingerprint::from_keywords(&keywords));
        let mut metadata = SuggestionMetadata {
            fingerprint,
            keywords,
            items_considered: report.total,
            usable_count: report.usable_count(),
            dropped_count: report.dropped_count(),
            tier: None,
            catalog_calls: 0,
        };

        if metadata.keywords.is_empty() {
            debug!(
                items = metadata.items_considered,
                dropped = metadata.dropped_count,
                "No usable ingredients, skipping catalog"
            );
            return Ok(SelectionResult::empty(metadata));
        }

        // 3. Query Phase
        let outcome = self
            .planner
            .execute(&self.catalog, &metadata.keywords)
            .await
            .map_err(|e| {
                warn!(error = %e, "Suggestion run failed");
                SuggestError::CatalogUnavailable(e)
            })?;
        metadata.tier = outcome.tier;
        metadata.catalog_calls = outcome.calls;

        // 4. Merge + Ordering Phase
        let merged = merge_by_id(outcome.records);
        let ranked = rank(merged, &metadata.keywords, &self.scorer);

        // 5. Limit Phase
        let LimitResult {
            selected,
            total,
            excluded_by_limit,
        } = apply_limit(ranked, self.max_suggestions);

        info!(
            keywords = ?metadata.keywords,
            tier = ?metadata.tier,
            total,
            excluded_by_limit,
            "Suggestion run complete"
        );

        Ok(SelectionResult {
            recipes: selected,
            total,
            metadata,
        })
    }

    pub(crate) fn notify(&self, total: usize) {
        if let Some(observer) = &self.observer {
            observer.count_changed(total);
        }
    }
}
