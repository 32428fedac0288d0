//! Latest-run-wins wrapper around [`RecipeSuggester`].
//!
//! Each call to [`SuggestionSession::suggest`] takes a new generation
//! number. A run that finishes after a newer one has started is reported as
//! superseded: its result is dropped and the count observer is left alone.
//! Catalog calls already in flight are not cancelled.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::catalog::RecipeCatalog;
use crate::inventory::{InventoryItem, ShelfLife};
use crate::selection::{KeywordHitScorer, RecipeSuggester, Scorer};
use crate::types::suggestion_bundle::{SelectionResult, SuggestError};

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Current(SelectionResult),
    Superseded { generation: u64 },
}

impl RunOutcome {
    pub fn into_current(self) -> Option<SelectionResult> {
        match self {
            RunOutcome::Current(result) => Some(result),
            RunOutcome::Superseded { .. } => None,
        }
    }
}

pub struct SuggestionSession<C, L, S = KeywordHitScorer> {
    suggester: RecipeSuggester<C, L, S>,
    generation: AtomicU64,
}

impl<C, L, S> SuggestionSession<C, L, S>
where
    C: RecipeCatalog,
    L: ShelfLife,
    S: Scorer,
{
    pub fn new(suggester: RecipeSuggester<C, L, S>) -> Self {
        Self {
            suggester,
            generation: AtomicU64::new(0),
        }
    }

    pub fn suggester(&self) -> &RecipeSuggester<C, L, S> {
        &self.suggester
    }

    /// Generation of the most recently started run; 0 before the first.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Errors of a superseded run are swallowed along with its result.
    pub async fn suggest(&self, items: &[InventoryItem]) -> Result<RunOutcome, SuggestError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.suggester.evaluate(items).await;

        if self.latest_generation() != generation {
            debug!(
                generation,
                latest = self.latest_generation(),
                "Discarding superseded suggestion run"
            );
            return Ok(RunOutcome::Superseded { generation });
        }

        self.suggester.notify(result.as_ref().map_or(0, |r| r.total));
        result.map(RunOutcome::Current)
    }
}
