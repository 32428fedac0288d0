use std::cmp::Reverse;

use crate::types::recipe::RecipeRecord;
use crate::types::suggestion_bundle::ScoredRecipe;

pub trait Scorer {
    fn hit_count(&self, recipe: &RecipeRecord, keywords: &[String]) -> usize;
}

/// v0: Keyword substring hits
/// hits(recipe) := |{ k in keywords : lower(k) ⊆ lower(recipe.name) }|
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordHitScorer;

impl Scorer for KeywordHitScorer {
    fn hit_count(&self, recipe: &RecipeRecord, keywords: &[String]) -> usize {
        let name = recipe.name.to_lowercase();
        keywords
            .iter()
            .filter(|keyword| name.contains(&keyword.to_lowercase()))
            .count()
    }
}

/// Score every record and order by hits, highest first. Equal scores keep
/// their incoming order.
pub fn rank<S>(records: Vec<RecipeRecord>, keywords: &[String], scorer: &S) -> Vec<ScoredRecipe>
where
    S: Scorer + ?Sized,
{
    let mut scored: Vec<ScoredRecipe> = records
        .into_iter()
        .map(|recipe| {
            let hit_count = scorer.hit_count(&recipe, keywords);
            ScoredRecipe { recipe, hit_count }
        })
        .collect();

    scored.sort_by_key(|s| Reverse(s.hit_count));

    debug_assert!(scored.windows(2).all(|w| w[0].hit_count >= w[1].hit_count));

    scored
}
