use crate::types::suggestion_bundle::ScoredRecipe;

pub struct LimitResult {
    pub selected: Vec<ScoredRecipe>,
    /// Candidates before the cut.
    pub total: usize,
    pub excluded_by_limit: usize,
}

pub fn apply_limit(mut ranked: Vec<ScoredRecipe>, limit: usize) -> LimitResult {
    let total = ranked.len();
    ranked.truncate(limit);

    LimitResult {
        excluded_by_limit: total - ranked.len(),
        selected: ranked,
        total,
    }
}
