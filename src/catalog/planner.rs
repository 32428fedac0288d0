use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, RecipeCatalog};
use crate::types::recipe::RecipeRecord;
use crate::types::suggestion_bundle::QueryTier;

/// One catalog call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTask {
    pub tier: QueryTier,
    pub keywords: Vec<String>,
    /// Keep only the first `n` records of this call.
    pub take: Option<usize>,
}

/// The calls of one tier, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPlan {
    pub tier: QueryTier,
    pub tasks: Vec<QueryTask>,
}

/// Every call the planner may issue for a keyword list, grouped by tier.
///
/// Tiers run in order and execution stops at the first tier whose
/// accumulated records are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    tiers: Vec<TierPlan>,
}

impl QueryPlan {
    pub fn for_keywords(keywords: &[String], per_keyword_limit: usize) -> Self {
        if keywords.is_empty() {
            return Self { tiers: Vec::new() };
        }

        let mut tiers = Vec::with_capacity(3);

        tiers.push(TierPlan {
            tier: QueryTier::Combined,
            tasks: vec![QueryTask {
                tier: QueryTier::Combined,
                keywords: keywords.to_vec(),
                take: None,
            }],
        });

        if keywords.len() >= 2 {
            let mut pairs = Vec::new();
            for i in 0..keywords.len() {
                for j in (i + 1)..keywords.len() {
                    pairs.push(QueryTask {
                        tier: QueryTier::Pairwise,
                        keywords: vec![keywords[i].clone(), keywords[j].clone()],
                        take: None,
                    });
                }
            }
            tiers.push(TierPlan {
                tier: QueryTier::Pairwise,
                tasks: pairs,
            });
        }

        tiers.push(TierPlan {
            tier: QueryTier::Single,
            tasks: keywords
                .iter()
                .map(|keyword| QueryTask {
                    tier: QueryTier::Single,
                    keywords: vec![keyword.clone()],
                    take: Some(per_keyword_limit),
                })
                .collect(),
        });

        Self { tiers }
    }

    pub fn tiers(&self) -> &[TierPlan] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerOutcome {
    /// Records of the accepted tier, in accumulation order. May repeat ids.
    pub records: Vec<RecipeRecord>,
    pub tier: Option<QueryTier>,
    pub calls: usize,
}

/// Runs a [`QueryPlan`] against a catalog, one call at a time.
#[derive(Debug, Clone)]
pub struct CatalogQueryPlanner {
    per_keyword_limit: usize,
}

impl Default for CatalogQueryPlanner {
    fn default() -> Self {
        Self::new(6)
    }
}

impl CatalogQueryPlanner {
    pub fn new(per_keyword_limit: usize) -> Self {
        Self { per_keyword_limit }
    }

    pub fn plan(&self, keywords: &[String]) -> QueryPlan {
        QueryPlan::for_keywords(keywords, self.per_keyword_limit)
    }

    /// Any failed call aborts the whole run; records gathered so far are
    /// dropped with it.
    pub async fn execute<C>(
        &self,
        catalog: &C,
        keywords: &[String],
    ) -> Result<PlannerOutcome, CatalogError>
    where
        C: RecipeCatalog + ?Sized,
    {
        let plan = self.plan(keywords);
        let mut calls = 0;

        for tier_plan in plan.tiers() {
            let mut accumulated = Vec::new();

            for task in &tier_plan.tasks {
                debug!(
                    catalog = catalog.name(),
                    tier = %task.tier,
                    keywords = ?task.keywords,
                    "Querying catalog"
                );

                let mut records = catalog
                    .query_by_ingredients(&task.keywords)
                    .await
                    .map_err(|e| {
                        warn!(
                            catalog = catalog.name(),
                            tier = %task.tier,
                            error = %e,
                            "Catalog query failed, aborting run"
                        );
                        e
                    })?;
                calls += 1;

                if let Some(limit) = task.take {
                    records.truncate(limit);
                }
                accumulated.extend(records);
            }

            if !accumulated.is_empty() {
                info!(
                    tier = %tier_plan.tier,
                    records = accumulated.len(),
                    calls,
                    "Catalog tier accepted"
                );
                return Ok(PlannerOutcome {
                    records: accumulated,
                    tier: Some(tier_plan.tier),
                    calls,
                });
            }

            debug!(tier = %tier_plan.tier, "Catalog tier empty, falling back");
        }

        Ok(PlannerOutcome {
            records: Vec::new(),
            tier: None,
            calls,
        })
    }
}
