use std::collections::HashSet;

use crate::config::UrgencyThresholds;
use crate::inventory::{InventoryItem, ShelfLife};

/// How soon an item needs using. Orders most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    Urgent,
    Soon,
    Later,
}

impl UrgencyThresholds {
    pub fn classify(&self, days_left: i64) -> Urgency {
        if days_left <= self.urgent_within_days {
            Urgency::Urgent
        } else if days_left <= self.soon_within_days {
            Urgency::Soon
        } else {
            Urgency::Later
        }
    }
}

/// Picks the search keywords from the usable inventory.
#[derive(Debug, Clone)]
pub struct PrioritySelector {
    thresholds: UrgencyThresholds,
    max_keywords: usize,
}

impl Default for PrioritySelector {
    fn default() -> Self {
        Self::new(UrgencyThresholds::default(), 3)
    }
}

impl PrioritySelector {
    pub fn new(thresholds: UrgencyThresholds, max_keywords: usize) -> Self {
        Self {
            thresholds,
            max_keywords,
        }
    }

    /// Most urgent first, input order within a bucket. Names are deduplicated
    /// case-insensitively and returned trimmed in their original case.
    pub fn select<L>(&self, usable: &[&InventoryItem], shelf_life: &L) -> Vec<String>
    where
        L: ShelfLife + ?Sized,
    {
        let mut by_urgency: Vec<(Urgency, &InventoryItem)> = usable
            .iter()
            .map(|item| (self.thresholds.classify(shelf_life.days_left(item.expiry)), *item))
            .collect();
        // Stable: ties keep input order.
        by_urgency.sort_by_key(|(urgency, _)| *urgency);

        let mut seen = HashSet::new();
        let mut keywords = Vec::with_capacity(self.max_keywords);

        for (_, item) in by_urgency {
            if keywords.len() >= self.max_keywords {
                break;
            }

            let name = item.name.trim();
            let key = name.to_lowercase();
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            keywords.push(name.to_string());
        }

        keywords
    }
}
