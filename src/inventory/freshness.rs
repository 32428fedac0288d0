use crate::inventory::item::InventoryItem;
use crate::inventory::shelf_life::ShelfLife;

/// Outcome of the freshness pass. Borrows the caller's items.
#[derive(Debug, Clone)]
pub struct FreshnessReport<'a> {
    pub usable: Vec<&'a InventoryItem>,
    pub total: usize,
}

impl FreshnessReport<'_> {
    pub fn usable_count(&self) -> usize {
        self.usable.len()
    }

    /// Items left out for being expired, consumed or discarded.
    pub fn dropped_count(&self) -> usize {
        self.total - self.usable.len()
    }
}

/// Keep items that are in stock and not expired, in input order.
pub fn filter_usable<'a, L>(items: &'a [InventoryItem], shelf_life: &L) -> FreshnessReport<'a>
where
    L: ShelfLife + ?Sized,
{
    let usable = items
        .iter()
        .filter(|item| item.is_in_stock() && !shelf_life.is_expired(item))
        .collect();

    FreshnessReport {
        usable,
        total: items.len(),
    }
}
