use chrono::{Local, NaiveDate};

use crate::inventory::item::InventoryItem;

pub trait ShelfLife {
    /// Whole days from today until `expiry`. Negative once it has passed.
    fn days_left(&self, expiry: NaiveDate) -> i64;

    fn is_expired(&self, item: &InventoryItem) -> bool {
        self.days_left(item.expiry) < 0
    }
}

/// Calendar-day shelf life anchored at a fixed "today".
///
/// An item is expired once its expiry date is strictly in the past; on the
/// expiry day itself it is still usable with zero days left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarShelfLife {
    today: NaiveDate,
}

impl CalendarShelfLife {
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Anchored at the local calendar date.
    pub fn today() -> Self {
        Self::on(Local::now().date_naive())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.today
    }
}

impl ShelfLife for CalendarShelfLife {
    fn days_left(&self, expiry: NaiveDate) -> i64 {
        expiry.signed_duration_since(self.today).num_days()
    }
}

