pub mod freshness;
pub mod item;
pub mod shelf_life;

pub use freshness::{filter_usable, FreshnessReport};
pub use item::{parse_expiry, ExpiryParseError, InventoryItem, ItemStatus};
pub use shelf_life::{CalendarShelfLife, ShelfLife};
