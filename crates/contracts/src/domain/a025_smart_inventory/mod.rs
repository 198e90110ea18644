pub mod aggregate;
pub mod related;

pub use aggregate::{JobSourceFilter, SmartInventory, SmartInventoryId, SmartInventoryPatch};
pub use related::{AccessRecord, HostSummary, ListPage, UnifiedJobSummary};
