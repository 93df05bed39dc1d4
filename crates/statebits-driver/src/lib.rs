pub mod analysis;
pub mod condition;
pub mod host;
pub mod sync;

pub use analysis::{DriverAnalysis, DriverMismatch};
pub use condition::{AnimatorCondition, ConditionMode};
pub use host::{DriverEntry, DriverHost, MemoryHost};
pub use sync::{DriverSync, SyncReport};
