pub mod fallback_id;
pub mod load_report;
pub mod portfolio_sync;
pub mod records;

pub use fallback_id::FallbackIdGenerator;
pub use load_report::{LoadReport, LoadSource};
pub use portfolio_sync::{PortfolioSync, SyncError};
