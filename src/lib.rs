// dealstore - Record store, filtering, pagination and CSV export for a
// dealership back office

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod page;
pub mod record;
pub mod report;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use error::StoreError;
pub use export::{ExportFile, ExportSpec, export_csv};
pub use filter::{Criterion, Predicate, Query};
pub use page::Pager;
pub use record::{IdSpec, Record, now_local};
pub use store::{Backing, FileBacking, Gateway, MemoryBacking, MockGateway, Store};
