//! Inventory domain module.
//!
//! This crate tracks item quantities in a caller-owned store, persists the
//! store to a JSON file, and reports low-stock items. Business rules live in
//! [`store`]; file persistence in [`persist`]; the read-only console report
//! in [`report`].

pub mod audit;
pub mod persist;
pub mod report;
pub mod store;

pub use audit::{AuditEntry, AuditLog};
pub use persist::{DEFAULT_STORE_PATH, PersistError, load, save};
pub use report::write_report;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
