//! Order Desk Core
//!
//! Layered architecture:
//! - domain: records, identity and validation rules
//! - repository: key-value store seam and record repositories
//! - aggregate / render: derived counters and presentational projection
//! - tracker: the owned state container the UI drives

pub mod domain;
pub mod repository;
pub mod aggregate;
pub mod render;
pub mod config;
pub mod error;
mod tracker;

pub use aggregate::{Counter, Counts, Dashboard};
pub use config::TrackerConfig;
pub use domain::{InputField, Order, OrderDraft, OrderField, OrderInput, RecordId, Task, ValidationError};
pub use error::{StoreError, TrackerError};
pub use render::{InventoryRow, OrderRow, RenderModel, RenderTarget, TaskRow};
pub use repository::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::Tracker;
