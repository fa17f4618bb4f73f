//! Domain Layer
//!
//! Records, identity and validation rules.
//! This layer has NO storage dependencies (only serde for serialization).

mod record;
mod task;
mod order;
mod error;
pub mod parse;

pub use record::{Record, RecordId, Entry};
pub use task::Task;
pub use order::{Order, OrderDraft, OrderInput, MAX_QUANTITY};
pub use error::{ValidationError, InputField, OrderField};
