// RecordStore - In-memory record sequence and score table with field filters

pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod record;
pub mod scores;
pub mod store;
pub mod value;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Result, StoreError};
pub use filter::{Filter, FilterOp};
pub use record::Record;
pub use scores::ScoreTable;
pub use store::RecordStore;
pub use value::Value;
