// Engine module - pure aggregate computations over in-memory record slices
// This layer sits between the store (durable records) and CLI presentation

pub mod analytics;
pub mod error;

pub use analytics::{most_common_reason, top_items, total_waste, waste_in_period, ItemTotal};
pub use error::{Error, Result};
