pub mod aggregator;
pub mod categorization;
mod command;
mod export;
pub mod normalize;
pub mod quantity;
mod query;
mod source;
pub mod substitution;
pub mod unit;

pub use aggregator::{Aggregator, ShoppingItem};
pub use categorization::Category;
pub use command::*;
pub use export::ExportFormat;
pub use query::*;
pub use source::*;
