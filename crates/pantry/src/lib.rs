mod command;
mod query;

pub use command::*;
pub use larder_shared::pantry::PantryItem;
pub use query::*;
