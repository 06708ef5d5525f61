mod command;
mod query;

pub use command::*;
pub use larder_shared::recipe::{Difficulty, Ingredient, MealType};
pub use query::*;
