mod delete;
mod upsert;

use std::ops::Deref;

use larder_shared::recipe::not_blank;
use serde::Deserialize;
use validator::Validate;

#[derive(Clone)]
pub struct Command {
    state: larder_shared::State,
}

impl Deref for Command {
    type Target = larder_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: larder_shared::State) -> Self {
        Self { state }
    }
}

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct PantryInput {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(length(max = 50))]
    pub unit: Option<String>,
    pub expires_at: Option<u64>,
}

impl PantryInput {
    /// Lowercased name with inner whitespace collapsed.
    pub(crate) fn normalized_name(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Lowercased unit, empty when the entry has none.
    pub(crate) fn normalized_unit(&self) -> String {
        self.unit
            .as_deref()
            .map(|u| u.trim().to_lowercase())
            .unwrap_or_default()
    }
}
