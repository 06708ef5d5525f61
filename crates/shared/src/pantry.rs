use serde::{Deserialize, Serialize};

use crate::DAY_SECS;

pub const EXPIRING_SOON_DAYS: u64 = 7;

/// Ingredient stock a user reports having at home.
///
/// `quantity = None` means "have some, amount unknown".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PantryItem {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expires_at: Option<u64>,
    pub updated_at: u64,
}

impl PantryItem {
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn is_expiring_soon(&self, now: u64) -> bool {
        self.expires_at
            .is_some_and(|at| at > now && at - now <= EXPIRING_SOON_DAYS * DAY_SECS)
    }
}
