mod date;
mod error;
pub mod pantry;
pub mod recipe;

pub use date::*;
pub use error::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    /// Single pool used for both reads and writes, handy for tests and CLI tools.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}

/// Parse a ULID coming from a caller, reporting a user error when malformed.
pub fn parse_id(value: &str, field: &str) -> Result<ulid::Ulid> {
    match ulid::Ulid::from_string(value.trim()) {
        Ok(id) => Ok(id),
        Err(_) => crate::user!("malformed {field}: '{value}'"),
    }
}

pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}
