mod check;
mod delete;
mod generate;
mod rename;
mod reset;

pub use check::*;
pub use generate::*;
pub use rename::*;

use std::ops::Deref;

use larder_db::table::ShoppingList as ListTable;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::ShoppingList;

#[derive(Clone)]
pub struct Command<R = larder_recipe::Query, P = larder_pantry::Query> {
    state: larder_shared::State,
    recipes: R,
    pantry: P,
}

impl<R, P> Deref for Command<R, P> {
    type Target = larder_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    /// Command reading recipes and pantry straight from the database.
    pub fn new(state: larder_shared::State) -> Self {
        let recipes = larder_recipe::Query(state.read_db.clone());
        let pantry = larder_pantry::Query(state.read_db.clone());

        Self {
            state,
            recipes,
            pantry,
        }
    }
}

impl<R, P> Command<R, P> {
    pub fn with_sources(state: larder_shared::State, recipes: R, pantry: P) -> Self {
        Self {
            state,
            recipes,
            pantry,
        }
    }

    /// Make sure the list exists and belongs to `request_by`.
    async fn ensure_owner(&self, id: &str, request_by: &str) -> larder_shared::Result<()> {
        larder_shared::parse_id(id, "shopping list id")?;

        let statement = sea_query::Query::select()
            .column(ListTable::UserId)
            .from(ListTable::Table)
            .and_where(Expr::col(ListTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let owner = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        let Some((owner,)) = owner else {
            larder_shared::not_found!("shopping list '{id}'");
        };

        if owner != request_by {
            larder_shared::forbidden!();
        }

        Ok(())
    }

    async fn load(&self, id: &str, request_by: &str) -> larder_shared::Result<ShoppingList> {
        let list = crate::Query(self.write_db.clone())
            .find(id, request_by)
            .await?;

        match list {
            Some(list) => Ok(list),
            None => larder_shared::not_found!("shopping list '{id}'"),
        }
    }
}
