mod list;

pub use list::*;

use larder_db::table::{ShoppingList as ListTable, ShoppingListItem as ItemTable};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow, types::Json, types::Text};

use crate::{
    Category, ShoppingItem, quantity::display_quantity, substitution::substitutions,
};

#[derive(Clone)]
pub struct Query(pub SqlitePool);

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShoppingList {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub items: Vec<ShoppingItem>,
    pub recipe_ids: Vec<String>,
    pub exclude_pantry: bool,
    pub group_by_category: bool,
    pub total_items: usize,
    pub checked_items: usize,
    pub categories: Vec<Category>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl ShoppingList {
    pub(crate) fn from_parts(row: ShoppingListRow, items: Vec<ShoppingItem>) -> Self {
        let checked_items = items.iter().filter(|item| item.checked).count();
        let mut categories = items
            .iter()
            .filter_map(|item| item.category)
            .collect::<Vec<_>>();
        categories.sort();
        categories.dedup();

        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            total_items: items.len(),
            checked_items,
            categories,
            items,
            recipe_ids: row.recipe_ids.0,
            exclude_pantry: row.exclude_pantry,
            group_by_category: row.group_by_category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct ShoppingListRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub recipe_ids: Json<Vec<String>>,
    pub exclude_pantry: bool,
    pub group_by_category: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(FromRow)]
struct ShoppingItemRow {
    key: String,
    name: String,
    quantity: Option<f64>,
    unit: Option<String>,
    category: Option<Text<Category>>,
    notes: Option<String>,
    recipe_ids: Json<Vec<String>>,
    checked: bool,
}

impl From<ShoppingItemRow> for ShoppingItem {
    fn from(row: ShoppingItemRow) -> Self {
        Self {
            key: row.key,
            substitutions: substitutions(&row.name),
            name: row.name,
            display_quantity: row.quantity.and_then(display_quantity),
            quantity: row.quantity,
            unit: row.unit,
            category: row.category.map(|c| c.0),
            notes: row.notes,
            recipe_ids: row.recipe_ids.0,
            checked: row.checked,
        }
    }
}

impl Query {
    /// The list with its items, `None` when missing or owned by someone else.
    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Option<ShoppingList>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns([
                ListTable::Id,
                ListTable::UserId,
                ListTable::Name,
                ListTable::RecipeIds,
                ListTable::ExcludePantry,
                ListTable::GroupByCategory,
                ListTable::CreatedAt,
                ListTable::UpdatedAt,
            ])
            .from(ListTable::Table)
            .and_where(Expr::col(ListTable::Id).eq(&id))
            .and_where(Expr::col(ListTable::UserId).eq(user_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, ShoppingListRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            return Ok(None);
        };

        let items = self.items(&id).await?;

        Ok(Some(ShoppingList::from_parts(row, items)))
    }

    async fn items(&self, list_id: &str) -> anyhow::Result<Vec<ShoppingItem>> {
        let statement = sea_query::Query::select()
            .columns([
                ItemTable::Key,
                ItemTable::Name,
                ItemTable::Quantity,
                ItemTable::Unit,
                ItemTable::Category,
                ItemTable::Notes,
                ItemTable::RecipeIds,
                ItemTable::Checked,
            ])
            .from(ItemTable::Table)
            .and_where(Expr::col(ItemTable::ListId).eq(list_id))
            .order_by(ItemTable::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(ShoppingItem::from).collect())
    }
}
