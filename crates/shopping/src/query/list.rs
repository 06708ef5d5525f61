use larder_db::table::ShoppingList as ListTable;
use sea_query::{Alias, Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShoppingListSummary {
    pub id: String,
    pub name: String,
    pub recipe_ids: Vec<String>,
    pub total_items: u32,
    pub checked_items: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(FromRow)]
struct ShoppingListSummaryRow {
    id: String,
    name: String,
    recipe_ids: Json<Vec<String>>,
    total_items: u32,
    checked_items: u32,
    created_at: u64,
    updated_at: u64,
}

impl From<ShoppingListSummaryRow> for ShoppingListSummary {
    fn from(row: ShoppingListSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            recipe_ids: row.recipe_ids.0,
            total_items: row.total_items,
            checked_items: row.checked_items,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl super::Query {
    /// One page of the user's lists, newest first, with the total number of lists.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<(Vec<ShoppingListSummary>, u64)> {
        let user_id = user_id.into();

        let statement = sea_query::Query::select()
            .columns([
                ListTable::Id,
                ListTable::Name,
                ListTable::RecipeIds,
                ListTable::CreatedAt,
                ListTable::UpdatedAt,
            ])
            .expr_as(
                Expr::cust(
                    "(SELECT COUNT(*) FROM shopping_list_item WHERE list_id = shopping_list.id)",
                ),
                Alias::new("total_items"),
            )
            .expr_as(
                Expr::cust(
                    "(SELECT COUNT(*) FROM shopping_list_item WHERE list_id = shopping_list.id AND checked)",
                ),
                Alias::new("checked_items"),
            )
            .from(ListTable::Table)
            .and_where(Expr::col(ListTable::UserId).eq(&user_id))
            .order_by(ListTable::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .limit(limit)
            .offset(offset)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ShoppingListSummaryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let statement = sea_query::Query::select()
            .expr(Expr::col(ListTable::Id).count())
            .from(ListTable::Table)
            .and_where(Expr::col(ListTable::UserId).eq(&user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok((
            rows.into_iter().map(ShoppingListSummary::from).collect(),
            total.try_into()?,
        ))
    }
}
