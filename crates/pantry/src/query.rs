use larder_db::table::PantryItem as PantryTable;
use larder_shared::pantry::PantryItem;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Clone)]
pub struct Query(pub SqlitePool);

#[derive(FromRow)]
struct PantryItemRow {
    id: String,
    user_id: String,
    name: String,
    quantity: Option<f64>,
    unit: String,
    expires_at: Option<u64>,
    updated_at: u64,
}

impl From<PantryItemRow> for PantryItem {
    fn from(row: PantryItemRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            quantity: row.quantity,
            unit: (!row.unit.is_empty()).then_some(row.unit),
            expires_at: row.expires_at,
            updated_at: row.updated_at,
        }
    }
}

impl Query {
    /// Every pantry entry of the user, ordered by name.
    pub async fn list(&self, user_id: impl Into<String>) -> anyhow::Result<Vec<PantryItem>> {
        let statement = sea_query::Query::select()
            .columns([
                PantryTable::Id,
                PantryTable::UserId,
                PantryTable::Name,
                PantryTable::Quantity,
                PantryTable::Unit,
                PantryTable::ExpiresAt,
                PantryTable::UpdatedAt,
            ])
            .from(PantryTable::Table)
            .and_where(Expr::col(PantryTable::UserId).eq(user_id.into()))
            .order_by(PantryTable::Name, Order::Asc)
            .order_by(PantryTable::Unit, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PantryItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(PantryItem::from).collect())
    }
}
