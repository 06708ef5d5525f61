use larder_db::table::ShoppingListItem as ItemTable;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::ShoppingList;

impl<R, P> super::Command<R, P> {
    /// Uncheck every item of the list.
    pub async fn reset(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<ShoppingList> {
        let id = id.into();
        let request_by = request_by.into();

        self.ensure_owner(&id, &request_by).await?;

        let statement = sea_query::Query::update()
            .table(ItemTable::Table)
            .value(ItemTable::Checked, false)
            .and_where(Expr::col(ItemTable::ListId).eq(&id))
            .and_where(Expr::col(ItemTable::Checked).eq(true))
            .to_owned();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        super::check::touch(&mut tx, &id).await?;
        tx.commit().await?;

        tracing::info!(list = %id, user = %request_by, "shopping list reset");

        self.load(&id, &request_by).await
    }
}
