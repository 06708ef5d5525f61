use larder_db::table::{ShoppingList as ListTable, ShoppingListItem as ItemTable};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl<R, P> super::Command<R, P> {
    /// Delete the list together with its items.
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<()> {
        let id = id.into();
        let request_by = request_by.into();

        self.ensure_owner(&id, &request_by).await?;

        let mut tx = self.write_db.begin().await?;

        let statement = sea_query::Query::delete()
            .from_table(ItemTable::Table)
            .and_where(Expr::col(ItemTable::ListId).eq(&id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = sea_query::Query::delete()
            .from_table(ListTable::Table)
            .and_where(Expr::col(ListTable::Id).eq(&id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(list = %id, user = %request_by, "shopping list deleted");

        Ok(())
    }
}
