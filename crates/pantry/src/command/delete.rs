use larder_db::table::PantryItem;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<()> {
        let id = id.into();
        let request_by = request_by.into();
        larder_shared::parse_id(&id, "pantry item id")?;

        let statement = sea_query::Query::delete()
            .from_table(PantryItem::Table)
            .and_where(Expr::col(PantryItem::Id).eq(&id))
            .and_where(Expr::col(PantryItem::UserId).eq(&request_by))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            larder_shared::not_found!("pantry item '{id}'");
        }

        tracing::info!(pantry_item = %id, user = %request_by, "pantry item deleted");

        Ok(())
    }
}
