use larder_db::table::Recipe;
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
        larder_shared::parse_id(&id, "recipe id")?;

        self.ensure_owner(&id, &request_by).await?;

        let statement = sea_query::Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe = %id, user = %request_by, "recipe deleted");

        Ok(())
    }
}
