use larder_db::table::ShoppingList as ListTable;
use larder_shared::recipe::not_blank;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::ShoppingList;

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct RenameInput {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
}

impl<R, P> super::Command<R, P> {
    pub async fn rename(
        &self,
        id: impl Into<String>,
        input: RenameInput,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<ShoppingList> {
        let id = id.into();
        let request_by = request_by.into();
        input.validate()?;

        self.ensure_owner(&id, &request_by).await?;

        let statement = sea_query::Query::update()
            .table(ListTable::Table)
            .values([
                (ListTable::Name, input.name.trim().to_owned().into()),
                (ListTable::UpdatedAt, larder_shared::now().into()),
            ])
            .and_where(Expr::col(ListTable::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(list = %id, user = %request_by, "shopping list renamed");

        self.load(&id, &request_by).await
    }
}
