use larder_db::table::{ShoppingList as ListTable, ShoppingListItem as ItemTable};
use larder_shared::recipe::not_blank;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::{ShoppingList, normalize::normalize_name};

/// Identifies list items by ingredient, optionally narrowed to one contributing recipe.
///
/// `ingredient` matches the normalized item name or the exact item key, so
/// "Tomatoes" and "tomato|count" both reach the tomato line.
#[derive(Validate, Deserialize, Clone, Debug)]
pub struct ItemKey {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub ingredient: String,
    pub recipe_id: Option<String>,
}

impl ItemKey {
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            recipe_id: None,
        }
    }

    pub fn recipe(mut self, recipe_id: impl Into<String>) -> Self {
        self.recipe_id = Some(recipe_id.into());
        self
    }

    fn conditions(&self, list_id: &str) -> Vec<Expr> {
        let mut conditions = vec![
            Expr::col(ItemTable::ListId).eq(list_id),
            Expr::col(ItemTable::Name)
                .eq(normalize_name(&self.ingredient))
                .or(Expr::col(ItemTable::Key).eq(self.ingredient.trim())),
        ];

        if let Some(recipe_id) = &self.recipe_id {
            conditions.push(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM json_each(recipe_ids) WHERE value = ?)",
                [recipe_id.trim().to_owned()],
            ));
        }

        conditions
    }
}

impl<R, P> super::Command<R, P> {
    /// Set the checked flag of matching items, or flip it when `checked` is `None`.
    ///
    /// Each matching row is updated in place, other items of the list are left untouched.
    pub async fn check(
        &self,
        id: impl Into<String>,
        key: ItemKey,
        checked: Option<bool>,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<ShoppingList> {
        let id = id.into();
        let request_by = request_by.into();
        key.validate()?;

        self.ensure_owner(&id, &request_by).await?;

        let value = match checked {
            Some(checked) => Expr::val(checked),
            None => Expr::col(ItemTable::Checked).not(),
        };

        let mut statement = sea_query::Query::update()
            .table(ItemTable::Table)
            .value(ItemTable::Checked, value)
            .to_owned();

        for condition in key.conditions(&id) {
            statement.and_where(condition);
        }

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            larder_shared::not_found!("item '{}' in shopping list '{id}'", key.ingredient);
        }

        touch(&mut tx, &id).await?;
        tx.commit().await?;

        tracing::info!(list = %id, user = %request_by, ingredient = %key.ingredient, ?checked, "shopping item checked");

        self.load(&id, &request_by).await
    }

    /// Drop matching items from the list.
    pub async fn remove_item(
        &self,
        id: impl Into<String>,
        key: ItemKey,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<ShoppingList> {
        let id = id.into();
        let request_by = request_by.into();
        key.validate()?;

        self.ensure_owner(&id, &request_by).await?;

        let mut statement = sea_query::Query::delete()
            .from_table(ItemTable::Table)
            .to_owned();

        for condition in key.conditions(&id) {
            statement.and_where(condition);
        }

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            larder_shared::not_found!("item '{}' in shopping list '{id}'", key.ingredient);
        }

        touch(&mut tx, &id).await?;
        tx.commit().await?;

        tracing::info!(list = %id, user = %request_by, ingredient = %key.ingredient, "shopping item removed");

        self.load(&id, &request_by).await
    }
}

pub(super) async fn touch(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: &str,
) -> larder_shared::Result<()> {
    let statement = sea_query::Query::update()
        .table(ListTable::Table)
        .value(ListTable::UpdatedAt, larder_shared::now())
        .and_where(Expr::col(ListTable::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut **tx).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ItemKey;

    #[test]
    fn conditions_narrow_by_recipe() {
        let key = ItemKey::new("Tomatoes");
        assert_eq!(key.conditions("list").len(), 2);

        let key = key.recipe("01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert_eq!(key.conditions("list").len(), 3);
    }
}
