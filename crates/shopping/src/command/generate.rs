use std::collections::HashMap;

use fraction::Fraction;
use larder_db::table::{ShoppingList as ListTable, ShoppingListItem as ItemTable};
use larder_shared::recipe::{Ingredient, not_blank};
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::{Aggregator, PantrySource, RecipeSource, ShoppingList, query::ShoppingListRow};

pub const DEFAULT_NAME: &str = "Shopping list";

fn default_name() -> String {
    DEFAULT_NAME.to_owned()
}

fn default_group_by_category() -> bool {
    true
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct GenerateInput {
    #[validate(length(max = 50))]
    pub recipe_ids: Vec<String>,
    #[serde(default)]
    pub exclude_pantry: bool,
    #[serde(default = "default_group_by_category")]
    pub group_by_category: bool,
    #[serde(default = "default_name")]
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(nested)]
    pub custom_items: Vec<Ingredient>,
    #[validate(range(min = 1, max = 100))]
    pub servings: Option<u16>,
}

impl GenerateInput {
    pub fn new(recipe_ids: Vec<String>) -> Self {
        Self {
            recipe_ids,
            exclude_pantry: false,
            group_by_category: default_group_by_category(),
            name: default_name(),
            custom_items: vec![],
            servings: None,
        }
    }
}

impl<R: RecipeSource, P: PantrySource> super::Command<R, P> {
    /// Build a consolidated list from the given recipes and persist it.
    ///
    /// Every recipe must exist, otherwise nothing is saved.
    pub async fn generate(
        &self,
        input: GenerateInput,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<ShoppingList> {
        if input.recipe_ids.is_empty() {
            larder_shared::user!("at least one recipe is required to generate a shopping list");
        }

        input.validate()?;

        let mut distinct_ids: Vec<&str> = Vec::with_capacity(input.recipe_ids.len());
        for id in &input.recipe_ids {
            larder_shared::parse_id(id, "recipe id")?;
            if !distinct_ids.contains(&id.as_str()) {
                distinct_ids.push(id.as_str());
            }
        }

        let request_by = request_by.into();

        let recipes = futures::future::try_join_all(
            distinct_ids.iter().map(|id| self.recipes.get_recipe(id)),
        );
        let pantry = async {
            if input.exclude_pantry {
                self.pantry.get_pantry(&request_by).await
            } else {
                Ok(vec![])
            }
        };
        let (recipes, pantry) = futures::try_join!(recipes, pantry)?;

        let mut found = HashMap::with_capacity(distinct_ids.len());
        for (id, recipe) in distinct_ids.iter().zip(recipes) {
            let Some(recipe) = recipe else {
                larder_shared::not_found!("recipe '{id}'");
            };

            found.insert(*id, recipe);
        }

        let now = larder_shared::now();
        let mut aggregator = Aggregator::new();

        for id in &input.recipe_ids {
            let Some(recipe) = found.get(id.as_str()) else {
                continue;
            };

            let scale = match input.servings {
                Some(servings) => Fraction::new(
                    u64::from(servings),
                    u64::from(recipe.servings.max(1)),
                ),
                None => Fraction::new(1u64, 1u64),
            };

            aggregator.add_recipe(id, &recipe.ingredients, scale);
        }

        for item in &input.custom_items {
            aggregator.add(None, item, 1.0);
        }

        if input.exclude_pantry {
            aggregator.subtract_pantry(&pantry, now);
        }

        let items = aggregator.finish(input.group_by_category);

        let id = larder_shared::new_id();
        let name = input.name.trim().to_owned();
        let recipe_ids = distinct_ids
            .iter()
            .map(|id| (*id).to_owned())
            .collect::<Vec<_>>();

        let mut tx = self.write_db.begin().await?;

        let statement = sea_query::Query::insert()
            .into_table(ListTable::Table)
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
            .values_panic([
                id.to_owned().into(),
                request_by.to_owned().into(),
                name.to_owned().into(),
                serde_json::to_string(&recipe_ids)?.into(),
                input.exclude_pantry.into(),
                input.group_by_category.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !items.is_empty() {
            let mut statement = sea_query::Query::insert()
                .into_table(ItemTable::Table)
                .columns([
                    ItemTable::ListId,
                    ItemTable::Key,
                    ItemTable::Position,
                    ItemTable::Name,
                    ItemTable::Quantity,
                    ItemTable::Unit,
                    ItemTable::Category,
                    ItemTable::Notes,
                    ItemTable::RecipeIds,
                    ItemTable::Checked,
                ])
                .to_owned();

            for (position, item) in items.iter().enumerate() {
                statement.values_panic([
                    id.to_owned().into(),
                    item.key.to_owned().into(),
                    u32::try_from(position)?.into(),
                    item.name.to_owned().into(),
                    item.quantity.into(),
                    item.unit.to_owned().into(),
                    item.category.map(|c| c.to_string()).into(),
                    item.notes.to_owned().into(),
                    serde_json::to_string(&item.recipe_ids)?.into(),
                    false.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            list = %id,
            user = %request_by,
            recipes = recipe_ids.len(),
            items = items.len(),
            "shopping list generated"
        );

        let row = ShoppingListRow {
            id,
            user_id: request_by,
            name,
            recipe_ids: sqlx::types::Json(recipe_ids),
            exclude_pantry: input.exclude_pantry,
            group_by_category: input.group_by_category,
            created_at: now,
            updated_at: now,
        };

        Ok(ShoppingList::from_parts(row, items))
    }
}
