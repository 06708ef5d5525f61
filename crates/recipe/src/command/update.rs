use larder_db::table::Recipe;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: RecipeInput,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<()> {
        let id = id.into();
        let request_by = request_by.into();
        larder_shared::parse_id(&id, "recipe id")?;
        input.validate()?;

        let instructions = input.trimmed_instructions();
        if instructions.is_empty() {
            larder_shared::user!("a recipe needs at least one instruction");
        }

        self.ensure_owner(&id, &request_by).await?;

        let statement = sea_query::Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Title, input.title.trim().to_owned().into()),
                (Recipe::Description, input.description.to_owned().into()),
                (
                    Recipe::Ingredients,
                    serde_json::to_string(&input.ingredients)?.into(),
                ),
                (
                    Recipe::Instructions,
                    serde_json::to_string(&instructions)?.into(),
                ),
                (Recipe::Servings, input.servings.into()),
                (Recipe::PrepTime, input.prep_time.into()),
                (Recipe::CookTime, input.cook_time.into()),
                (
                    Recipe::Difficulty,
                    input.difficulty.map(|d| d.to_string()).into(),
                ),
                (Recipe::Cuisine, input.cuisine.to_owned().into()),
                (
                    Recipe::MealType,
                    input.meal_type.map(|m| m.to_string()).into(),
                ),
                (
                    Recipe::Tags,
                    serde_json::to_string(&input.normalized_tags())?.into(),
                ),
                (Recipe::UpdatedAt, larder_shared::now().into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe = %id, user = %request_by, "recipe updated");

        Ok(())
    }
}
