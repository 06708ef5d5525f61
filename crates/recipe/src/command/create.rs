use larder_db::table::Recipe;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    pub async fn create(
        &self,
        input: RecipeInput,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<String> {
        input.validate()?;

        let instructions = input.trimmed_instructions();
        if instructions.is_empty() {
            larder_shared::user!("a recipe needs at least one instruction");
        }

        let request_by = request_by.into();
        let id = larder_shared::new_id();
        let now = larder_shared::now();

        let statement = sea_query::Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::UserId,
                Recipe::Title,
                Recipe::Description,
                Recipe::Ingredients,
                Recipe::Instructions,
                Recipe::Servings,
                Recipe::PrepTime,
                Recipe::CookTime,
                Recipe::Difficulty,
                Recipe::Cuisine,
                Recipe::MealType,
                Recipe::Tags,
                Recipe::CreatedAt,
                Recipe::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                request_by.to_owned().into(),
                input.title.trim().to_owned().into(),
                input.description.to_owned().into(),
                serde_json::to_string(&input.ingredients)?.into(),
                serde_json::to_string(&instructions)?.into(),
                input.servings.into(),
                input.prep_time.into(),
                input.cook_time.into(),
                input.difficulty.map(|d| d.to_string()).into(),
                input.cuisine.to_owned().into(),
                input.meal_type.map(|m| m.to_string()).into(),
                serde_json::to_string(&input.normalized_tags())?.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe = %id, user = %request_by, "recipe created");

        Ok(id)
    }
}
