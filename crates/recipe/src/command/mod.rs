mod create;
mod delete;
mod update;

use std::ops::Deref;

use larder_db::table::Recipe;
use larder_shared::recipe::{Difficulty, Ingredient, MealType, not_blank};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

#[derive(Clone)]
pub struct Command {
    state: larder_shared::State,
}

impl Deref for Command {
    type Target = larder_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: larder_shared::State) -> Self {
        Self { state }
    }

    /// Make sure the recipe exists and belongs to `request_by`.
    async fn ensure_owner(&self, id: &str, request_by: &str) -> larder_shared::Result<()> {
        let statement = sea_query::Query::select()
            .column(Recipe::UserId)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let owner = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        let Some((owner,)) = owner else {
            larder_shared::not_found!("recipe '{id}'");
        };

        if owner != request_by {
            larder_shared::forbidden!();
        }

        Ok(())
    }
}

fn default_servings() -> u16 {
    4
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<Ingredient>,
    #[validate(length(min = 1))]
    pub instructions: Vec<String>,
    #[serde(default = "default_servings")]
    #[validate(range(min = 1, max = 100))]
    pub servings: u16,
    #[validate(range(max = 1440))]
    pub prep_time: Option<u16>,
    #[validate(range(max = 1440))]
    pub cook_time: Option<u16>,
    pub difficulty: Option<Difficulty>,
    #[validate(length(max = 50))]
    pub cuisine: Option<String>,
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeInput {
    /// Trimmed, lowercased, deduplicated tags in their original order.
    pub(crate) fn normalized_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        tags
    }

    pub(crate) fn trimmed_instructions(&self) -> Vec<String> {
        self.instructions
            .iter()
            .map(|step| step.trim().to_owned())
            .filter(|step| !step.is_empty())
            .collect()
    }
}
