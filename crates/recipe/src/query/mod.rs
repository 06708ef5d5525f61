mod filter;

pub use filter::*;

use larder_db::table::Recipe as RecipeTable;
use larder_shared::recipe::{Difficulty, Ingredient, MealType};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow, types::Json, types::Text};

#[derive(Clone)]
pub struct Query(pub SqlitePool);

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub servings: u16,
    pub prep_time: Option<u16>,
    pub cook_time: Option<u16>,
    pub difficulty: Option<Difficulty>,
    pub cuisine: Option<String>,
    pub meal_type: Option<MealType>,
    pub tags: Vec<String>,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    ingredients: Json<Vec<Ingredient>>,
    instructions: Json<Vec<String>>,
    servings: u16,
    prep_time: Option<u16>,
    cook_time: Option<u16>,
    difficulty: Option<Text<Difficulty>>,
    cuisine: Option<String>,
    meal_type: Option<Text<MealType>>,
    tags: Json<Vec<String>>,
    created_at: u64,
    updated_at: u64,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            ingredients: row.ingredients.0,
            instructions: row.instructions.0,
            servings: row.servings,
            prep_time: row.prep_time,
            cook_time: row.cook_time,
            difficulty: row.difficulty.map(|d| d.0),
            cuisine: row.cuisine,
            meal_type: row.meal_type.map(|m| m.0),
            tags: row.tags.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<Recipe>> {
        let statement = sea_query::Query::select()
            .columns([
                RecipeTable::Id,
                RecipeTable::UserId,
                RecipeTable::Title,
                RecipeTable::Description,
                RecipeTable::Ingredients,
                RecipeTable::Instructions,
                RecipeTable::Servings,
                RecipeTable::PrepTime,
                RecipeTable::CookTime,
                RecipeTable::Difficulty,
                RecipeTable::Cuisine,
                RecipeTable::MealType,
                RecipeTable::Tags,
                RecipeTable::CreatedAt,
                RecipeTable::UpdatedAt,
            ])
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Recipe::from))
    }
}
