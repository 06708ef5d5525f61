use larder_db::table::Recipe as RecipeTable;
use larder_shared::recipe::{Difficulty, MealType};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json, types::Text};

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Recognized search options for the recipe list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeFilter {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub meal_type: Option<MealType>,
    pub max_prep_time: Option<u16>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub servings: u16,
    pub prep_time: Option<u16>,
    pub cook_time: Option<u16>,
    pub difficulty: Option<Difficulty>,
    pub cuisine: Option<String>,
    pub meal_type: Option<MealType>,
    pub tags: Vec<String>,
    pub created_at: u64,
}

#[derive(FromRow)]
struct RecipeSummaryRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    servings: u16,
    prep_time: Option<u16>,
    cook_time: Option<u16>,
    difficulty: Option<Text<Difficulty>>,
    cuisine: Option<String>,
    meal_type: Option<Text<MealType>>,
    tags: Json<Vec<String>>,
    created_at: u64,
}

impl From<RecipeSummaryRow> for RecipeSummary {
    fn from(row: RecipeSummaryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            servings: row.servings,
            prep_time: row.prep_time,
            cook_time: row.cook_time,
            difficulty: row.difficulty.map(|d| d.0),
            cuisine: row.cuisine,
            meal_type: row.meal_type.map(|m| m.0),
            tags: row.tags.0,
            created_at: row.created_at,
        }
    }
}

/// Escape LIKE wildcards so user input only matches literally.
fn like_pattern(value: &str) -> String {
    let escaped = value
        .trim()
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}

impl super::Query {
    pub async fn filter(&self, filter: RecipeFilter) -> anyhow::Result<Vec<RecipeSummary>> {
        let mut statement = sea_query::Query::select()
            .columns([
                RecipeTable::Id,
                RecipeTable::UserId,
                RecipeTable::Title,
                RecipeTable::Description,
                RecipeTable::Servings,
                RecipeTable::PrepTime,
                RecipeTable::CookTime,
                RecipeTable::Difficulty,
                RecipeTable::Cuisine,
                RecipeTable::MealType,
                RecipeTable::Tags,
                RecipeTable::CreatedAt,
            ])
            .from(RecipeTable::Table)
            .to_owned();

        if let Some(query) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = like_pattern(query);
            statement.and_where(Expr::cust_with_values(
                r"(lower(title) LIKE ? ESCAPE '\' OR lower(coalesce(description, '')) LIKE ? ESCAPE '\' OR EXISTS (SELECT 1 FROM json_each(ingredients) WHERE lower(json_extract(value, '$.name')) LIKE ? ESCAPE '\'))",
                [pattern.to_owned(), pattern.to_owned(), pattern],
            ));
        }

        if let Some(cuisine) = filter.cuisine.as_deref().filter(|c| !c.trim().is_empty()) {
            statement.and_where(Expr::cust_with_values(
                "lower(cuisine) = ?",
                [cuisine.trim().to_lowercase()],
            ));
        }

        if let Some(difficulty) = filter.difficulty {
            statement.and_where(Expr::col(RecipeTable::Difficulty).eq(difficulty.to_string()));
        }

        if let Some(meal_type) = filter.meal_type {
            statement.and_where(Expr::col(RecipeTable::MealType).eq(meal_type.to_string()));
        }

        if let Some(max_prep_time) = filter.max_prep_time {
            statement.and_where(Expr::col(RecipeTable::PrepTime).lte(max_prep_time));
        }

        let mut tags = filter
            .tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        tags.sort();
        tags.dedup();

        if !tags.is_empty() {
            let in_clause = tags.iter().map(|_| "?").collect::<Vec<_>>().join(", ");

            statement.and_where(Expr::cust_with_values(
                format!(
                    "(SELECT COUNT(DISTINCT value) FROM json_each(tags) WHERE value IN ({})) = ?",
                    in_clause
                ),
                tags.iter()
                    .map(|t| sea_query::Value::from(t.to_owned()))
                    .chain(std::iter::once(sea_query::Value::from(tags.len() as i32)))
                    .collect::<Vec<_>>(),
            ));
        }

        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        statement
            .order_by(RecipeTable::CreatedAt, Order::Desc)
            .order_by(RecipeTable::Id, Order::Desc)
            .limit(limit)
            .offset(filter.offset.unwrap_or(0));

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeSummaryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(RecipeSummary::from).collect())
    }
}
