use axum::{extract::State, http::StatusCode, response::IntoResponse};
use larder_recipe::{Difficulty, MealType, Recipe, RecipeFilter, RecipeInput};
use serde::Deserialize;
use serde_json::json;

use crate::{
    auth::AuthUser,
    error::AppResult,
    extract::{Json, Path, Query},
    routes::AppState,
};

/// Query string of `GET /recipes`, `tags` being comma separated.
#[derive(Deserialize, Default, Debug)]
pub struct ListParams {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub meal_type: Option<MealType>,
    pub max_prep_time: Option<u16>,
    pub tags: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl From<ListParams> for RecipeFilter {
    fn from(params: ListParams) -> Self {
        let tags = params
            .tags
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            query: params.query,
            cuisine: params.cuisine,
            difficulty: params.difficulty,
            meal_type: params.meal_type,
            max_prep_time: params.max_prep_time,
            tags,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

async fn find_or_not_found(app: &AppState, id: &str) -> AppResult<Recipe> {
    match app.recipe_query.find(id).await? {
        Some(recipe) => Ok(recipe),
        None => Err(larder_shared::Error::NotFound(format!("recipe '{id}'")).into()),
    }
}

pub async fn create(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    let id = app.recipe_command.create(input, &user).await?;
    tracing::info!(recipe = %id, user = %user, "recipe created");

    let recipe = find_or_not_found(&app, &id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn list(
    _user: AuthUser,
    State(app): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let recipes = app.recipe_query.filter(params.into()).await?;

    Ok(Json(json!({ "recipes": recipes })))
}

pub async fn find(
    _user: AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let recipe = find_or_not_found(&app, &id).await?;

    Ok(Json(recipe))
}

pub async fn update(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    app.recipe_command.update(&id, input, &user).await?;
    let recipe = find_or_not_found(&app, &id).await?;

    Ok(Json(recipe))
}

pub async fn delete(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    app.recipe_command.delete(&id, &user).await?;
    tracing::info!(recipe = %id, user = %user, "recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}
