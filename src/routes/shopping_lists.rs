use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use larder_shopping::{ExportFormat, GenerateInput, ItemKey, RenameInput, ShoppingListSummary};
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthUser,
    error::AppResult,
    extract::{Json, Path, Query},
    routes::AppState,
};

#[derive(Deserialize, Debug, Default)]
pub struct PageParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Debug)]
pub struct ListResponse {
    pub shopping_lists: Vec<ShoppingListSummary>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub has_more: bool,
}

#[derive(Deserialize, Debug)]
pub struct CheckBody {
    #[serde(flatten)]
    pub key: ItemKey,
    pub checked: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ExportParams {
    #[serde(default)]
    pub format: ExportFormat,
}

pub async fn generate(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Json(input): Json<GenerateInput>,
) -> AppResult<impl IntoResponse> {
    let list = app.shopping_command.generate(input, &user).await?;

    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn list(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let limit = app.config.shopping.page_size(params.limit);
    let offset = params.offset.unwrap_or_default();
    let (shopping_lists, total) = app.shopping_query.list(&user, limit, offset).await?;
    let has_more = offset + (shopping_lists.len() as u64) < total;

    Ok(Json(ListResponse {
        shopping_lists,
        total,
        limit,
        offset,
        has_more,
    }))
}

pub async fn find(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    match app.shopping_query.find(&id, &user).await? {
        Some(list) => Ok(Json(list)),
        None => Err(larder_shared::Error::NotFound(format!("shopping list '{id}'")).into()),
    }
}

pub async fn rename(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(input): Json<RenameInput>,
) -> AppResult<impl IntoResponse> {
    let list = app.shopping_command.rename(&id, input, &user).await?;

    Ok(Json(list))
}

pub async fn export(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let Some(list) = app.shopping_query.find(&id, &user).await? else {
        return Err(larder_shared::Error::NotFound(format!("shopping list '{id}'")).into());
    };

    let body = list.export(params.format)?;
    let disposition = format!(
        "attachment; filename=\"shopping-list-{}.{}\"",
        list.id,
        params.format.extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, params.format.content_type().to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

pub async fn check(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(body): Json<CheckBody>,
) -> AppResult<impl IntoResponse> {
    let list = app
        .shopping_command
        .check(&id, body.key, body.checked, &user)
        .await?;

    Ok(Json(list))
}

pub async fn reset(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let list = app.shopping_command.reset(&id, &user).await?;

    Ok(Json(list))
}

pub async fn remove_item(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(key): Json<ItemKey>,
) -> AppResult<impl IntoResponse> {
    let list = app.shopping_command.remove_item(&id, key, &user).await?;

    Ok(Json(list))
}

pub async fn delete(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    app.shopping_command.delete(&id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
