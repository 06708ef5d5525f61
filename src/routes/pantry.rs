use axum::{extract::State, http::StatusCode, response::IntoResponse};
use larder_pantry::{PantryInput, PantryItem};
use serde::Serialize;
use serde_json::json;

use crate::{
    auth::AuthUser,
    error::AppResult,
    extract::{Json, Path},
    routes::AppState,
};

#[derive(Serialize, Debug)]
pub struct PantryItemView {
    #[serde(flatten)]
    pub item: PantryItem,
    pub is_expired: bool,
    pub is_expiring_soon: bool,
}

impl PantryItemView {
    fn new(item: PantryItem, now: u64) -> Self {
        Self {
            is_expired: item.is_expired(now),
            is_expiring_soon: item.is_expiring_soon(now),
            item,
        }
    }
}

pub async fn list(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let now = larder_shared::now();
    let items: Vec<PantryItemView> = app
        .pantry_query
        .list(&user)
        .await?
        .into_iter()
        .map(|item| PantryItemView::new(item, now))
        .collect();

    Ok(Json(json!({ "items": items })))
}

pub async fn upsert(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Json(input): Json<PantryInput>,
) -> AppResult<impl IntoResponse> {
    let id = app.pantry_command.upsert(input, &user).await?;

    let Some(item) = app
        .pantry_query
        .list(&user)
        .await?
        .into_iter()
        .find(|item| item.id == id)
    else {
        return Err(larder_shared::Error::NotFound(format!("pantry item '{id}'")).into());
    };

    Ok(Json(PantryItemView::new(item, larder_shared::now())))
}

pub async fn delete(
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    app.pantry_command.delete(&id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
