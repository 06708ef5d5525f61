use axum::{
    Router,
    routing::{delete, get, post, put},
};
use sqlx::SqlitePool;

mod health;
mod pantry;
mod recipes;
mod shopping_lists;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub recipe_command: larder_recipe::Command,
    pub recipe_query: larder_recipe::Query,
    pub pantry_command: larder_pantry::Command,
    pub pantry_query: larder_pantry::Query,
    pub shopping_command: larder_shopping::Command,
    pub shopping_query: larder_shopping::Query,
    pub pool: SqlitePool,
}

impl AppState {
    /// Wire every store on top of the given pools.
    pub fn new(config: crate::config::Config, state: larder_shared::State) -> Self {
        Self {
            config,
            recipe_command: larder_recipe::Command::new(state.clone()),
            recipe_query: larder_recipe::Query(state.read_db.clone()),
            pantry_command: larder_pantry::Command::new(state.clone()),
            pantry_query: larder_pantry::Query(state.read_db.clone()),
            shopping_command: larder_shopping::Command::new(state.clone()),
            shopping_query: larder_shopping::Query(state.read_db.clone()),
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/recipes", get(recipes::list).post(recipes::create))
                .route(
                    "/recipes/{id}",
                    get(recipes::find)
                        .put(recipes::update)
                        .delete(recipes::delete),
                )
                .route("/pantry", get(pantry::list).put(pantry::upsert))
                .route("/pantry/{id}", delete(pantry::delete))
                .route("/shopping-lists", get(shopping_lists::list))
                .route("/shopping-lists/generate", post(shopping_lists::generate))
                .route(
                    "/shopping-lists/{id}",
                    get(shopping_lists::find)
                        .put(shopping_lists::rename)
                        .delete(shopping_lists::delete),
                )
                .route("/shopping-lists/{id}/export", get(shopping_lists::export))
                .route("/shopping-lists/{id}/check", put(shopping_lists::check))
                .route("/shopping-lists/{id}/reset", put(shopping_lists::reset))
                .route(
                    "/shopping-lists/{id}/items",
                    delete(shopping_lists::remove_item),
                )
                .with_state(app_state),
        )
}
