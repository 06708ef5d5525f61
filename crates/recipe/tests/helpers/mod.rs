use std::{path::PathBuf, str::FromStr};

use larder_recipe::{Ingredient, RecipeInput};
use larder_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    larder_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn recipe_input(title: impl Into<String>) -> RecipeInput {
    RecipeInput {
        title: title.into(),
        description: None,
        ingredients: vec![
            Ingredient::new("flour", 2.0, "cup"),
            Ingredient {
                name: "eggs".to_owned(),
                amount: Some(3.0),
                ..Default::default()
            },
        ],
        instructions: vec!["Mix".to_owned(), "Bake".to_owned()],
        servings: 4,
        prep_time: Some(15),
        cook_time: Some(30),
        difficulty: None,
        cuisine: None,
        meal_type: None,
        tags: vec![],
    }
}
