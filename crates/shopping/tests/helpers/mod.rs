use std::{path::PathBuf, str::FromStr};

use larder_recipe::{Ingredient, RecipeInput};
use larder_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    larder_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

pub fn ingredient(name: &str, amount: Option<f64>, unit: Option<&str>) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        amount,
        unit: unit.map(str::to_owned),
        notes: None,
    }
}

pub async fn create_recipe(
    state: &State,
    title: &str,
    servings: u16,
    ingredients: Vec<Ingredient>,
) -> anyhow::Result<String> {
    let input = RecipeInput {
        title: title.to_owned(),
        description: None,
        ingredients,
        instructions: vec!["Cook".to_owned()],
        servings,
        prep_time: None,
        cook_time: None,
        difficulty: None,
        cuisine: None,
        meal_type: None,
        tags: vec![],
    };

    Ok(larder_recipe::Command::new(state.clone())
        .create(input, "chef")
        .await?)
}
