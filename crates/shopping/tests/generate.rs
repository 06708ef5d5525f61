use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use larder_pantry::PantryInput;
use larder_recipe::Recipe;
use larder_shared::{Error, pantry::PantryItem};
use larder_shopping::{Category, Command, GenerateInput, PantrySource, Query, RecipeSource};
use temp_dir::TempDir;

mod helpers;

use helpers::ingredient;

#[tokio::test]
async fn test_merges_same_ingredient_across_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let pancakes = helpers::create_recipe(
        &state,
        "Pancakes",
        4,
        vec![
            ingredient("Flour", Some(2.0), Some("cups")),
            ingredient("eggs", Some(2.0), None),
            ingredient("milk", Some(1.0), Some("cup")),
        ],
    )
    .await?;
    let bread = helpers::create_recipe(
        &state,
        "Bread",
        4,
        vec![
            ingredient("flour", Some(2.0), Some("cup")),
            ingredient("Egg", Some(1.0), None),
            ingredient("milk", Some(100.0), Some("ml")),
        ],
    )
    .await?;

    let command = Command::new(state.clone());
    let list = command
        .generate(
            GenerateInput::new(vec![pancakes.to_owned(), bread.to_owned()]),
            "alice",
        )
        .await?;

    assert_eq!(list.name, "Shopping list");
    assert_eq!(list.total_items, 3);
    assert_eq!(list.checked_items, 0);
    assert_eq!(list.recipe_ids, vec![pancakes.to_owned(), bread.to_owned()]);
    assert_eq!(list.categories, vec![Category::Dairy, Category::Baking]);

    let flour = list.items.iter().find(|i| i.name == "flour").expect("flour");
    assert_eq!(flour.quantity, Some(4.0));
    assert_eq!(flour.unit.as_deref(), Some("cup"));
    assert_eq!(flour.recipe_ids, vec![pancakes.to_owned(), bread.to_owned()]);

    let egg = list.items.iter().find(|i| i.name == "egg").expect("egg");
    assert_eq!(egg.quantity, Some(3.0));
    assert_eq!(egg.unit, None);

    let milk = list.items.iter().find(|i| i.name == "milk").expect("milk");
    assert_eq!(milk.quantity, Some(340.0));
    assert_eq!(milk.unit.as_deref(), Some("ml"));

    assert!(list.items.iter().all(|i| !i.checked));

    let stored = Query(state.read_db.clone())
        .find(&list.id, "alice")
        .await?
        .expect("list persisted");
    assert_eq!(stored.items, list.items);

    Ok(())
}

#[tokio::test]
async fn test_generation_is_deterministic() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let curry = helpers::create_recipe(
        &state,
        "Curry",
        2,
        vec![
            ingredient("onions", Some(2.0), None),
            ingredient("onion", Some(1.0), Some("cup")),
            ingredient("chicken thighs", Some(500.0), Some("g")),
            ingredient("coconut milk", Some(400.0), Some("ml")),
            ingredient("cumin", Some(1.0), Some("tsp")),
            ingredient("rice", Some(1.0), Some("cup")),
            ingredient("cilantro", None, None),
        ],
    )
    .await?;
    let salad = helpers::create_recipe(
        &state,
        "Salad",
        2,
        vec![
            ingredient("tomatoes", Some(3.0), None),
            ingredient("onion", Some(0.5), None),
            ingredient("olive oil", Some(2.0), Some("tbsp")),
            ingredient("salt", None, None),
        ],
    )
    .await?;

    let command = Command::new(state.clone());
    let input = GenerateInput::new(vec![curry.to_owned(), salad.to_owned()]);

    let first = command.generate(input.clone(), "alice").await?;
    let second = command.generate(input, "alice").await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.items, second.items);

    let categories = first
        .items
        .iter()
        .map(|i| i.category.unwrap_or(Category::Other))
        .collect::<Vec<_>>();
    let mut sorted = categories.to_owned();
    sorted.sort();
    assert_eq!(categories, sorted);

    let onions = first
        .items
        .iter()
        .filter(|i| i.name == "onion")
        .collect::<Vec<_>>();
    assert_eq!(onions.len(), 2);
    assert_eq!(onions[0].key, "onion|volume");
    assert_eq!(onions[1].key, "onion|count");
    assert_eq!(onions[1].quantity, Some(2.5));

    Ok(())
}

#[tokio::test]
async fn test_exclude_pantry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let recipe = helpers::create_recipe(
        &state,
        "Risotto",
        4,
        vec![
            ingredient("rice", Some(300.0), Some("g")),
            ingredient("butter", Some(50.0), Some("g")),
            ingredient("parmesan", Some(1.0), Some("cup")),
            ingredient("salt", None, None),
        ],
    )
    .await?;

    let pantry = larder_pantry::Command::new(state.clone());
    for (name, quantity, unit) in [
        ("rice", Some(1.0), Some("kg")),
        ("butter", Some(20.0), Some("g")),
        ("parmesan", Some(100.0), Some("g")),
        ("salt", None, None),
    ] {
        pantry
            .upsert(
                PantryInput {
                    name: name.to_owned(),
                    quantity,
                    unit: unit.map(str::to_owned),
                    expires_at: None,
                },
                "alice",
            )
            .await?;
    }

    let command = Command::new(state.clone());

    let mut input = GenerateInput::new(vec![recipe.to_owned()]);
    input.exclude_pantry = true;
    let list = command.generate(input, "alice").await?;

    let names = list.items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["butter", "parmesan"]);
    assert_eq!(list.items[0].quantity, Some(30.0));
    assert_eq!(list.items[0].unit.as_deref(), Some("g"));
    assert_eq!(list.items[1].quantity, Some(1.0));
    assert_eq!(list.items[1].unit.as_deref(), Some("cup"));
    assert!(list.exclude_pantry);

    // another user's pantry never applies
    let mut input = GenerateInput::new(vec![recipe.to_owned()]);
    input.exclude_pantry = true;
    let list = command.generate(input, "bob").await?;
    assert_eq!(list.total_items, 4);

    Ok(())
}

#[tokio::test]
async fn test_servings_duplicates_and_custom_items() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let soup = helpers::create_recipe(
        &state,
        "Soup",
        2,
        vec![ingredient("carrots", Some(3.0), None)],
    )
    .await?;

    let command = Command::new(state.clone());

    let mut input = GenerateInput::new(vec![soup.to_owned(), soup.to_owned()]);
    input.name = "  Weekend  ".to_owned();
    input.group_by_category = false;
    input.servings = Some(4);
    input.custom_items = vec![
        ingredient("paper towels", Some(1.0), Some("roll")),
        ingredient("carrot", Some(1.0), None),
    ];

    let list = command.generate(input, "alice").await?;

    assert_eq!(list.name, "Weekend");
    assert_eq!(list.recipe_ids, vec![soup.to_owned()]);
    assert!(list.categories.is_empty());

    assert_eq!(list.items[0].name, "carrot");
    assert_eq!(list.items[0].quantity, Some(13.0));
    assert_eq!(list.items[0].recipe_ids, vec![soup.to_owned()]);
    assert_eq!(list.items[0].category, None);

    assert_eq!(list.items[1].name, "paper towel");
    assert_eq!(list.items[1].unit.as_deref(), Some("roll"));
    assert!(list.items[1].recipe_ids.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_invalid_input_creates_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let recipe = helpers::create_recipe(
        &state,
        "Toast",
        1,
        vec![ingredient("bread", Some(2.0), Some("slice"))],
    )
    .await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    assert!(matches!(
        command.generate(GenerateInput::new(vec![]), "alice").await,
        Err(Error::User(_))
    ));

    assert!(matches!(
        command
            .generate(GenerateInput::new(vec!["not-a-ulid".to_owned()]), "alice")
            .await,
        Err(Error::User(_))
    ));

    let missing = GenerateInput::new(vec![
        recipe.to_owned(),
        "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_owned(),
    ]);
    assert!(matches!(
        command.generate(missing, "alice").await,
        Err(Error::NotFound(_))
    ));

    let mut blank = GenerateInput::new(vec![recipe.to_owned()]);
    blank.name = "   ".to_owned();
    assert!(matches!(
        command.generate(blank, "alice").await,
        Err(Error::Validate(_))
    ));

    let (lists, total) = query.list("alice", 20, 0).await?;
    assert!(lists.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

#[derive(Default, Clone)]
struct CountingRecipes {
    fetched: Arc<AtomicUsize>,
}

#[async_trait]
impl RecipeSource for CountingRecipes {
    async fn get_recipe(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        self.fetched.fetch_add(1, Ordering::SeqCst);

        Ok(Some(Recipe {
            id: id.to_owned(),
            user_id: "chef".to_owned(),
            title: "Omelette".to_owned(),
            description: None,
            ingredients: vec![ingredient("eggs", Some(2.0), None)],
            instructions: vec!["Whisk".to_owned()],
            servings: 1,
            prep_time: None,
            cook_time: None,
            difficulty: None,
            cuisine: None,
            meal_type: None,
            tags: vec![],
            created_at: 0,
            updated_at: 0,
        }))
    }
}

#[derive(Clone)]
struct FailingPantry;

#[async_trait]
impl PantrySource for FailingPantry {
    async fn get_pantry(&self, _user_id: &str) -> anyhow::Result<Vec<PantryItem>> {
        anyhow::bail!("pantry unavailable")
    }
}

#[tokio::test]
async fn test_sources_are_fetched_once_per_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let recipes = CountingRecipes::default();
    let command = Command::with_sources(state.clone(), recipes.clone(), FailingPantry);

    let id = "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_owned();
    let list = command
        .generate(GenerateInput::new(vec![id.to_owned(), id.to_owned()]), "alice")
        .await?;

    assert_eq!(recipes.fetched.load(Ordering::SeqCst), 1);
    assert_eq!(list.items[0].quantity, Some(4.0));

    let mut input = GenerateInput::new(vec![id]);
    input.exclude_pantry = true;
    assert!(matches!(
        command.generate(input, "alice").await,
        Err(Error::Unknown(_))
    ));

    let (_, total) = Query(state.read_db.clone()).list("alice", 20, 0).await?;
    assert_eq!(total, 1);

    Ok(())
}
