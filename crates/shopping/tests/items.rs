use larder_shared::{Error, State};
use larder_shopping::{Command, GenerateInput, ItemKey, Query, RenameInput, ShoppingList};
use temp_dir::TempDir;

mod helpers;

use helpers::ingredient;

async fn generate_list(
    state: &State,
    user: &str,
) -> anyhow::Result<(ShoppingList, String, String)> {
    let tacos = helpers::create_recipe(
        state,
        "Tacos",
        4,
        vec![
            ingredient("tortillas", Some(8.0), None),
            ingredient("tomatoes", Some(2.0), None),
            ingredient("ground beef", Some(500.0), Some("g")),
        ],
    )
    .await?;
    let salsa = helpers::create_recipe(
        state,
        "Salsa",
        4,
        vec![
            ingredient("tomato", Some(3.0), None),
            ingredient("lime", Some(1.0), None),
        ],
    )
    .await?;

    let list = Command::new(state.clone())
        .generate(
            GenerateInput::new(vec![tacos.to_owned(), salsa.to_owned()]),
            user,
        )
        .await?;

    Ok((list, tacos, salsa))
}

fn is_checked(list: &ShoppingList, name: &str) -> bool {
    list.items
        .iter()
        .find(|i| i.name == name)
        .map(|i| i.checked)
        .unwrap_or_default()
}

#[tokio::test]
async fn test_toggle_twice_returns_to_unchecked() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (list, _, _) = generate_list(&state, "alice").await?;
    let command = Command::new(state.clone());

    let toggled = command
        .check(&list.id, ItemKey::new("Tomatoes"), None, "alice")
        .await?;
    assert!(is_checked(&toggled, "tomato"));
    assert!(!is_checked(&toggled, "lime"));
    assert_eq!(toggled.checked_items, 1);
    assert!(toggled.updated_at >= list.updated_at);

    let toggled = command
        .check(&list.id, ItemKey::new("tomato"), None, "alice")
        .await?;
    assert!(!is_checked(&toggled, "tomato"));
    assert_eq!(toggled.checked_items, 0);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_toggles_keep_every_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (list, _, _) = generate_list(&state, "alice").await?;
    let command = Command::new(state.clone());

    let (tortilla, lime, beef) = tokio::join!(
        command.check(&list.id, ItemKey::new("tortilla"), None, "alice"),
        command.check(&list.id, ItemKey::new("lime"), None, "alice"),
        command.check(&list.id, ItemKey::new("ground beef"), None, "alice"),
    );
    for toggled in [tortilla?, lime?, beef?] {
        assert!(toggled.checked_items >= 1);
    }

    let reloaded = Query(state.read_db.clone())
        .find(&list.id, "alice")
        .await?
        .expect("list exists");
    assert_eq!(reloaded.checked_items, 3);
    assert!(is_checked(&reloaded, "tortilla"));
    assert!(is_checked(&reloaded, "lime"));
    assert!(is_checked(&reloaded, "ground beef"));
    assert!(!is_checked(&reloaded, "tomato"));

    Ok(())
}

#[tokio::test]
async fn test_explicit_check_and_recipe_filter() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (list, tacos, salsa) = generate_list(&state, "alice").await?;
    let command = Command::new(state.clone());

    let checked = command
        .check(&list.id, ItemKey::new("lime"), Some(true), "alice")
        .await?;
    let checked_again = command
        .check(&list.id, ItemKey::new("lime"), Some(true), "alice")
        .await?;
    assert!(is_checked(&checked, "lime"));
    assert!(is_checked(&checked_again, "lime"));

    let by_key = command
        .check(&list.id, ItemKey::new("tortilla|count"), Some(true), "alice")
        .await?;
    assert!(is_checked(&by_key, "tortilla"));

    let by_recipe = command
        .check(
            &list.id,
            ItemKey::new("tomato").recipe(&salsa),
            Some(true),
            "alice",
        )
        .await?;
    assert!(is_checked(&by_recipe, "tomato"));

    assert!(matches!(
        command
            .check(&list.id, ItemKey::new("lime").recipe(&tacos), None, "alice")
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        command
            .check(&list.id, ItemKey::new("caviar"), None, "alice")
            .await,
        Err(Error::NotFound(_))
    ));

    let reset = command.reset(&list.id, "alice").await?;
    assert_eq!(reset.checked_items, 0);
    assert_eq!(reset.total_items, list.total_items);

    Ok(())
}

#[tokio::test]
async fn test_other_users_cannot_touch_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (list, _, _) = generate_list(&state, "alice").await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    assert!(matches!(
        command
            .check(&list.id, ItemKey::new("lime"), None, "bob")
            .await,
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        command.reset(&list.id, "bob").await,
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        command
            .remove_item(&list.id, ItemKey::new("lime"), "bob")
            .await,
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        command.delete(&list.id, "bob").await,
        Err(Error::Forbidden)
    ));

    assert!(query.find(&list.id, "bob").await?.is_none());
    assert!(query.find(&list.id, "alice").await?.is_some());

    assert!(matches!(
        command
            .check("01ARZ3NDEKTSV4RRFFQ69G5FAV", ItemKey::new("lime"), None, "alice")
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        command.delete("bad id", "alice").await,
        Err(Error::User(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_remove_item_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (list, _, _) = generate_list(&state, "alice").await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let updated = command
        .remove_item(&list.id, ItemKey::new("Limes"), "alice")
        .await?;
    assert_eq!(updated.total_items, list.total_items - 1);
    assert!(updated.items.iter().all(|i| i.name != "lime"));

    assert!(matches!(
        command
            .remove_item(&list.id, ItemKey::new("lime"), "alice")
            .await,
        Err(Error::NotFound(_))
    ));

    command.delete(&list.id, "alice").await?;
    assert!(query.find(&list.id, "alice").await?.is_none());

    let (remaining,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM shopping_list_item WHERE list_id = ?")
            .bind(&list.id)
            .fetch_one(&state.read_db)
            .await?;
    assert_eq!(remaining, 0);

    assert!(matches!(
        command.delete(&list.id, "alice").await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_rename() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (list, _, _) = generate_list(&state, "alice").await?;
    let command = Command::new(state.clone());
    let rename = |name: &str| RenameInput {
        name: name.to_owned(),
    };

    let renamed = command
        .rename(&list.id, rename("  Taco Tuesday "), "alice")
        .await?;
    assert_eq!(renamed.name, "Taco Tuesday");
    assert_eq!(renamed.items, list.items);
    assert!(renamed.updated_at >= list.updated_at);

    assert!(matches!(
        command.rename(&list.id, rename("Mine now"), "bob").await,
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        command.rename(&list.id, rename("   "), "alice").await,
        Err(Error::Validate(_))
    ));
    assert!(matches!(
        command.rename(&list.id, rename(&"x".repeat(101)), "alice").await,
        Err(Error::Validate(_))
    ));

    let stored = Query(state.read_db.clone())
        .find(&list.id, "alice")
        .await?
        .expect("list exists");
    assert_eq!(stored.name, "Taco Tuesday");

    Ok(())
}

#[tokio::test]
async fn test_list_summaries() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let (first, _, _) = generate_list(&state, "alice").await?;
    let (second, _, _) = generate_list(&state, "alice").await?;
    generate_list(&state, "bob").await?;

    command
        .check(&first.id, ItemKey::new("lime"), Some(true), "alice")
        .await?;

    let (page, total) = query.list("alice", 1, 0).await?;
    assert_eq!(total, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, second.id);

    let (page, total) = query.list("alice", 10, 1).await?;
    assert_eq!(total, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, first.id);
    assert_eq!(page[0].total_items as usize, first.total_items);
    assert_eq!(page[0].checked_items, 1);

    Ok(())
}
