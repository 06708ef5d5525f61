use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Ingredients,
    Instructions,
    Servings,
    PrepTime,
    CookTime,
    Difficulty,
    Cuisine,
    MealType,
    Tags,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum PantryItem {
    Table,
    Id,
    UserId,
    Name,
    Quantity,
    Unit,
    ExpiresAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingList {
    Table,
    Id,
    UserId,
    Name,
    RecipeIds,
    ExcludePantry,
    GroupByCategory,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingListItem {
    Table,
    ListId,
    Key,
    Position,
    Name,
    Quantity,
    Unit,
    Category,
    Notes,
    RecipeIds,
    Checked,
}
