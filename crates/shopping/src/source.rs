use async_trait::async_trait;
use larder_recipe::Recipe;
use larder_shared::pantry::PantryItem;

/// Where list generation reads recipes from.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn get_recipe(&self, id: &str) -> anyhow::Result<Option<Recipe>>;
}

/// Where list generation reads the user's pantry from.
#[async_trait]
pub trait PantrySource: Send + Sync {
    async fn get_pantry(&self, user_id: &str) -> anyhow::Result<Vec<PantryItem>>;
}

#[async_trait]
impl RecipeSource for larder_recipe::Query {
    async fn get_recipe(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        self.find(id).await
    }
}

#[async_trait]
impl PantrySource for larder_pantry::Query {
    async fn get_pantry(&self, user_id: &str) -> anyhow::Result<Vec<PantryItem>> {
        self.list(user_id).await
    }
}
