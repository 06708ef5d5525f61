use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{ShoppingList, ShoppingListItem};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ShoppingListItem::Table)
        .col(
            ColumnDef::new(ShoppingListItem::ListId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(ShoppingListItem::Key).string().not_null())
        .col(ColumnDef::new(ShoppingListItem::Position).integer().not_null())
        .col(ColumnDef::new(ShoppingListItem::Name).string().not_null())
        .col(ColumnDef::new(ShoppingListItem::Quantity).double().null())
        .col(ColumnDef::new(ShoppingListItem::Unit).string().null())
        .col(ColumnDef::new(ShoppingListItem::Category).string().null())
        .col(ColumnDef::new(ShoppingListItem::Notes).string().null())
        .col(
            ColumnDef::new(ShoppingListItem::RecipeIds)
                .json_binary()
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingListItem::Checked)
                .boolean()
                .not_null()
                .default(false),
        )
        .primary_key(
            Index::create()
                .col(ShoppingListItem::ListId)
                .col(ShoppingListItem::Key),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_shopping_list_item_list")
                .from(ShoppingListItem::Table, ShoppingListItem::ListId)
                .to(ShoppingList::Table, ShoppingList::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ShoppingListItem::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
