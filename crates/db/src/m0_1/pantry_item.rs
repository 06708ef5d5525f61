use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::PantryItem;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PantryItem::Table)
        .col(
            ColumnDef::new(PantryItem::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PantryItem::UserId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(PantryItem::Name)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(ColumnDef::new(PantryItem::Quantity).double().null())
        // empty string stands for "no unit" so the unique index can match it
        .col(
            ColumnDef::new(PantryItem::Unit)
                .string()
                .not_null()
                .string_len(50)
                .default(""),
        )
        .col(ColumnDef::new(PantryItem::ExpiresAt).big_integer().null())
        .col(ColumnDef::new(PantryItem::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(PantryItem::Table).to_owned()
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

pub struct CreateUserNameUnitIdx;

fn up_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_pantry_item_user_name_unit")
        .table(PantryItem::Table)
        .unique()
        .col(PantryItem::UserId)
        .col(PantryItem::Name)
        .col(PantryItem::Unit)
        .to_owned()
}

fn down_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_pantry_item_user_name_unit")
        .table(PantryItem::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUserNameUnitIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
