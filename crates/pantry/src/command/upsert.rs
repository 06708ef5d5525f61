use larder_db::table::PantryItem;
use sea_query::{OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::PantryInput;

impl super::Command {
    /// Insert the entry or replace quantity and expiry of the one with the same name and unit.
    pub async fn upsert(
        &self,
        input: PantryInput,
        request_by: impl Into<String>,
    ) -> larder_shared::Result<String> {
        input.validate()?;

        let request_by = request_by.into();
        let name = input.normalized_name();
        let unit = input.normalized_unit();
        let now = larder_shared::now();

        let statement = sea_query::Query::insert()
            .into_table(PantryItem::Table)
            .columns([
                PantryItem::Id,
                PantryItem::UserId,
                PantryItem::Name,
                PantryItem::Quantity,
                PantryItem::Unit,
                PantryItem::ExpiresAt,
                PantryItem::UpdatedAt,
            ])
            .values_panic([
                larder_shared::new_id().into(),
                request_by.to_owned().into(),
                name.to_owned().into(),
                input.quantity.into(),
                unit.into(),
                input.expires_at.into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::columns([PantryItem::UserId, PantryItem::Name, PantryItem::Unit])
                    .update_columns([
                        PantryItem::Quantity,
                        PantryItem::ExpiresAt,
                        PantryItem::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .returning_col(PantryItem::Id)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (id,) = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_one(&self.write_db)
            .await?;

        tracing::info!(pantry_item = %id, user = %request_by, name = %name, "pantry item saved");

        Ok(id)
    }
}
