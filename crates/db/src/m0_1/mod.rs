mod pantry_item;
mod recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "larder",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateUserIdx,
        pantry_item::CreateTable,
        pantry_item::CreateUserNameUnitIdx
    ]
);
