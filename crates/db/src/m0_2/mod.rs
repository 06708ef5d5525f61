mod shopping_list;
mod shopping_list_item;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "larder",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![
        shopping_list::CreateTable,
        shopping_list::CreateUserIdx,
        shopping_list_item::CreateTable
    ]
);
