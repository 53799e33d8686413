//! Schema migrations for the `accounts` and `posts` tables.

pub use sea_orm_migration::prelude::*;

mod m20241018_000001_create_accounts;
mod m20241018_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241018_000001_create_accounts::Migration),
            Box::new(m20241018_000002_create_posts::Migration),
        ]
    }
}
