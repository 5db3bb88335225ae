use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string_len(City::Name, 100).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // Case-insensitive uniqueness is part of the contract, not just the
        // application-level check.
        manager
            .get_connection()
            .execute_unprepared("CREATE UNIQUE INDEX idx_city_name_lower ON city (LOWER(name))")
            .await?;

        // Seed cities
        let insert = Query::insert()
            .into_table(City::Table)
            .columns([City::Name])
            .values_panic(["Lagos".into()])
            .values_panic(["Abuja".into()])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
}
