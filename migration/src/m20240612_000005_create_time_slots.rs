use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeSlot::Id))
                    .col(time(TimeSlot::DepartureTime).not_null())
                    .col(time(TimeSlot::ArrivalTime).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSlot {
    Table,
    Id,
    DepartureTime,
    ArrivalTime,
}
