use sea_orm_migration::{prelude::*, schema::*};
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outlet::Table)
                    .if_not_exists()
                    .col(uuid(Outlet::Id).primary_key())
                    .col(string_len(Outlet::Name, 100).not_null())
                    .col(double_null(Outlet::Latitude))
                    .col(double_null(Outlet::Longitude))
                    .col(double(Outlet::ServiceRadiusKm).not_null().default(10.0))
                    .col(double(Outlet::AvgPreparationTimeMin).not_null().default(20.0))
                    .col(boolean(Outlet::IsActive).not_null().default(true))
                    .col(string_len_null(Outlet::City, 100))
                    .col(string_len_null(Outlet::State, 100))
                    .col(
                        timestamp_with_time_zone(Outlet::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_outlet_is_active")
                    .table(Outlet::Table)
                    .col(Outlet::IsActive)
                    .to_owned(),
            )
            .await?;

        // Seed outlets
        let insert = Query::insert()
            .into_table(Outlet::Table)
            .columns([
                Outlet::Id,
                Outlet::Name,
                Outlet::Latitude,
                Outlet::Longitude,
                Outlet::ServiceRadiusKm,
                Outlet::City,
                Outlet::State,
            ])
            .values_panic([
                Uuid::new_v4().into(),
                "Menteng Kitchen".into(),
                (-6.1963).into(),
                (106.8320).into(),
                (10.0).into(),
                "Jakarta".into(),
                "DKI Jakarta".into(),
            ])
            .values_panic([
                Uuid::new_v4().into(),
                "Dago Kitchen".into(),
                (-6.8851).into(),
                (107.6136).into(),
                (7.0).into(),
                "Bandung".into(),
                "West Java".into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Outlet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Outlet {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    ServiceRadiusKm,
    AvgPreparationTimeMin,
    IsActive,
    City,
    State,
    CreatedAt,
}
