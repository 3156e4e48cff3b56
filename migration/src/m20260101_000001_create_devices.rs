use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Devices::SerialNumber))
                    .col(string(Devices::Os))
                    .col(string(Devices::Vendor))
                    .col(string(Devices::DeviceName))
                    .col(string(Devices::Size))
                    .col(string(Devices::Cpu))
                    .col(string(Devices::Condit))
                    .col(string(Devices::Location))
                    .col(string(Devices::MacAddress))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    Id,
    SerialNumber,
    Os,
    Vendor,
    DeviceName,
    Size,
    Cpu,
    Condit,
    Location,
    MacAddress,
}
