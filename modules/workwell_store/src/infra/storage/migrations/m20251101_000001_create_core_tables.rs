use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Empresas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Empresas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Empresas::Nome).string().not_null())
                    .col(ColumnDef::new(Empresas::Cnpj).string_len(14).not_null())
                    .col(ColumnDef::new(Empresas::Setor).string().not_null())
                    .col(
                        ColumnDef::new(Empresas::DataCadastro)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Empresas::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Empresas::DataAtualizacao).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Departamentos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departamentos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departamentos::Nome).string().not_null())
                    .col(ColumnDef::new(Departamentos::Descricao).string())
                    .col(ColumnDef::new(Departamentos::EmpresaId).integer().not_null())
                    .col(
                        ColumnDef::new(Departamentos::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Departamentos::DataAtualizacao)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_DEPARTAMENTOS_EMPRESAS_EmpresaId")
                            .from(Departamentos::Table, Departamentos::EmpresaId)
                            .to(Empresas::Table, Empresas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for index in core_indexes() {
            manager.create_index(index).await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Nome).string().not_null())
                    .col(ColumnDef::new(Usuarios::Email).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Usuarios::DataAtualizacao).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Departamentos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Empresas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}
