use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatConversations::Table)
                    .col(
                        ColumnDef::new(ChatConversations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChatConversations::UsuarioId).integer().not_null())
                    .col(
                        ColumnDef::new(ChatConversations::DataInicio)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChatConversations::DataUltimaMensagem)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChatConversations::Topico).text())
                    .col(
                        ColumnDef::new(ChatConversations::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChatConversations::DataAtualizacao)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_ChatConversations_USUARIOS_UsuarioId")
                            .from(ChatConversations::Table, ChatConversations::UsuarioId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MeditationSessions::Table)
                    .col(
                        ColumnDef::new(MeditationSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MeditationSessions::UsuarioId).integer().not_null())
                    .col(
                        ColumnDef::new(MeditationSessions::Tipo)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MeditationSessions::DuracaoMinutos)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MeditationSessions::DataSessao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MeditationSessions::Concluida).boolean().not_null())
                    .col(ColumnDef::new(MeditationSessions::Feedback).text())
                    .col(ColumnDef::new(MeditationSessions::NivelRelaxamentoAntes).integer())
                    .col(ColumnDef::new(MeditationSessions::NivelRelaxamentoDepois).integer())
                    .col(
                        ColumnDef::new(MeditationSessions::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MeditationSessions::DataAtualizacao)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_MeditationSessions_USUARIOS_UsuarioId")
                            .from(MeditationSessions::Table, MeditationSessions::UsuarioId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChatMessages::Table)
                    .col(
                        ColumnDef::new(ChatMessages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChatMessages::ChatConversationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChatMessages::Role).string_len(20).not_null())
                    .col(ColumnDef::new(ChatMessages::Conteudo).text().not_null())
                    .col(
                        ColumnDef::new(ChatMessages::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChatMessages::Sentimento).text())
                    .col(
                        ColumnDef::new(ChatMessages::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChatMessages::DataAtualizacao)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_ChatMessages_ChatConversations_ChatConversationId")
                            .from(ChatMessages::Table, ChatMessages::ChatConversationId)
                            .to(ChatConversations::Table, ChatConversations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for index in chat_and_meditation_indexes() {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MeditationSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChatConversations::Table).to_owned())
            .await
    }
}
