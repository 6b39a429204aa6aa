//! Database migrations for the WorkWell store
//!
//! Identifiers are spelled exactly as in existing deployments. Secondary
//! indexes are defined once here and shared with the create-only schema path.

use sea_orm_migration::prelude::*;

mod m20251101_000001_create_core_tables;
mod m20251123_151740_add_chat_and_meditation_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_core_tables::Migration),
            Box::new(m20251123_151740_add_chat_and_meditation_tables::Migration),
        ]
    }
}

/// Secondary indexes of the company and department tables
pub(crate) fn core_indexes() -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("IX_DEPARTAMENTOS_EmpresaId")
        .table(Departamentos::Table)
        .col(Departamentos::EmpresaId)
        .to_owned()]
}

/// Secondary indexes of the chat and meditation tables
pub(crate) fn chat_and_meditation_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("IX_ChatConversations_DataInicio")
            .table(ChatConversations::Table)
            .col(ChatConversations::DataInicio)
            .to_owned(),
        Index::create()
            .name("IX_ChatConversations_UsuarioId")
            .table(ChatConversations::Table)
            .col(ChatConversations::UsuarioId)
            .to_owned(),
        Index::create()
            .name("IX_ChatMessages_ChatConversationId")
            .table(ChatMessages::Table)
            .col(ChatMessages::ChatConversationId)
            .to_owned(),
        Index::create()
            .name("IX_ChatMessages_Timestamp")
            .table(ChatMessages::Table)
            .col(ChatMessages::Timestamp)
            .to_owned(),
        Index::create()
            .name("IX_MeditationSessions_Concluida")
            .table(MeditationSessions::Table)
            .col(MeditationSessions::Concluida)
            .to_owned(),
        Index::create()
            .name("IX_MeditationSessions_UsuarioId_DataSessao")
            .table(MeditationSessions::Table)
            .col(MeditationSessions::UsuarioId)
            .col(MeditationSessions::DataSessao)
            .to_owned(),
    ]
}

/// Every secondary index, in the order the migrations create them
pub(crate) fn all_indexes() -> Vec<IndexCreateStatement> {
    let mut indexes = core_indexes();
    indexes.extend(chat_and_meditation_indexes());
    indexes
}

#[derive(DeriveIden)]
enum Empresas {
    #[sea_orm(iden = "EMPRESAS")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Nome")]
    Nome,
    #[sea_orm(iden = "Cnpj")]
    Cnpj,
    #[sea_orm(iden = "Setor")]
    Setor,
    #[sea_orm(iden = "DataCadastro")]
    DataCadastro,
    #[sea_orm(iden = "DataCriacao")]
    DataCriacao,
    #[sea_orm(iden = "DataAtualizacao")]
    DataAtualizacao,
}

#[derive(DeriveIden)]
enum Departamentos {
    #[sea_orm(iden = "DEPARTAMENTOS")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Nome")]
    Nome,
    #[sea_orm(iden = "Descricao")]
    Descricao,
    #[sea_orm(iden = "EmpresaId")]
    EmpresaId,
    #[sea_orm(iden = "DataCriacao")]
    DataCriacao,
    #[sea_orm(iden = "DataAtualizacao")]
    DataAtualizacao,
}

#[derive(DeriveIden)]
enum Usuarios {
    #[sea_orm(iden = "USUARIOS")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Nome")]
    Nome,
    #[sea_orm(iden = "Email")]
    Email,
    #[sea_orm(iden = "DataCriacao")]
    DataCriacao,
    #[sea_orm(iden = "DataAtualizacao")]
    DataAtualizacao,
}

#[derive(DeriveIden)]
enum ChatConversations {
    #[sea_orm(iden = "ChatConversations")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "UsuarioId")]
    UsuarioId,
    #[sea_orm(iden = "DataInicio")]
    DataInicio,
    #[sea_orm(iden = "DataUltimaMensagem")]
    DataUltimaMensagem,
    #[sea_orm(iden = "Topico")]
    Topico,
    #[sea_orm(iden = "DataCriacao")]
    DataCriacao,
    #[sea_orm(iden = "DataAtualizacao")]
    DataAtualizacao,
}

#[derive(DeriveIden)]
enum ChatMessages {
    #[sea_orm(iden = "ChatMessages")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "ChatConversationId")]
    ChatConversationId,
    #[sea_orm(iden = "Role")]
    Role,
    #[sea_orm(iden = "Conteudo")]
    Conteudo,
    #[sea_orm(iden = "Timestamp")]
    Timestamp,
    #[sea_orm(iden = "Sentimento")]
    Sentimento,
    #[sea_orm(iden = "DataCriacao")]
    DataCriacao,
    #[sea_orm(iden = "DataAtualizacao")]
    DataAtualizacao,
}

#[derive(DeriveIden)]
enum MeditationSessions {
    #[sea_orm(iden = "MeditationSessions")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "UsuarioId")]
    UsuarioId,
    #[sea_orm(iden = "Tipo")]
    Tipo,
    #[sea_orm(iden = "DuracaoMinutos")]
    DuracaoMinutos,
    #[sea_orm(iden = "DataSessao")]
    DataSessao,
    #[sea_orm(iden = "Concluida")]
    Concluida,
    #[sea_orm(iden = "Feedback")]
    Feedback,
    #[sea_orm(iden = "NivelRelaxamentoAntes")]
    NivelRelaxamentoAntes,
    #[sea_orm(iden = "NivelRelaxamentoDepois")]
    NivelRelaxamentoDepois,
    #[sea_orm(iden = "DataCriacao")]
    DataCriacao,
    #[sea_orm(iden = "DataAtualizacao")]
    DataAtualizacao,
}
