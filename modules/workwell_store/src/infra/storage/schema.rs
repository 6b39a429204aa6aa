//! SeaORM-backed schema operations

use super::entity::{
    chat_conversation, chat_message, company, department, meditation_session, user,
};
use super::migrations::{all_indexes, Migrator};
use crate::domain::schema::{SchemaBackend, SchemaCapability};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

pub struct SeaOrmSchemaBackend {
    db: Arc<DatabaseConnection>,
    capability: SchemaCapability,
}

impl SeaOrmSchemaBackend {
    pub fn new(db: Arc<DatabaseConnection>, capability: SchemaCapability) -> Self {
        Self { db, capability }
    }
}

#[async_trait]
impl SchemaBackend for SeaOrmSchemaBackend {
    fn capability(&self) -> SchemaCapability {
        self.capability
    }

    async fn ping(&self) -> Result<()> {
        self.db.ping().await?;
        Ok(())
    }

    async fn apply_pending_migrations(&self) -> Result<usize> {
        let pending = Migrator::get_pending_migrations(&*self.db).await?.len();
        Migrator::up(&*self.db, None).await?;
        Ok(pending)
    }

    async fn create_schema_if_missing(&self) -> Result<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        // Parents before children so foreign keys resolve on strict backends
        let tables = [
            schema.create_table_from_entity(user::Entity),
            schema.create_table_from_entity(company::Entity),
            schema.create_table_from_entity(department::Entity),
            schema.create_table_from_entity(chat_conversation::Entity),
            schema.create_table_from_entity(chat_message::Entity),
            schema.create_table_from_entity(meditation_session::Entity),
        ];

        for mut table in tables {
            table.if_not_exists();
            self.db.execute(backend.build(&table)).await?;
        }

        for mut index in all_indexes() {
            index.if_not_exists();
            self.db.execute(backend.build(&index)).await?;
        }

        Ok(())
    }
}
