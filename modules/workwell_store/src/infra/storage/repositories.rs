//! SeaORM repository implementations

use crate::contract::{
    ChatConversation, ChatMessage, Company, Department, MeditationSession, NewChatConversation,
    NewChatMessage, NewCompany, NewDepartment, NewMeditationSession, NewUser, User,
};
use crate::domain::repository::{
    ChatRepository, CompanyRepository, DepartmentRepository, MeditationRepository, UserRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{
    chat_conversation, chat_message, company, department, meditation_session, user,
};

// ===== Company Repository =====

pub struct SeaOrmCompanyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.first_id().await?.is_none())
    }

    async fn count(&self) -> Result<u64> {
        Ok(company::Entity::find().count(&*self.db).await?)
    }

    async fn first_id(&self) -> Result<Option<i32>> {
        let id = company::Entity::find()
            .select_only()
            .column(company::Column::Id)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await?;

        Ok(id)
    }

    async fn insert(&self, new_company: NewCompany) -> Result<Company> {
        let txn = self.db.begin().await?;
        let active: company::ActiveModel = new_company.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>> {
        let result = company::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<Company>> {
        let results = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        department::Entity::delete_many()
            .filter(department::Column::CompanyId.eq(id))
            .exec(&txn)
            .await?;
        company::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Department Repository =====

pub struct SeaOrmDepartmentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn is_empty(&self) -> Result<bool> {
        let first = department::Entity::find()
            .select_only()
            .column(department::Column::Id)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await?;

        Ok(first.is_none())
    }

    async fn count(&self) -> Result<u64> {
        Ok(department::Entity::find().count(&*self.db).await?)
    }

    async fn insert(&self, new_department: NewDepartment) -> Result<Department> {
        let txn = self.db.begin().await?;

        // Owning company must exist even on backends without FK enforcement
        let owner = company::Entity::find_by_id(new_department.company_id)
            .count(&txn)
            .await?;
        if owner == 0 {
            anyhow::bail!("company {} does not exist", new_department.company_id);
        }

        let active: department::ActiveModel = new_department.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn list_by_company(&self, company_id: i32) -> Result<Vec<Department>> {
        let results = department::Entity::find()
            .filter(department::Column::CompanyId.eq(company_id))
            .order_by_asc(department::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_all(&self) -> Result<Vec<Department>> {
        let results = department::Entity::find()
            .order_by_asc(department::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        department::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let txn = self.db.begin().await?;
        let active: user::ActiveModel = new_user.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let result = user::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        let conversation_ids = chat_conversation::Entity::find()
            .select_only()
            .column(chat_conversation::Column::Id)
            .filter(chat_conversation::Column::UserId.eq(id))
            .into_tuple::<i32>()
            .all(&txn)
            .await?;

        if !conversation_ids.is_empty() {
            chat_message::Entity::delete_many()
                .filter(chat_message::Column::ConversationId.is_in(conversation_ids))
                .exec(&txn)
                .await?;
        }
        chat_conversation::Entity::delete_many()
            .filter(chat_conversation::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        meditation_session::Entity::delete_many()
            .filter(meditation_session::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        user::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Chat Repository =====

pub struct SeaOrmChatRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmChatRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChatRepository for SeaOrmChatRepository {
    async fn create_conversation(
        &self,
        conversation: NewChatConversation,
    ) -> Result<ChatConversation> {
        let txn = self.db.begin().await?;
        let active: chat_conversation::ActiveModel = conversation.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn find_conversation(&self, id: i32) -> Result<Option<ChatConversation>> {
        let result = chat_conversation::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn append_message(&self, message: NewChatMessage) -> Result<ChatMessage> {
        let txn = self.db.begin().await?;

        let conversation = chat_conversation::Entity::find_by_id(message.conversation_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("conversation {} does not exist", message.conversation_id)
            })?;

        let timestamp = message.timestamp;
        let active: chat_message::ActiveModel = message.into();
        let model = active.insert(&txn).await?;

        if timestamp > conversation.last_message_at {
            let mut conversation: chat_conversation::ActiveModel = conversation.into();
            conversation.last_message_at = Set(timestamp);
            conversation.updated_at = Set(Some(Utc::now()));
            conversation.update(&txn).await?;
        }

        txn.commit().await?;
        model.try_into()
    }

    async fn list_messages(&self, conversation_id: i32) -> Result<Vec<ChatMessage>> {
        let results = chat_message::Entity::find()
            .filter(chat_message::Column::ConversationId.eq(conversation_id))
            .order_by_asc(chat_message::Column::Timestamp)
            .order_by_asc(chat_message::Column::Id)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn list_conversations_by_user(&self, user_id: i32) -> Result<Vec<ChatConversation>> {
        let results = chat_conversation::Entity::find()
            .filter(chat_conversation::Column::UserId.eq(user_id))
            .order_by_desc(chat_conversation::Column::StartedAt)
            .order_by_desc(chat_conversation::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete_conversation(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        chat_message::Entity::delete_many()
            .filter(chat_message::Column::ConversationId.eq(id))
            .exec(&txn)
            .await?;
        chat_conversation::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Meditation Repository =====

pub struct SeaOrmMeditationRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMeditationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MeditationRepository for SeaOrmMeditationRepository {
    async fn insert(&self, session: NewMeditationSession) -> Result<MeditationSession> {
        session.validate()?;

        let txn = self.db.begin().await?;
        let active: meditation_session::ActiveModel = session.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<MeditationSession>> {
        let results = meditation_session::Entity::find()
            .filter(meditation_session::Column::UserId.eq(user_id))
            .order_by_desc(meditation_session::Column::SessionDate)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_completed_by_user(&self, user_id: i32) -> Result<Vec<MeditationSession>> {
        let results = meditation_session::Entity::find()
            .filter(meditation_session::Column::UserId.eq(user_id))
            .filter(meditation_session::Column::Completed.eq(true))
            .order_by_desc(meditation_session::Column::SessionDate)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        meditation_session::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;

        Ok(())
    }
}
