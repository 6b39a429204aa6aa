//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Every write commits its own transaction before returning. Deletes that own
//! children remove the children first, inside the same transaction.

use crate::contract::{
    ChatConversation, ChatMessage, Company, Department, MeditationSession, NewChatConversation,
    NewChatMessage, NewCompany, NewDepartment, NewMeditationSession, NewUser, User,
};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for companies
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Check whether no company exists
    async fn is_empty(&self) -> Result<bool>;

    async fn count(&self) -> Result<u64>;

    /// Identifier of the first company the backend returns, without sorting
    async fn first_id(&self) -> Result<Option<i32>>;

    /// Insert and commit a company
    async fn insert(&self, company: NewCompany) -> Result<Company>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>>;

    async fn list_all(&self) -> Result<Vec<Company>>;

    /// Delete a company together with its departments
    async fn delete(&self, id: i32) -> Result<()>;
}

/// Repository for departments
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Check whether no department exists
    async fn is_empty(&self) -> Result<bool>;

    async fn count(&self) -> Result<u64>;

    /// Insert and commit a department
    async fn insert(&self, department: NewDepartment) -> Result<Department>;

    async fn list_by_company(&self, company_id: i32) -> Result<Vec<Department>>;

    async fn list_all(&self) -> Result<Vec<Department>>;

    async fn delete(&self, id: i32) -> Result<()>;
}

/// Repository for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>>;

    /// Delete a user with their conversations, messages and meditation sessions
    async fn delete(&self, id: i32) -> Result<()>;
}

/// Repository for chat conversations and their messages
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn create_conversation(
        &self,
        conversation: NewChatConversation,
    ) -> Result<ChatConversation>;

    async fn find_conversation(&self, id: i32) -> Result<Option<ChatConversation>>;

    /// Append a message and advance the conversation's last-message time
    async fn append_message(&self, message: NewChatMessage) -> Result<ChatMessage>;

    /// Messages of a conversation in timestamp order
    async fn list_messages(&self, conversation_id: i32) -> Result<Vec<ChatMessage>>;

    /// Conversations of a user, most recently started first
    async fn list_conversations_by_user(&self, user_id: i32) -> Result<Vec<ChatConversation>>;

    /// Delete a conversation together with its messages
    async fn delete_conversation(&self, id: i32) -> Result<()>;
}

/// Repository for meditation sessions
#[async_trait]
pub trait MeditationRepository: Send + Sync {
    async fn insert(&self, session: NewMeditationSession) -> Result<MeditationSession>;

    /// Sessions of a user, latest session date first
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<MeditationSession>>;

    async fn list_completed_by_user(&self, user_id: i32) -> Result<Vec<MeditationSession>>;

    async fn delete(&self, id: i32) -> Result<()>;
}
