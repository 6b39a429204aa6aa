//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{
    chat_conversation, chat_message, company, department, meditation_session, user,
};
use crate::contract::{
    ChatConversation, ChatMessage, Company, Department, MeditationSession, NewChatConversation,
    NewChatMessage, NewCompany, NewDepartment, NewMeditationSession, NewUser, User,
};
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Company Conversions =====

impl From<company::Model> for Company {
    fn from(entity: company::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tax_id: entity.tax_id,
            sector: entity.sector,
            registered_at: entity.registered_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<NewCompany> for company::ActiveModel {
    fn from(model: NewCompany) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name),
            tax_id: Set(model.tax_id),
            sector: Set(model.sector),
            registered_at: Set(model.registered_at),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
    }
}

// ===== Department Conversions =====

impl From<department::Model> for Department {
    fn from(entity: department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            company_id: entity.company_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<NewDepartment> for department::ActiveModel {
    fn from(model: NewDepartment) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name),
            description: Set(model.description),
            company_id: Set(model.company_id),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
    }
}

// ===== User Conversions =====

impl From<user::Model> for User {
    fn from(entity: user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<NewUser> for user::ActiveModel {
    fn from(model: NewUser) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name),
            email: Set(model.email),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
    }
}

// ===== Chat Conversions =====

impl From<chat_conversation::Model> for ChatConversation {
    fn from(entity: chat_conversation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            started_at: entity.started_at,
            last_message_at: entity.last_message_at,
            topic: entity.topic,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<NewChatConversation> for chat_conversation::ActiveModel {
    fn from(model: NewChatConversation) -> Self {
        Self {
            id: NotSet,
            user_id: Set(model.user_id),
            started_at: Set(model.started_at),
            // No messages yet; the conversation "last spoke" when it started
            last_message_at: Set(model.started_at),
            topic: Set(model.topic),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
    }
}

impl TryFrom<chat_message::Model> for ChatMessage {
    type Error = anyhow::Error;

    fn try_from(entity: chat_message::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id,
            conversation_id: entity.conversation_id,
            role: entity.role.parse()?,
            content: entity.content,
            timestamp: entity.timestamp,
            sentiment: entity.sentiment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<NewChatMessage> for chat_message::ActiveModel {
    fn from(model: NewChatMessage) -> Self {
        Self {
            id: NotSet,
            conversation_id: Set(model.conversation_id),
            role: Set(model.role.as_str().to_string()),
            content: Set(model.content),
            timestamp: Set(model.timestamp),
            sentiment: Set(model.sentiment),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
    }
}

// ===== Meditation Conversions =====

impl From<meditation_session::Model> for MeditationSession {
    fn from(entity: meditation_session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            session_type: entity.session_type,
            duration_minutes: entity.duration_minutes,
            session_date: entity.session_date,
            completed: entity.completed,
            feedback: entity.feedback,
            relaxation_before: entity.relaxation_before,
            relaxation_after: entity.relaxation_after,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<NewMeditationSession> for meditation_session::ActiveModel {
    fn from(model: NewMeditationSession) -> Self {
        Self {
            id: NotSet,
            user_id: Set(model.user_id),
            session_type: Set(model.session_type),
            duration_minutes: Set(model.duration_minutes),
            session_date: Set(model.session_date),
            completed: Set(model.completed),
            feedback: Set(model.feedback),
            relaxation_before: Set(model.relaxation_before),
            relaxation_after: Set(model.relaxation_after),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
    }
}
