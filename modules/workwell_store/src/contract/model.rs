//! Contract models for the WorkWell store
//!
//! These models are transport-agnostic and used between the storage layer and
//! its callers. NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Maximum stored length of a meditation session type
pub const MAX_SESSION_TYPE_LEN: usize = 50;

/// Inclusive bounds of the relaxation level scale
pub const RELAXATION_SCALE: std::ops::RangeInclusive<i32> = 0..=10;

/// Company that owns departments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i32,
    pub name: String,
    /// CNPJ, 14 digits without punctuation
    pub tax_id: String,
    pub sector: String,
    pub registered_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Company fields supplied on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub tax_id: String,
    pub sector: String,
    pub registered_at: DateTime<Utc>,
}

/// Department, always owned by exactly one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub company_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
    pub company_id: i32,
}

/// Application user. Only the fields the store itself needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Chat conversation between a user and the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConversation {
    pub id: i32,
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
    pub topic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatConversation {
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub topic: Option<String>,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(anyhow::anyhow!("unknown chat role '{other}'")),
        }
    }
}

/// Single message inside a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: i32,
    pub conversation_id: i32,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Sentiment label attached by downstream analysis, if any
    pub sentiment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    pub conversation_id: i32,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: Option<String>,
}

/// Completed or scheduled meditation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationSession {
    pub id: i32,
    pub user_id: i32,
    /// Session kind, e.g. "Mindfulness" or "Respiração"
    pub session_type: String,
    pub duration_minutes: i32,
    pub session_date: DateTime<Utc>,
    pub completed: bool,
    pub feedback: Option<String>,
    pub relaxation_before: Option<i32>,
    pub relaxation_after: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeditationSession {
    pub user_id: i32,
    pub session_type: String,
    pub duration_minutes: i32,
    pub session_date: DateTime<Utc>,
    pub completed: bool,
    pub feedback: Option<String>,
    pub relaxation_before: Option<i32>,
    pub relaxation_after: Option<i32>,
}

impl NewMeditationSession {
    /// Check column limits and the relaxation scale before hitting the database
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.session_type.chars().count() > MAX_SESSION_TYPE_LEN {
            anyhow::bail!(
                "session type exceeds {} characters: '{}'",
                MAX_SESSION_TYPE_LEN,
                self.session_type
            );
        }
        if self.duration_minutes < 0 {
            anyhow::bail!("negative session duration: {}", self.duration_minutes);
        }
        for level in [self.relaxation_before, self.relaxation_after]
            .into_iter()
            .flatten()
        {
            if !RELAXATION_SCALE.contains(&level) {
                anyhow::bail!(
                    "relaxation level {} outside {}..={}",
                    level,
                    RELAXATION_SCALE.start(),
                    RELAXATION_SCALE.end()
                );
            }
        }
        Ok(())
    }
}
