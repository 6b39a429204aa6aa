//! Contract layer - models and errors shared with callers of the store
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::{BootstrapError, SeedEntity};
pub use model::{
    ChatConversation, ChatMessage, ChatRole, Company, Department, MeditationSession,
    NewChatConversation, NewChatMessage, NewCompany, NewDepartment, NewMeditationSession,
    NewUser, User,
};
