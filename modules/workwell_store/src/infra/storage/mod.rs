//! Storage layer - database entities, migrations and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
pub mod schema;

pub use repositories::{
    SeaOrmChatRepository, SeaOrmCompanyRepository, SeaOrmDepartmentRepository,
    SeaOrmMeditationRepository, SeaOrmUserRepository,
};
pub use schema::SeaOrmSchemaBackend;
