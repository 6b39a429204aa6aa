//! Domain layer - repository contracts and the startup bootstrapper

pub mod bootstrap;
pub mod repository;
pub mod schema;

pub use bootstrap::{BootstrapReport, Bootstrapper, SchemaAction, SeedOutcome, SeedProfile};
pub use repository::{
    ChatRepository, CompanyRepository, DepartmentRepository, MeditationRepository, UserRepository,
};
pub use schema::{SchemaBackend, SchemaCapability};
