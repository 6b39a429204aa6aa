//! SeaORM storage and bootstrap against in-memory SQLite

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::print_test_header;
use sea_orm::{ConnectionTrait, Statement};
use workwell_store::contract::{
    ChatRole, NewChatConversation, NewChatMessage, NewCompany, NewDepartment,
    NewMeditationSession, NewUser,
};
use workwell_store::domain::{
    ChatRepository, CompanyRepository, DepartmentRepository, MeditationRepository, UserRepository,
};
use workwell_store::testing::TestDatabase;
use workwell_store::{
    Config, DatabaseConfig, SchemaAction, SchemaMode, SeedOutcome, WorkWellStore,
};

const DEPLOYED_INDEXES: [&str; 7] = [
    "IX_ChatConversations_DataInicio",
    "IX_ChatConversations_UsuarioId",
    "IX_ChatMessages_ChatConversationId",
    "IX_ChatMessages_Timestamp",
    "IX_DEPARTAMENTOS_EmpresaId",
    "IX_MeditationSessions_Concluida",
    "IX_MeditationSessions_UsuarioId_DataSessao",
];

async fn store(schema_mode: SchemaMode) -> WorkWellStore {
    let config = Config {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            schema_mode,
            ..DatabaseConfig::default()
        },
        ..Config::default()
    };
    WorkWellStore::init(config).await.unwrap()
}

async fn ready_store(schema_mode: SchemaMode) -> WorkWellStore {
    let store = store(schema_mode).await;
    store.ensure_ready().await.unwrap();
    store
}

async fn table_names(store: &WorkWellStore) -> Vec<String> {
    let rows = store
        .connection()
        .query_all(Statement::from_string(
            store.connection().get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        ))
        .await
        .unwrap();

    rows.iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

async fn index_names(store: &WorkWellStore) -> Vec<String> {
    let rows = store
        .connection()
        .query_all(Statement::from_string(
            store.connection().get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'index' ORDER BY name",
        ))
        .await
        .unwrap();

    rows.iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

fn meditation(user_id: i32, day: u32, completed: bool) -> NewMeditationSession {
    NewMeditationSession {
        user_id,
        session_type: "Mindfulness".to_string(),
        duration_minutes: 15,
        session_date: Utc.with_ymd_and_hms(2025, 11, day, 8, 0, 0).unwrap(),
        completed,
        feedback: None,
        relaxation_before: Some(3),
        relaxation_after: Some(7),
    }
}

#[tokio::test]
async fn migrations_create_tables_and_indexes() {
    print_test_header(
        "migrations_create_tables_and_indexes",
        &["Migrating backend ends with the deployed table and index names"],
    );
    let store = store(SchemaMode::Migrate).await;

    let report = store.ensure_ready().await.unwrap();
    assert_eq!(report.schema, SchemaAction::Migrated { applied: 2 });

    let tables = table_names(&store).await;
    for table in [
        "ChatConversations",
        "ChatMessages",
        "DEPARTAMENTOS",
        "EMPRESAS",
        "MeditationSessions",
        "USUARIOS",
    ] {
        assert!(tables.contains(&table.to_string()), "missing table {table}");
    }

    let indexes = index_names(&store).await;
    for index in DEPLOYED_INDEXES {
        assert!(indexes.contains(&index.to_string()), "missing index {index}");
    }
}

#[tokio::test]
async fn migrating_backend_seeds_baseline_once() {
    let store = store(SchemaMode::Migrate).await;

    let first = store.ensure_ready().await.unwrap();
    let second = store.ensure_ready().await.unwrap();

    assert!(matches!(
        first.seed,
        SeedOutcome::SeededCompanyAndDepartment { .. }
    ));
    assert_eq!(second.schema, SchemaAction::Migrated { applied: 0 });
    assert_eq!(second.seed, SeedOutcome::Unchanged);

    let companies = store.companies().list_all().await.unwrap();
    let departments = store.departments().list_all().await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(departments.len(), 1);
    assert_eq!(companies[0].name, "WorkWell");
    assert_eq!(companies[0].tax_id, "00000000000000");
    assert_eq!(companies[0].sector, "Geral");
    assert_eq!(departments[0].name, "Geral");
    assert_eq!(
        departments[0].description.as_deref(),
        Some("Departamento padrão")
    );
    assert_eq!(departments[0].company_id, companies[0].id);
}

#[tokio::test]
async fn create_only_backend_seeds_baseline_once() {
    let store = store(SchemaMode::Auto).await;

    let first = store.ensure_ready().await.unwrap();
    let second = store.ensure_ready().await.unwrap();

    assert_eq!(first.schema, SchemaAction::Created);
    assert_eq!(second.schema, SchemaAction::Created);
    assert_eq!(second.seed, SeedOutcome::Unchanged);
    assert_eq!(store.companies().count().await.unwrap(), 1);
    assert_eq!(store.departments().count().await.unwrap(), 1);

    // No migration bookkeeping on the create-only path
    let tables = table_names(&store).await;
    assert!(!tables.iter().any(|t| t == "seaql_migrations"));

    let indexes = index_names(&store).await;
    for index in DEPLOYED_INDEXES {
        assert!(indexes.contains(&index.to_string()), "missing index {index}");
    }
}

#[tokio::test]
async fn migrating_file_backend_is_idempotent_across_restarts() {
    print_test_header(
        "migrating_file_backend_is_idempotent_across_restarts",
        &[
            "A second process start against the same database file",
            "applies no migrations and seeds nothing",
        ],
    );
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database: DatabaseConfig {
            url: format!(
                "sqlite://{}?mode=rwc&cache=shared",
                dir.path().join("workwell.db").display()
            ),
            schema_mode: SchemaMode::Migrate,
            ..DatabaseConfig::default()
        },
        ..Config::default()
    };

    let first_start = WorkWellStore::init(config.clone()).await.unwrap();
    let first = first_start.ensure_ready().await.unwrap();
    assert_eq!(first.schema, SchemaAction::Migrated { applied: 2 });
    assert!(matches!(
        first.seed,
        SeedOutcome::SeededCompanyAndDepartment { .. }
    ));
    first_start.connection().clone().close().await.unwrap();

    let second_start = WorkWellStore::init(config).await.unwrap();
    let second = second_start.ensure_ready().await.unwrap();
    assert_eq!(second.schema, SchemaAction::Migrated { applied: 0 });
    assert_eq!(second.seed, SeedOutcome::Unchanged);
    assert_eq!(second_start.companies().count().await.unwrap(), 1);
    assert_eq!(second_start.departments().count().await.unwrap(), 1);
}

#[tokio::test]
async fn existing_company_receives_default_department() {
    let store = store(SchemaMode::Migrate).await;
    store.bootstrapper().ensure_schema_only().await.unwrap();

    let company = store
        .companies()
        .insert(NewCompany {
            name: "Acme Ltda".to_string(),
            tax_id: "11222333000181".to_string(),
            sector: "Indústria".to_string(),
            registered_at: Utc::now(),
        })
        .await
        .unwrap();

    let report = store.ensure_ready().await.unwrap();

    assert!(matches!(
        report.seed,
        SeedOutcome::SeededDepartment { company_id: id, .. } if id == company.id
    ));
    let departments = store.departments().list_by_company(company.id).await.unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Geral");
    assert_eq!(store.companies().count().await.unwrap(), 1);
}

#[tokio::test]
async fn department_requires_existing_company() {
    let store = ready_store(SchemaMode::Auto).await;

    let result = store
        .departments()
        .insert(NewDepartment {
            name: "Fantasma".to_string(),
            description: None,
            company_id: 999,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(store.departments().count().await.unwrap(), 1);
}

#[tokio::test]
async fn deleting_company_removes_its_departments() {
    let store = ready_store(SchemaMode::Migrate).await;
    let company_id = store.companies().first_id().await.unwrap().unwrap();
    store
        .departments()
        .insert(NewDepartment {
            name: "RH".to_string(),
            description: Some("Recursos humanos".to_string()),
            company_id,
        })
        .await
        .unwrap();
    assert_eq!(store.departments().count().await.unwrap(), 2);

    store.companies().delete(company_id).await.unwrap();

    assert!(store.companies().is_empty().await.unwrap());
    assert!(store.departments().is_empty().await.unwrap());
}

#[tokio::test]
async fn chat_messages_are_ordered_and_advance_conversation() {
    let store = ready_store(SchemaMode::Migrate).await;
    let user = store
        .users()
        .insert(NewUser {
            name: "Ana".to_string(),
            email: "ana@workwell.com".to_string(),
        })
        .await
        .unwrap();

    let started = Utc.with_ymd_and_hms(2025, 11, 23, 15, 0, 0).unwrap();
    let conversation = store
        .chats()
        .create_conversation(NewChatConversation {
            user_id: user.id,
            started_at: started,
            topic: Some("Ansiedade".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(conversation.last_message_at, started);

    let reply_at = started + Duration::minutes(2);
    store
        .chats()
        .append_message(NewChatMessage {
            conversation_id: conversation.id,
            role: ChatRole::Assistant,
            content: "Vamos respirar juntos.".to_string(),
            timestamp: reply_at,
            sentiment: None,
        })
        .await
        .unwrap();
    store
        .chats()
        .append_message(NewChatMessage {
            conversation_id: conversation.id,
            role: ChatRole::User,
            content: "Estou ansiosa hoje.".to_string(),
            timestamp: started + Duration::minutes(1),
            sentiment: Some("negative".to_string()),
        })
        .await
        .unwrap();

    let messages = store.chats().list_messages(conversation.id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, ChatRole::User);
    assert_eq!(messages[1].role, ChatRole::Assistant);

    let conversation = store
        .chats()
        .find_conversation(conversation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(conversation.last_message_at, reply_at);
    assert!(conversation.updated_at.is_some());
}

#[tokio::test]
async fn message_for_unknown_conversation_is_rejected() {
    let store = ready_store(SchemaMode::Auto).await;

    let result = store
        .chats()
        .append_message(NewChatMessage {
            conversation_id: 42,
            role: ChatRole::User,
            content: "Olá".to_string(),
            timestamp: Utc::now(),
            sentiment: None,
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn deleting_conversation_removes_messages() {
    let store = ready_store(SchemaMode::Migrate).await;
    let user = store
        .users()
        .insert(NewUser {
            name: "Bruno".to_string(),
            email: "bruno@workwell.com".to_string(),
        })
        .await
        .unwrap();
    let conversation = store
        .chats()
        .create_conversation(NewChatConversation {
            user_id: user.id,
            started_at: Utc::now(),
            topic: None,
        })
        .await
        .unwrap();
    store
        .chats()
        .append_message(NewChatMessage {
            conversation_id: conversation.id,
            role: ChatRole::User,
            content: "Oi".to_string(),
            timestamp: Utc::now(),
            sentiment: None,
        })
        .await
        .unwrap();

    store.chats().delete_conversation(conversation.id).await.unwrap();

    assert!(store
        .chats()
        .find_conversation(conversation.id)
        .await
        .unwrap()
        .is_none());
    assert!(store
        .chats()
        .list_messages(conversation.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn meditation_sessions_list_latest_first() {
    let store = ready_store(SchemaMode::Auto).await;
    let user = store
        .users()
        .insert(NewUser {
            name: "Carla".to_string(),
            email: "carla@workwell.com".to_string(),
        })
        .await
        .unwrap();

    store.meditations().insert(meditation(user.id, 10, true)).await.unwrap();
    store.meditations().insert(meditation(user.id, 20, false)).await.unwrap();
    store.meditations().insert(meditation(user.id, 15, true)).await.unwrap();

    let sessions = store.meditations().list_by_user(user.id).await.unwrap();
    let days: Vec<_> = sessions
        .iter()
        .map(|s| s.session_date.format("%d").to_string())
        .collect();
    assert_eq!(days, vec!["20", "15", "10"]);

    let completed = store
        .meditations()
        .list_completed_by_user(user.id)
        .await
        .unwrap();
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|s| s.completed));
}

#[tokio::test]
async fn invalid_meditation_session_is_rejected() {
    let store = ready_store(SchemaMode::Auto).await;
    let user = store
        .users()
        .insert(NewUser {
            name: "Davi".to_string(),
            email: "davi@workwell.com".to_string(),
        })
        .await
        .unwrap();

    let mut out_of_scale = meditation(user.id, 1, true);
    out_of_scale.relaxation_after = Some(11);
    assert!(store.meditations().insert(out_of_scale).await.is_err());

    let mut long_type = meditation(user.id, 1, true);
    long_type.session_type = "x".repeat(51);
    assert!(store.meditations().insert(long_type).await.is_err());

    assert!(store.meditations().list_by_user(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_user_cascades_to_chat_and_meditation() {
    print_test_header(
        "deleting_user_cascades_to_chat_and_meditation",
        &["User removal takes conversations, messages and sessions with it"],
    );
    let store = ready_store(SchemaMode::Migrate).await;
    let users = store.users();
    let keep = users
        .insert(NewUser {
            name: "Eva".to_string(),
            email: "eva@workwell.com".to_string(),
        })
        .await
        .unwrap();
    let gone = users
        .insert(NewUser {
            name: "Fábio".to_string(),
            email: "fabio@workwell.com".to_string(),
        })
        .await
        .unwrap();

    for user_id in [keep.id, gone.id] {
        let conversation = store
            .chats()
            .create_conversation(NewChatConversation {
                user_id,
                started_at: Utc::now(),
                topic: None,
            })
            .await
            .unwrap();
        store
            .chats()
            .append_message(NewChatMessage {
                conversation_id: conversation.id,
                role: ChatRole::User,
                content: "Bom dia".to_string(),
                timestamp: Utc::now(),
                sentiment: None,
            })
            .await
            .unwrap();
        store
            .meditations()
            .insert(meditation(user_id, 5, true))
            .await
            .unwrap();
    }

    let gone_conversation = store
        .chats()
        .list_conversations_by_user(gone.id)
        .await
        .unwrap()[0]
        .id;

    users.delete(gone.id).await.unwrap();

    assert!(users.find_by_id(gone.id).await.unwrap().is_none());
    assert!(store
        .chats()
        .list_conversations_by_user(gone.id)
        .await
        .unwrap()
        .is_empty());
    assert!(store
        .chats()
        .list_messages(gone_conversation)
        .await
        .unwrap()
        .is_empty());
    assert!(store.meditations().list_by_user(gone.id).await.unwrap().is_empty());

    assert!(users.find_by_id(keep.id).await.unwrap().is_some());
    assert_eq!(
        store
            .chats()
            .list_conversations_by_user(keep.id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(store.meditations().list_by_user(keep.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_harness_seeds_single_test_company() {
    let db = TestDatabase::new().await.unwrap();

    assert!(matches!(
        db.seed_outcome(),
        Some(SeedOutcome::SeededCompany { .. })
    ));
    let companies = db.companies().list_all().await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Test Company");
    assert_eq!(companies[0].tax_id, "12345678901234");
    assert!(db.departments().is_empty().await.unwrap());
}

#[tokio::test]
async fn test_harness_schema_is_usable_for_full_bootstrap() {
    let db = TestDatabase::new().await.unwrap();

    let report = db
        .bootstrapper()
        .ensure_ready(workwell_store::SeedProfile::Full)
        .await
        .unwrap();

    let company_id = db.companies().first_id().await.unwrap().unwrap();
    assert!(matches!(
        report.seed,
        SeedOutcome::SeededDepartment { company_id: id, .. } if id == company_id
    ));
    assert_eq!(db.companies().count().await.unwrap(), 1);
}
