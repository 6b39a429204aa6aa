//! SeaORM entities for database tables
//!
//! Table and column names match the layout already deployed, so Rust field
//! names map to them through `column_name`.

/// Companies table
pub mod company {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "EMPRESAS")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "Id")]
        pub id: i32,

        #[sea_orm(column_name = "Nome")]
        pub name: String,

        /// CNPJ without punctuation
        #[sea_orm(column_name = "Cnpj", column_type = "String(StringLen::N(14))")]
        pub tax_id: String,

        #[sea_orm(column_name = "Setor")]
        pub sector: String,

        #[sea_orm(column_name = "DataCadastro")]
        pub registered_at: DateTimeUtc,

        #[sea_orm(column_name = "DataCriacao")]
        pub created_at: DateTimeUtc,

        #[sea_orm(column_name = "DataAtualizacao")]
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with departments
        #[sea_orm(has_many = "super::department::Entity")]
        Departments,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Departments.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Departments table
pub mod department {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "DEPARTAMENTOS")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "Id")]
        pub id: i32,

        #[sea_orm(column_name = "Nome")]
        pub name: String,

        #[sea_orm(column_name = "Descricao")]
        pub description: Option<String>,

        /// Owning company
        #[sea_orm(column_name = "EmpresaId")]
        pub company_id: i32,

        #[sea_orm(column_name = "DataCriacao")]
        pub created_at: DateTimeUtc,

        #[sea_orm(column_name = "DataAtualizacao")]
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::company::Entity",
            from = "Column::CompanyId",
            to = "super::company::Column::Id",
            on_delete = "Cascade"
        )]
        Company,
    }

    impl Related<super::company::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Company.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Users table (minimal shape)
pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "USUARIOS")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "Id")]
        pub id: i32,

        #[sea_orm(column_name = "Nome")]
        pub name: String,

        #[sea_orm(column_name = "Email")]
        pub email: String,

        #[sea_orm(column_name = "DataCriacao")]
        pub created_at: DateTimeUtc,

        #[sea_orm(column_name = "DataAtualizacao")]
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::chat_conversation::Entity")]
        ChatConversations,
        #[sea_orm(has_many = "super::meditation_session::Entity")]
        MeditationSessions,
    }

    impl Related<super::chat_conversation::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ChatConversations.def()
        }
    }

    impl Related<super::meditation_session::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::MeditationSessions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Chat conversations table
pub mod chat_conversation {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "ChatConversations")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "Id")]
        pub id: i32,

        #[sea_orm(column_name = "UsuarioId")]
        pub user_id: i32,

        #[sea_orm(column_name = "DataInicio")]
        pub started_at: DateTimeUtc,

        #[sea_orm(column_name = "DataUltimaMensagem")]
        pub last_message_at: DateTimeUtc,

        #[sea_orm(column_name = "Topico")]
        pub topic: Option<String>,

        #[sea_orm(column_name = "DataCriacao")]
        pub created_at: DateTimeUtc,

        #[sea_orm(column_name = "DataAtualizacao")]
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id",
            on_delete = "Cascade"
        )]
        User,
        #[sea_orm(has_many = "super::chat_message::Entity")]
        Messages,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl Related<super::chat_message::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Messages.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Chat messages table
pub mod chat_message {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "ChatMessages")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "Id")]
        pub id: i32,

        #[sea_orm(column_name = "ChatConversationId")]
        pub conversation_id: i32,

        /// "user" or "assistant"
        #[sea_orm(column_name = "Role", column_type = "String(StringLen::N(20))")]
        pub role: String,

        #[sea_orm(column_name = "Conteudo", column_type = "Text")]
        pub content: String,

        #[sea_orm(column_name = "Timestamp")]
        pub timestamp: DateTimeUtc,

        #[sea_orm(column_name = "Sentimento")]
        pub sentiment: Option<String>,

        #[sea_orm(column_name = "DataCriacao")]
        pub created_at: DateTimeUtc,

        #[sea_orm(column_name = "DataAtualizacao")]
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::chat_conversation::Entity",
            from = "Column::ConversationId",
            to = "super::chat_conversation::Column::Id",
            on_delete = "Cascade"
        )]
        Conversation,
    }

    impl Related<super::chat_conversation::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Conversation.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Meditation sessions table
pub mod meditation_session {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "MeditationSessions")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "Id")]
        pub id: i32,

        #[sea_orm(column_name = "UsuarioId")]
        pub user_id: i32,

        #[sea_orm(column_name = "Tipo", column_type = "String(StringLen::N(50))")]
        pub session_type: String,

        #[sea_orm(column_name = "DuracaoMinutos")]
        pub duration_minutes: i32,

        #[sea_orm(column_name = "DataSessao")]
        pub session_date: DateTimeUtc,

        #[sea_orm(column_name = "Concluida")]
        pub completed: bool,

        #[sea_orm(column_name = "Feedback")]
        pub feedback: Option<String>,

        #[sea_orm(column_name = "NivelRelaxamentoAntes")]
        pub relaxation_before: Option<i32>,

        #[sea_orm(column_name = "NivelRelaxamentoDepois")]
        pub relaxation_after: Option<i32>,

        #[sea_orm(column_name = "DataCriacao")]
        pub created_at: DateTimeUtc,

        #[sea_orm(column_name = "DataAtualizacao")]
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id",
            on_delete = "Cascade"
        )]
        User,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
