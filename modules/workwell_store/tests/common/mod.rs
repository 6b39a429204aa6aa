//! Common test utilities: in-memory repositories and a recording schema backend

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;
use workwell_store::contract::{Company, Department, NewCompany, NewDepartment};
use workwell_store::domain::{
    Bootstrapper, CompanyRepository, DepartmentRepository, SchemaBackend, SchemaCapability,
};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Schema operation observed by [`MockSchemaBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCall {
    Ping,
    ApplyPendingMigrations,
    CreateSchemaIfMissing,
}

#[derive(Clone)]
pub struct MockSchemaBackend {
    capability: SchemaCapability,
    calls: Arc<RwLock<Vec<SchemaCall>>>,
    pending_migrations: Arc<AtomicI32>,
    fail_ping: bool,
    fail_migration: bool,
    fail_creation: bool,
}

impl MockSchemaBackend {
    pub fn new(capability: SchemaCapability) -> Self {
        Self {
            capability,
            calls: Arc::new(RwLock::new(Vec::new())),
            pending_migrations: Arc::new(AtomicI32::new(2)),
            fail_ping: false,
            fail_migration: false,
            fail_creation: false,
        }
    }

    pub fn unreachable(mut self) -> Self {
        self.fail_ping = true;
        self
    }

    pub fn failing_migration(mut self) -> Self {
        self.fail_migration = true;
        self
    }

    pub fn failing_creation(mut self) -> Self {
        self.fail_creation = true;
        self
    }

    pub fn calls(&self) -> Vec<SchemaCall> {
        self.calls.read().clone()
    }

    pub fn count(&self, call: SchemaCall) -> usize {
        self.calls.read().iter().filter(|c| **c == call).count()
    }
}

#[async_trait]
impl SchemaBackend for MockSchemaBackend {
    fn capability(&self) -> SchemaCapability {
        self.capability
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.calls.write().push(SchemaCall::Ping);
        if self.fail_ping {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }

    async fn apply_pending_migrations(&self) -> anyhow::Result<usize> {
        self.calls.write().push(SchemaCall::ApplyPendingMigrations);
        if self.fail_migration {
            anyhow::bail!("table ChatConversations already exists with a conflicting definition");
        }
        let applied = self.pending_migrations.swap(0, Ordering::SeqCst);
        Ok(applied as usize)
    }

    async fn create_schema_if_missing(&self) -> anyhow::Result<()> {
        self.calls.write().push(SchemaCall::CreateSchemaIfMissing);
        if self.fail_creation {
            anyhow::bail!("disk I/O error");
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockCompanyRepo {
    data: Arc<RwLock<Vec<Company>>>,
    next_id: Arc<AtomicI32>,
    fail_insert: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl MockCompanyRepo {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            fail_insert: Arc::new(AtomicBool::new(false)),
            fail_reads: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Pre-populate with a company carrying a fixed identifier
    pub fn with_company(self, id: i32, name: &str) -> Self {
        self.data.write().push(Company {
            id,
            name: name.to_string(),
            tax_id: "11222333000181".to_string(),
            sector: "Tecnologia".to_string(),
            registered_at: Utc::now(),
            created_at: Utc::now(),
            updated_at: None,
        });
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self
    }

    pub fn fail_next_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Company> {
        self.data.read().clone()
    }
}

impl Default for MockCompanyRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepo {
    async fn is_empty(&self) -> anyhow::Result<bool> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("read timed out");
        }
        Ok(self.data.read().is_empty())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().len() as u64)
    }

    async fn first_id(&self) -> anyhow::Result<Option<i32>> {
        Ok(self.data.read().first().map(|c| c.id))
    }

    async fn insert(&self, company: NewCompany) -> anyhow::Result<Company> {
        if self.fail_insert.swap(false, Ordering::SeqCst) {
            anyhow::bail!("commit failed");
        }
        let company = Company {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: company.name,
            tax_id: company.tax_id,
            sector: company.sector,
            registered_at: company.registered_at,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.data.write().push(company.clone());
        Ok(company)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Company>> {
        Ok(self.data.read().iter().find(|c| c.id == id).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Company>> {
        Ok(self.snapshot())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        self.data.write().retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockDepartmentRepo {
    data: Arc<RwLock<Vec<Department>>>,
    next_id: Arc<AtomicI32>,
    fail_insert: Arc<AtomicBool>,
}

impl MockDepartmentRepo {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            fail_insert: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_department(self, id: i32, company_id: i32) -> Self {
        self.data.write().push(Department {
            id,
            name: "Engenharia".to_string(),
            description: None,
            company_id,
            created_at: Utc::now(),
            updated_at: None,
        });
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self
    }

    pub fn fail_next_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Department> {
        self.data.read().clone()
    }
}

impl Default for MockDepartmentRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentRepository for MockDepartmentRepo {
    async fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.data.read().is_empty())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().len() as u64)
    }

    async fn insert(&self, department: NewDepartment) -> anyhow::Result<Department> {
        if self.fail_insert.swap(false, Ordering::SeqCst) {
            anyhow::bail!("commit failed");
        }
        let department = Department {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: department.name,
            description: department.description,
            company_id: department.company_id,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.data.write().push(department.clone());
        Ok(department)
    }

    async fn list_by_company(&self, company_id: i32) -> anyhow::Result<Vec<Department>> {
        Ok(self
            .data
            .read()
            .iter()
            .filter(|d| d.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Department>> {
        Ok(self.snapshot())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        self.data.write().retain(|d| d.id != id);
        Ok(())
    }
}

/// Bootstrapper wired to the given mocks
pub fn bootstrapper(
    schema: &MockSchemaBackend,
    companies: &MockCompanyRepo,
    departments: &MockDepartmentRepo,
) -> Bootstrapper {
    Bootstrapper::new(
        Arc::new(schema.clone()),
        Arc::new(companies.clone()),
        Arc::new(departments.clone()),
    )
}
