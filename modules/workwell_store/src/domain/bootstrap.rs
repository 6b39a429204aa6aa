//! Startup bootstrap - schema and baseline data
//!
//! Brings a backend to a usable state in two sequential steps:
//! - Schema: apply migrations or create the schema, depending on capability
//! - Baseline: make sure at least one company (and, in the full profile, one
//!   department) exists
//!
//! Every write is guarded by a fresh existence check, so calling
//! [`Bootstrapper::ensure_ready`] again after any failure re-derives the right
//! branch. Two bootstrappers racing on the same empty backend can both insert
//! a company; run a single instance.

use super::repository::{CompanyRepository, DepartmentRepository};
use super::schema::{SchemaBackend, SchemaCapability};
use crate::contract::{BootstrapError, NewCompany, NewDepartment, SeedEntity};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which baseline rows to seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedProfile {
    /// Production baseline: default company and default department
    #[default]
    Full,
    /// Test baseline: a placeholder company only
    Minimal,
}

struct DefaultCompany {
    name: &'static str,
    tax_id: &'static str,
    sector: &'static str,
}

struct DefaultDepartment {
    name: &'static str,
    description: &'static str,
}

const WORKWELL_COMPANY: DefaultCompany = DefaultCompany {
    name: "WorkWell",
    tax_id: "00000000000000",
    sector: "Geral",
};

const GENERAL_DEPARTMENT: DefaultDepartment = DefaultDepartment {
    name: "Geral",
    description: "Departamento padrão",
};

const TEST_COMPANY: DefaultCompany = DefaultCompany {
    name: "Test Company",
    tax_id: "12345678901234",
    sector: "Test",
};

impl SeedProfile {
    fn company(&self) -> NewCompany {
        let defaults = match self {
            Self::Full => &WORKWELL_COMPANY,
            Self::Minimal => &TEST_COMPANY,
        };
        NewCompany {
            name: defaults.name.to_string(),
            tax_id: defaults.tax_id.to_string(),
            sector: defaults.sector.to_string(),
            registered_at: Utc::now(),
        }
    }

    fn default_department(&self) -> Option<&'static DefaultDepartment> {
        match self {
            Self::Full => Some(&GENERAL_DEPARTMENT),
            Self::Minimal => None,
        }
    }
}

impl DefaultDepartment {
    fn for_company(&self, company_id: i32) -> NewDepartment {
        NewDepartment {
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            company_id,
        }
    }
}

/// What the schema step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    /// Migrations applied; zero when the schema was already current
    Migrated { applied: usize },
    /// Full schema ensured on a create-only backend
    Created,
}

/// What the baseline step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    SeededCompanyAndDepartment { company_id: i32, department_id: i32 },
    SeededCompany { company_id: i32 },
    SeededDepartment { company_id: i32, department_id: i32 },
    Unchanged,
    /// Seeding turned off by configuration
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub schema: SchemaAction,
    pub seed: SeedOutcome,
}

/// Startup bootstrapper
pub struct Bootstrapper {
    schema: Arc<dyn SchemaBackend>,
    companies: Arc<dyn CompanyRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl Bootstrapper {
    pub fn new(
        schema: Arc<dyn SchemaBackend>,
        companies: Arc<dyn CompanyRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            schema,
            companies,
            departments,
        }
    }

    /// Ensure schema and baseline data exist.
    ///
    /// Safe to call repeatedly: existing rows are never modified and nothing is
    /// inserted twice.
    pub async fn ensure_ready(
        &self,
        profile: SeedProfile,
    ) -> Result<BootstrapReport, BootstrapError> {
        let schema = self.ensure_schema().await?;
        let seed = self.seed_baseline(profile).await?;
        Ok(BootstrapReport { schema, seed })
    }

    /// Ensure the schema only, leaving data untouched
    pub async fn ensure_schema_only(&self) -> Result<BootstrapReport, BootstrapError> {
        let schema = self.ensure_schema().await?;
        tracing::warn!("Baseline seeding disabled; skipping default company and department");
        Ok(BootstrapReport {
            schema,
            seed: SeedOutcome::Skipped,
        })
    }

    /// Test-harness variant: force schema creation and seed the minimal profile.
    ///
    /// Failures are logged and swallowed so harness construction can continue.
    pub async fn prepare_test_backend(&self) -> Option<SeedOutcome> {
        let result = async {
            self.schema
                .create_schema_if_missing()
                .await
                .map_err(BootstrapError::SchemaCreation)?;
            self.seed_baseline(SeedProfile::Minimal).await
        }
        .await;

        match result {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!(error = %e, "An error occurred seeding the test database");
                None
            }
        }
    }

    async fn ensure_schema(&self) -> Result<SchemaAction, BootstrapError> {
        self.schema
            .ping()
            .await
            .map_err(BootstrapError::BackendUnavailable)?;

        match self.schema.capability() {
            SchemaCapability::IncrementalMigration => {
                let applied = self
                    .schema
                    .apply_pending_migrations()
                    .await
                    .map_err(BootstrapError::SchemaMigration)?;
                tracing::info!(applied, "Schema migrations completed");
                Ok(SchemaAction::Migrated { applied })
            }
            SchemaCapability::CreateOnly => {
                self.schema
                    .create_schema_if_missing()
                    .await
                    .map_err(BootstrapError::SchemaCreation)?;
                tracing::info!("Schema ensured from entity definitions");
                Ok(SchemaAction::Created)
            }
        }
    }

    async fn seed_baseline(&self, profile: SeedProfile) -> Result<SeedOutcome, BootstrapError> {
        let no_companies = self
            .companies
            .is_empty()
            .await
            .map_err(|source| BootstrapError::SeedQuery {
                entity: SeedEntity::Company,
                source,
            })?;

        if no_companies {
            let company = self
                .companies
                .insert(profile.company())
                .await
                .map_err(|source| BootstrapError::SeedWrite {
                    entity: SeedEntity::Company,
                    source,
                })?;
            tracing::info!(company_id = company.id, name = %company.name, "Seeded default company");

            let Some(department) = profile.default_department() else {
                return Ok(SeedOutcome::SeededCompany {
                    company_id: company.id,
                });
            };
            let department_id = self
                .insert_department(department.for_company(company.id))
                .await?;
            return Ok(SeedOutcome::SeededCompanyAndDepartment {
                company_id: company.id,
                department_id,
            });
        }

        let Some(department) = profile.default_department() else {
            return Ok(SeedOutcome::Unchanged);
        };

        let no_departments = self
            .departments
            .is_empty()
            .await
            .map_err(|source| BootstrapError::SeedQuery {
                entity: SeedEntity::Department,
                source,
            })?;

        if !no_departments {
            tracing::debug!("Baseline data already present");
            return Ok(SeedOutcome::Unchanged);
        }

        let company_id = self
            .companies
            .first_id()
            .await
            .and_then(|id| id.ok_or_else(|| anyhow::anyhow!("company collection became empty")))
            .map_err(|source| BootstrapError::SeedQuery {
                entity: SeedEntity::Company,
                source,
            })?;

        let department_id = self
            .insert_department(department.for_company(company_id))
            .await?;
        Ok(SeedOutcome::SeededDepartment {
            company_id,
            department_id,
        })
    }

    async fn insert_department(&self, department: NewDepartment) -> Result<i32, BootstrapError> {
        let department = self
            .departments
            .insert(department)
            .await
            .map_err(|source| BootstrapError::SeedWrite {
                entity: SeedEntity::Department,
                source,
            })?;
        tracing::info!(
            department_id = department.id,
            company_id = department.company_id,
            "Seeded default department"
        );
        Ok(department.id)
    }
}
