use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::{Entity, FieldKind, QueryResult, Report, Value};
use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Console tool for managing the UPS logistics database
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MySQL connection URL (overrides DATABASE_URL and UPS_DB_* variables)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Directory for log files (default: logs)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Create any missing tables before showing the menu
    #[arg(long)]
    pub init_schema: bool,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// CLI application
///
/// Owns the shared repository; every menu action goes through one of these methods.
pub struct App<R> {
    repo: R,
}

impl<R: Repository> App<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn init_schema(&self) -> Result<()> {
        self.repo.init_schema().await?;
        info!("Database schema initialized successfully");
        Ok(())
    }

    pub async fn missing_tables(&self) -> Result<Vec<&'static str>> {
        self.repo.missing_tables().await
    }

    /// Validates and inserts a new record.
    ///
    /// `inputs` holds the raw text typed for each catalogue field, in order. Nothing is
    /// sent to the database unless every field validates.
    pub async fn add_record(&self, entity: Entity, inputs: &[String]) -> Result<u64> {
        let values = parse_form(entity, inputs)?;
        for (column, value) in &values {
            self.ensure_reference(entity, column, value).await?;
        }

        let mut prepared = Vec::with_capacity(values.len());
        for (column, value) in values {
            prepared.push((column, self.storable(entity, column, value)?));
        }

        let id = self.repo.insert(entity, &prepared).await?;
        info!("Created {} record {}", entity, id);
        Ok(id)
    }

    pub async fn read_records(&self, entity: Entity) -> Result<QueryResult> {
        self.repo.fetch_all(entity).await
    }

    /// Fetches one record, `NotFound` if the key does not exist.
    pub async fn find_record(&self, entity: Entity, id: i64) -> Result<QueryResult> {
        let result = self.repo.fetch_by_key(entity, id).await?;
        if result.is_empty() {
            return Err(not_found(entity, id));
        }
        Ok(result)
    }

    pub async fn record_exists(&self, entity: Entity, id: i64) -> Result<bool> {
        self.repo
            .record_exists(entity, entity.spec().key, &Value::Int(id))
            .await
    }

    /// Sets one column of an existing record.
    pub async fn update_record(
        &self,
        entity: Entity,
        id: i64,
        column: &str,
        raw: &str,
    ) -> Result<()> {
        let field = entity.spec().field(column).ok_or_else(|| {
            AppError::Cli(format!("{} has no editable field '{}'", entity, column))
        })?;
        let value = field.parse(raw)?;

        if !self.record_exists(entity, id).await? {
            return Err(not_found(entity, id));
        }
        self.ensure_reference(entity, field.column, &value).await?;
        let value = self.storable(entity, field.column, value)?;

        self.repo.update(entity, id, field.column, &value).await?;
        info!("Updated {}.{} for ID {}", entity, field.column, id);
        Ok(())
    }

    /// Deletes a record after checking that it exists.
    ///
    /// A missing ID is reported as [`DeleteOutcome::NotFound`], not as an error.
    pub async fn delete_record(&self, entity: Entity, id: i64) -> Result<DeleteOutcome> {
        if !self.record_exists(entity, id).await? {
            warn!("Delete requested for missing {} ID {}", entity, id);
            return Ok(DeleteOutcome::NotFound);
        }

        let affected = self.repo.delete(entity, id).await?;
        Ok(if affected > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        })
    }

    /// Runs a report, applying its headers and rollup labels.
    pub async fn run_report(
        &self,
        report: &Report,
        raw_param: Option<&str>,
    ) -> Result<QueryResult> {
        let prepared = report.prepare(raw_param)?;
        info!("Running report: {}", report.title);
        let result = self.repo.run_query(&prepared).await?;
        Ok(result
            .with_headers(report.headers)
            .with_null_labels(report.null_labels))
    }

    /// Checks that a foreign-key value points at an existing row.
    async fn ensure_reference(&self, entity: Entity, column: &str, value: &Value) -> Result<()> {
        let Some(field) = entity.spec().field(column) else {
            return Ok(());
        };
        let FieldKind::Reference(target) = field.kind else {
            return Ok(());
        };
        let Value::Int(id) = value else {
            return Ok(());
        };

        if self.record_exists(target, *id).await? {
            Ok(())
        } else {
            Err(not_found(target, *id))
        }
    }

    /// Converts a validated value into what gets stored (passwords are hashed).
    fn storable(&self, entity: Entity, column: &str, value: Value) -> Result<Value> {
        match (entity.spec().field(column).map(|f| f.kind), value) {
            (Some(FieldKind::Password), Value::Text(plain)) => {
                Ok(Value::Text(hash_password(&plain)?))
            },
            (_, value) => Ok(value),
        }
    }
}

/// Validates raw form input against the entity's catalogue fields.
pub fn parse_form(entity: Entity, inputs: &[String]) -> Result<Vec<(&'static str, Value)>> {
    let fields = entity.spec().fields;
    if inputs.len() != fields.len() {
        return Err(AppError::Cli(format!(
            "{} expects {} fields, got {}",
            entity,
            fields.len(),
            inputs.len()
        )));
    }

    fields
        .iter()
        .zip(inputs)
        .map(|(field, raw)| Ok((field.column, field.parse(raw)?)))
        .collect()
}

fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

fn not_found(entity: Entity, id: i64) -> AppError {
    AppError::NotFound {
        entity: entity.name().to_string(),
        id: id.to_string(),
    }
}
