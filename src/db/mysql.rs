//! Provides MySQL database interaction functionalities using `sqlx`.
//!
//! Includes establishing the shared connection, creating the schema, the generic
//! catalogue-driven CRUD statements and execution of analytical reports.
//! Also contains integration tests for database operations (requires the
//! `integration-tests` feature).

use super::{rows, schema, statements, Repository};
use crate::error::{AppError, Result};
use crate::models::{Entity, PreparedQuery, QueryResult, Value};
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::query::Query;
use sqlx::Row;
use tracing::{debug, error, info};

/// Represents the shared database connection and provides methods for database operations.
///
/// The pool is capped at a single connection: every menu handler works through the
/// same handle, one statement at a time.
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Opens the shared connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the server cannot be reached or rejects the credentials.
    pub async fn connect(options: MySqlConnectOptions) -> Result<Self> {
        info!("Connecting to database...");

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                AppError::Db(e.into())
            })?;

        info!("Connected to database successfully");
        Ok(Self { pool })
    }

    /// Closes the connection. Called once on normal exit.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}

/// Binds a [`Value`] to the next `?` placeholder.
fn bind_value<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: &Value,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Int(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.clone()),
        Value::Decimal(v) => query.bind(*v),
        Value::Date(v) => query.bind(*v),
    }
}

/// Rejects column names that are not part of the entity's catalogue entry.
fn ensure_column(entity: Entity, column: &str) -> Result<()> {
    if entity.spec().has_column(column) {
        Ok(())
    } else {
        Err(AppError::Cli(format!(
            "Unknown column '{}' for {}",
            column,
            entity.name()
        )))
    }
}

impl Repository for Database {
    /// Creates every table of the logistics schema in foreign-key order.
    ///
    /// Uses `CREATE TABLE IF NOT EXISTS`, so it can be safely run multiple times.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if any statement fails.
    async fn init_schema(&self) -> Result<()> {
        info!("Initializing database schema (if necessary)...");

        for (table, ddl) in schema::TABLES {
            sqlx::query(ddl).execute(&self.pool).await.map_err(|e| {
                error!("Failed to create table {}: {}", table, e);
                AppError::Db(e.into())
            })?;
            debug!("Table {} ready", table);
        }

        info!("Database schema initialized successfully");
        Ok(())
    }

    async fn missing_tables(&self) -> Result<Vec<&'static str>> {
        debug!("Checking which tables exist...");
        // CAST keeps the column a character type across MySQL versions.
        let rows = sqlx::query(
            "SELECT CAST(table_name AS CHAR) FROM information_schema.tables \
             WHERE table_schema = DATABASE()",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list tables: {}", e);
            AppError::Db(e.into())
        })?;

        let mut existing = Vec::with_capacity(rows.len());
        for row in &rows {
            existing.push(row.try_get_unchecked::<String, _>(0)?);
        }

        let missing: Vec<&'static str> = schema::TABLES
            .iter()
            .map(|(table, _)| *table)
            .filter(|table| !existing.iter().any(|e| e.eq_ignore_ascii_case(table)))
            .collect();
        debug!("Missing tables: {:?}", missing);
        Ok(missing)
    }

    async fn record_exists(&self, entity: Entity, column: &str, value: &Value) -> Result<bool> {
        ensure_column(entity, column)?;
        let sql = statements::count_where(entity.spec(), column);

        let row = bind_value(sqlx::query(&sql), value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to count {} rows: {}", entity.name(), e);
                AppError::Db(e.into())
            })?;
        let count: i64 = row.try_get(0)?;
        debug!("{}.{} = {} -> {} row(s)", entity.spec().table, column, value, count);
        Ok(count > 0)
    }

    async fn insert(&self, entity: Entity, values: &[(&'static str, Value)]) -> Result<u64> {
        let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
        for column in &columns {
            ensure_column(entity, column)?;
        }
        let sql = statements::insert(entity.spec(), &columns);

        let mut query = sqlx::query(&sql);
        for (_, value) in values {
            query = bind_value(query, value);
        }

        let result = query.execute(&self.pool).await.map_err(|e| {
            error!("Failed to insert into {}: {}", entity.spec().table, e);
            AppError::Db(e.into())
        })?;

        let id = result.last_insert_id();
        info!("Inserted {} record with ID {}", entity.name(), id);
        Ok(id)
    }

    async fn fetch_all(&self, entity: Entity) -> Result<QueryResult> {
        let spec = entity.spec();
        let rows = sqlx::query(&statements::select_all(spec))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to read {}: {}", spec.table, e);
                AppError::Db(e.into())
            })?;

        info!("Retrieved {} {} record(s)", rows.len(), entity.name());
        rows::to_query_result(&rows, &spec.columns())
    }

    async fn fetch_by_key(&self, entity: Entity, id: i64) -> Result<QueryResult> {
        let spec = entity.spec();
        let rows = sqlx::query(&statements::select_by_key(spec))
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to read {} {}: {}", spec.table, id, e);
                AppError::Db(e.into())
            })?;

        rows::to_query_result(&rows, &spec.columns())
    }

    async fn update(&self, entity: Entity, id: i64, column: &str, value: &Value) -> Result<u64> {
        ensure_column(entity, column)?;
        let sql = statements::update(entity.spec(), column);

        let result = bind_value(sqlx::query(&sql), value)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to update {} {}: {}", entity.spec().table, id, e);
                AppError::Db(e.into())
            })?;

        info!(
            "Updated {}.{} for ID {} ({} row(s))",
            entity.spec().table,
            column,
            id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn delete(&self, entity: Entity, id: i64) -> Result<u64> {
        let result = sqlx::query(&statements::delete(entity.spec()))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to delete {} {}: {}", entity.spec().table, id, e);
                AppError::Db(e.into())
            })?;

        info!(
            "Deleted {} with ID {} ({} row(s))",
            entity.name(),
            id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn run_query(&self, query: &PreparedQuery) -> Result<QueryResult> {
        debug!("Running report with {} bound value(s)", query.binds.len());

        let mut statement = sqlx::query(&query.sql);
        for value in &query.binds {
            statement = bind_value(statement, value);
        }

        let rows = statement.fetch_all(&self.pool).await.map_err(|e| {
            error!("Report query failed: {}", e);
            AppError::Db(e.into())
        })?;

        info!("Report returned {} row(s)", rows.len());
        rows::to_query_result(&rows, &[])
    }
}

// --- Integration Tests ---
// These tests interact with a real MySQL database.
// They are gated by the `integration-tests` feature flag.
// Run using: `cargo test --features integration-tests`
// Requires a running MySQL 8 instance configured via DATABASE_URL env var.
#[cfg(test)]
#[cfg(feature = "integration-tests")]
mod tests {
    use super::*;
    use crate::models::{ReportCategory, ReportParam};
    use chrono::NaiveDate;
    use sqlx::types::Decimal;
    use std::str::FromStr;

    fn date(s: &str) -> Value {
        Value::Date(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }

    fn amount(s: &str) -> Value {
        Value::Decimal(Decimal::from_str(s).unwrap())
    }

    async fn database(pool: MySqlPool) -> Result<Database> {
        let db = Database { pool };
        db.init_schema().await?;
        Ok(db)
    }

    async fn insert_customer(db: &Database, first: &str, email: &str) -> Result<i64> {
        let id = db
            .insert(
                Entity::Customers,
                &[
                    ("first_name", first.into()),
                    ("last_name", "Tester".into()),
                    ("email", email.into()),
                    ("phone_number", Value::Null),
                    ("created_date", date("2024-01-01")),
                ],
            )
            .await?;
        Ok(id as i64)
    }

    async fn insert_address(db: &Database, customer_id: i64, city: &str) -> Result<i64> {
        let id = db
            .insert(
                Entity::Addresses,
                &[
                    ("customer_id", Value::Int(customer_id)),
                    ("street", "1 Main St".into()),
                    ("city", city.into()),
                    ("postal_code", "30301".into()),
                    ("country", "USA".into()),
                ],
            )
            .await?;
        Ok(id as i64)
    }

    async fn insert_shipment(db: &Database, customer_id: i64, address_id: i64) -> Result<i64> {
        let id = db
            .insert(
                Entity::Shipments,
                &[
                    ("customer_id", Value::Int(customer_id)),
                    ("origin_address_id", Value::Int(address_id)),
                    ("destination_address_id", Value::Int(address_id)),
                    ("shipment_date", date("2024-03-01")),
                    ("shipment_status", "In Transit".into()),
                ],
            )
            .await?;
        Ok(id as i64)
    }

    async fn run(
        db: &Database,
        category: ReportCategory,
        title: &str,
        param: Option<&str>,
    ) -> Result<QueryResult> {
        let report = category
            .reports()
            .iter()
            .find(|r| r.title == title)
            .expect("report exists");
        let prepared = report.prepare(param)?;
        Ok(db
            .run_query(&prepared)
            .await?
            .with_headers(report.headers)
            .with_null_labels(report.null_labels))
    }

    #[sqlx::test]
    async fn test_init_schema_is_idempotent(pool: MySqlPool) -> Result<()> {
        let db = Database { pool };
        assert_eq!(db.missing_tables().await?.len(), schema::TABLES.len());

        db.init_schema().await?;
        db.init_schema().await?;
        assert!(db.missing_tables().await?.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_inserted_user_reads_back_unchanged(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let role_id = db
            .insert(Entity::UserRole, &[("role_name", "Dispatcher".into())])
            .await?;

        let user_id = db
            .insert(
                Entity::Users,
                &[
                    ("first_name", "Ada".into()),
                    ("last_name", "Lovelace".into()),
                    ("email", "ada@ups.com".into()),
                    ("phone_number", "5551234567".into()),
                    ("role_id", Value::Int(role_id as i64)),
                    ("Password", "$argon2id$stub".into()),
                ],
            )
            .await?;

        let result = db.fetch_by_key(Entity::Users, user_id as i64).await?;
        assert_eq!(result.len(), 1);
        assert_eq!(result.cell(0, "user_id"), Some(user_id.to_string().as_str()));
        assert_eq!(result.cell(0, "first_name"), Some("Ada"));
        assert_eq!(result.cell(0, "email"), Some("ada@ups.com"));
        assert_eq!(result.cell(0, "phone_number"), Some("5551234567"));
        assert_eq!(result.cell(0, "role_id"), Some(role_id.to_string().as_str()));
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_and_delete(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let id = insert_customer(&db, "Grace", "grace@ups.com").await?;

        let updated = db
            .update(Entity::Customers, id, "phone_number", &"5550001111".into())
            .await?;
        assert_eq!(updated, 1);
        let result = db.fetch_by_key(Entity::Customers, id).await?;
        assert_eq!(result.cell(0, "phone_number"), Some("5550001111"));
        assert_eq!(result.cell(0, "created_date"), Some("2024-01-01"));

        assert!(db.record_exists(Entity::Customers, "customer_id", &Value::Int(id)).await?);
        assert_eq!(db.delete(Entity::Customers, id).await?, 1);
        assert!(!db.record_exists(Entity::Customers, "customer_id", &Value::Int(id)).await?);
        Ok(())
    }

    #[sqlx::test]
    async fn test_delete_missing_customer_affects_nothing(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        assert_eq!(db.delete(Entity::Customers, 9999).await?, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn test_unknown_column_is_rejected(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let err = db
            .record_exists(Entity::Customers, "1=1 OR customer_id", &Value::Int(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Cli(_)));
        Ok(())
    }

    #[sqlx::test]
    async fn test_duplicate_email_is_a_constraint_violation(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        insert_customer(&db, "Alan", "alan@ups.com").await?;
        let err = insert_customer(&db, "Alan", "alan@ups.com").await.unwrap_err();
        assert!(err.is_constraint_violation());
        Ok(())
    }

    #[sqlx::test]
    async fn test_pickup_status_distribution(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Linus", "linus@ups.com").await?;
        let address = insert_address(&db, customer, "Atlanta").await?;
        for status in ["Pending", "Pending", "Pending", "Completed"] {
            db.insert(
                Entity::PickupRequests,
                &[
                    ("customer_id", Value::Int(customer)),
                    ("address_id", Value::Int(address)),
                    ("pickup_date", date("2024-03-02")),
                    ("pickup_status", status.into()),
                ],
            )
            .await?;
        }

        let result = run(
            &db,
            ReportCategory::Olap,
            "Distribution of Pickup Request Statuses",
            None,
        )
        .await?;
        assert_eq!(result.columns, vec!["Pickup Status", "Count", "Percentage (%)"]);
        assert_eq!(result.cell(0, "Pickup Status"), Some("Pending"));
        assert_eq!(result.cell(0, "Count"), Some("3"));
        assert_eq!(result.cell(0, "Percentage (%)"), Some("75.00"));
        assert_eq!(result.cell(1, "Percentage (%)"), Some("25.00"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_payment_rollup_labels_grand_total(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Edsger", "edsger@ups.com").await?;
        for (day, value) in [("2024-01-05", "10.00"), ("2024-02-07", "15.50")] {
            db.insert(
                Entity::Payments,
                &[
                    ("customer_id", Value::Int(customer)),
                    ("amount", amount(value)),
                    ("payment_date", date(day)),
                    ("payment_method", "Cash".into()),
                ],
            )
            .await?;
        }

        let result = run(&db, ReportCategory::Olap, "Monthly Payments with Rollup", None).await?;
        let last = result.len() - 1;
        assert_eq!(result.cell(last, "Year"), Some("Total"));
        assert_eq!(result.cell(last, "Payments"), Some("2"));
        assert_eq!(result.cell(last, "Amount"), Some("25.50"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_packages_in_selected_shipments(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Barbara", "barbara@ups.com").await?;
        let address = insert_address(&db, customer, "Boston").await?;
        let first = insert_shipment(&db, customer, address).await?;
        let second = insert_shipment(&db, customer, address).await?;
        let third = insert_shipment(&db, customer, address).await?;
        for shipment in [first, second, third] {
            db.insert(
                Entity::Packages,
                &[
                    ("shipment_id", Value::Int(shipment)),
                    ("weight", amount("2.50")),
                ],
            )
            .await?;
        }

        let report = ReportCategory::SetMembership
            .reports()
            .iter()
            .find(|r| r.param == Some(ReportParam::ShipmentIds))
            .unwrap();
        let prepared = report.prepare(Some(format!("{}, {}", first, third).as_str()))?;
        let result = db.run_query(&prepared).await?.with_headers(report.headers);

        assert_eq!(result.len(), 2);
        assert_eq!(result.cell(0, "Shipment ID"), Some(first.to_string().as_str()));
        assert_eq!(result.cell(1, "Shipment ID"), Some(third.to_string().as_str()));
        Ok(())
    }

    async fn insert_package(db: &Database, shipment_id: i64, weight: &str) -> Result<i64> {
        let id = db
            .insert(
                Entity::Packages,
                &[
                    ("shipment_id", Value::Int(shipment_id)),
                    ("weight", amount(weight)),
                ],
            )
            .await?;
        Ok(id as i64)
    }

    async fn insert_attempt(
        db: &Database,
        shipment_id: i64,
        day: &str,
        status: &str,
    ) -> Result<()> {
        db.insert(
            Entity::DeliveryAttempts,
            &[
                ("shipment_id", Value::Int(shipment_id)),
                ("attempt_date", date(day)),
                ("attempt_status", status.into()),
            ],
        )
        .await?;
        Ok(())
    }

    async fn insert_payment(db: &Database, customer_id: i64, value: &str) -> Result<()> {
        db.insert(
            Entity::Payments,
            &[
                ("customer_id", Value::Int(customer_id)),
                ("amount", amount(value)),
                ("payment_date", date("2024-03-04")),
                ("payment_method", "Credit Card".into()),
            ],
        )
        .await?;
        Ok(())
    }

    #[sqlx::test]
    async fn test_daily_delivery_success_rate(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Ken", "ken@ups.com").await?;
        let address = insert_address(&db, customer, "Denver").await?;
        let shipment = insert_shipment(&db, customer, address).await?;
        for status in ["Success", "Failed", "Success"] {
            insert_attempt(&db, shipment, "2024-03-05", status).await?;
        }
        insert_attempt(&db, shipment, "2024-03-06", "Failed").await?;

        let result = run(&db, ReportCategory::Olap, "Daily Delivery Success Rate", None).await?;
        assert_eq!(result.len(), 2);
        assert_eq!(result.cell(0, "Date"), Some("2024-03-05"));
        assert_eq!(result.cell(0, "Total Attempts"), Some("3"));
        assert_eq!(result.cell(0, "Successes"), Some("2"));
        assert_eq!(result.cell(0, "Success Rate (%)"), Some("66.67"));
        assert_eq!(result.cell(1, "Date"), Some("2024-03-06"));
        assert_eq!(result.cell(1, "Successes"), Some("0"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_customer_shipment_percentile(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let busy = insert_customer(&db, "Margaret", "margaret@ups.com").await?;
        let quiet = insert_customer(&db, "Dennis", "dennis@ups.com").await?;
        let busy_address = insert_address(&db, busy, "Houston").await?;
        let quiet_address = insert_address(&db, quiet, "Reno").await?;
        insert_shipment(&db, busy, busy_address).await?;
        insert_shipment(&db, busy, busy_address).await?;
        insert_shipment(&db, quiet, quiet_address).await?;

        let result = run(
            &db,
            ReportCategory::Olap,
            "Customer Shipment Volume with Percentile Rank",
            None,
        )
        .await?;
        assert_eq!(result.len(), 2);
        assert_eq!(result.cell(0, "Customer ID"), Some(busy.to_string().as_str()));
        assert_eq!(result.cell(0, "Total Shipments"), Some("2"));
        assert_eq!(result.cell(0, "Percentile"), Some("0"));
        assert_eq!(result.cell(1, "Customer ID"), Some(quiet.to_string().as_str()));
        assert_eq!(result.cell(1, "Percentile"), Some("1"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_extra_dimension_rows_do_not_inflate_weight(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Frances", "frances@ups.com").await?;
        let address = insert_address(&db, customer, "Omaha").await?;
        let shipment = insert_shipment(&db, customer, address).await?;
        let package = insert_package(&db, shipment, "5.00").await?;
        for side in ["10.00", "20.00"] {
            db.insert(
                Entity::PackageDimension,
                &[
                    ("package_id", Value::Int(package)),
                    ("length", amount(side)),
                    ("width", amount("1.00")),
                    ("height", amount("1.00")),
                ],
            )
            .await?;
        }

        let result = run(
            &db,
            ReportCategory::AdvancedAggregates,
            "Package Volume and Weight by Status",
            None,
        )
        .await?;
        assert_eq!(result.len(), 1);
        assert_eq!(result.cell(0, "Status"), Some("Unassigned"));
        assert_eq!(result.cell(0, "Packages"), Some("1"));
        assert_eq!(result.cell(0, "Total Weight (kg)"), Some("5.00"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_all_comparison_needs_customer_payments(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let payer = insert_customer(&db, "Niklaus", "niklaus@ups.com").await?;
        let other = insert_customer(&db, "Tony", "tony@ups.com").await?;
        let silent = insert_customer(&db, "John", "john@ups.com").await?;
        insert_payment(&db, payer, "10.00").await?;
        insert_payment(&db, other, "20.00").await?;

        let title = "Payments Larger Than All of a Customer's Payments (ALL)";
        let payer_id = payer.to_string();
        let larger = run(&db, ReportCategory::SetComparison, title, Some(&payer_id)).await?;
        assert_eq!(larger.len(), 1);
        assert_eq!(larger.cell(0, "Customer ID"), Some(other.to_string().as_str()));

        let silent_id = silent.to_string();
        let none = run(&db, ReportCategory::SetComparison, title, Some(&silent_id)).await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_zero_weight_shipment_share_is_labelled(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Leslie", "leslie@ups.com").await?;
        let address = insert_address(&db, customer, "Provo").await?;
        let shipment = insert_shipment(&db, customer, address).await?;
        insert_package(&db, shipment, "0.00").await?;

        let result = run(
            &db,
            ReportCategory::WindowFunctions,
            "Package Weight Share within Shipment",
            None,
        )
        .await?;
        assert_eq!(result.cell(0, "Share of Shipment (%)"), Some("-"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_every_report_runs_on_seeded_data(pool: MySqlPool) -> Result<()> {
        let db = database(pool).await?;
        let customer = insert_customer(&db, "Barbara", "liskov@ups.com").await?;
        let address = insert_address(&db, customer, "Boston").await?;
        let shipment = insert_shipment(&db, customer, address).await?;
        insert_package(&db, shipment, "3.25").await?;
        insert_attempt(&db, shipment, "2024-03-05", "Failed").await?;
        insert_payment(&db, customer, "42.00").await?;
        db.insert(
            Entity::PickupRequests,
            &[
                ("customer_id", Value::Int(customer)),
                ("address_id", Value::Int(address)),
                ("pickup_date", date("2024-03-02")),
                ("pickup_status", "Pending".into()),
            ],
        )
        .await?;

        let customer_id = customer.to_string();
        let shipment_id = shipment.to_string();
        for category in ReportCategory::ALL {
            for report in category.reports() {
                let param = report.param.map(|param| match param {
                    ReportParam::ShipmentIds | ReportParam::ShipmentId => shipment_id.as_str(),
                    ReportParam::CustomerId => customer_id.as_str(),
                    ReportParam::MinimumAmount => "1.00",
                });
                let result = run(&db, category, report.title, param).await?;
                if !result.is_empty() {
                    assert_eq!(
                        result.columns.len(),
                        report.headers.len(),
                        "{}",
                        report.title
                    );
                    assert_eq!(result.columns[0], report.headers[0], "{}", report.title);
                }
            }
        }
        Ok(())
    }
}
