use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Vendor};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Vendor)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for station and layout operations.
    ///
    /// - User
    /// - Station
    /// - StationLayout
    /// - Vendor
    /// - LayoutShop
    pub fn with_station_tables(self) -> Self {
        self.with_table(User)
            .with_table(Station)
            .with_table(StationLayout)
            .with_table(Vendor)
            .with_table(LayoutShop)
    }

    /// Adds the tables needed for vendor profile and document verification.
    pub fn with_vendor_tables(self) -> Self {
        self.with_table(User)
            .with_table(Vendor)
            .with_table(Document)
            .with_table(Notification)
    }

    /// Adds every table used by the shop allocation workflow.
    ///
    /// Covers stations, layouts, vendors, applications, negotiation, licenses,
    /// agreements, payments, and notifications. Use this when a test walks an
    /// application through approval.
    pub fn with_licensing_tables(self) -> Self {
        self.with_station_tables()
            .with_table(Document)
            .with_table(ShopApplication)
            .with_table(NegotiationRoom)
            .with_table(NegotiationMessage)
            .with_table(License)
            .with_table(VendorAgreement)
            .with_table(VendorPayment)
            .with_table(Notification)
    }

    /// Adds every table in the schema, including inspectors and inspections.
    pub fn with_all_tables(self) -> Self {
        self.with_licensing_tables()
            .with_table(Inspector)
            .with_table(Inspection)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
