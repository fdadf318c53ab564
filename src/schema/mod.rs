//! Read-only schema snapshot consumed by the information schema.
//!
//! The graph is produced by an upstream schema-compilation stage (see
//! [`snapshot`] for the JSON document form) and is treated as already valid:
//! nothing here checks referential integrity beyond name resolution at load.

pub mod snapshot;
pub mod types;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use snapshot::{load_schema, SchemaDef};
pub use types::ColumnType;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub declared_max_length: Option<i64>,
    pub nullable: bool,
    /// Expression text for a generated column, as stored by DDL processing (usually parenthesized).
    pub generated_expr: Option<String>,
    pub default_expr: Option<String>,
    pub allows_commit_timestamp: bool,
    /// Columns of the same table a generated column reads.
    pub dependent_columns: Vec<String>,
}

impl Column {
    pub fn is_generated(&self) -> bool { self.generated_expr.is_some() }

    pub fn spanner_type(&self) -> String { self.column_type.render(self.declared_max_length) }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyColumn {
    pub column: Arc<Column>,
    pub descending: bool,
}

impl KeyColumn {
    pub fn name(&self) -> &str { &self.column.name }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub name: String,
    pub table: String,
    pub key_columns: Vec<KeyColumn>,
    pub stored_columns: Vec<Arc<Column>>,
    pub unique: bool,
    pub null_filtered: bool,
    /// Created and owned by the system (e.g. a foreign key backing index).
    pub managed: bool,
    /// Table the index is interleaved in, if any.
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub name: String,
    pub referencing_table: String,
    pub referencing_columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    /// Explicit unique index on the referenced table. `None` means the
    /// referenced table's primary key backs the constraint.
    pub referenced_index: Option<Arc<Index>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConstraint {
    pub name: String,
    pub expression: String,
    pub dependent_columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnDeleteAction {
    Cascade,
    #[serde(alias = "NO ACTION")]
    NoAction,
}

impl OnDeleteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnDeleteAction::Cascade => "CASCADE",
            OnDeleteAction::NoAction => "NO ACTION",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interleave {
    pub parent: String,
    pub on_delete: OnDeleteAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDeletionPolicy {
    pub column: String,
    pub older_than_days: i64,
}

impl RowDeletionPolicy {
    pub fn render(&self) -> String {
        format!("OLDER_THAN({}, INTERVAL {} DAY)", self.column, self.older_than_days)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Arc<Column>>,
    pub primary_key: Vec<KeyColumn>,
    pub indexes: Vec<Arc<Index>>,
    pub foreign_keys: Vec<ForeignKey>,
    pub check_constraints: Vec<CheckConstraint>,
    pub interleave: Option<Interleave>,
    pub row_deletion_policy: Option<RowDeletionPolicy>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn index(&self, name: &str) -> Option<&Arc<Index>> {
        self.indexes.iter().find(|i| i.name == name)
    }

    pub fn parent(&self) -> Option<&str> { self.interleave.as_ref().map(|i| i.parent.as_str()) }
}

/// Ordered set of user tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    tables: Vec<Arc<Table>>,
}

impl Schema {
    pub fn new(tables: Vec<Arc<Table>>) -> Self { Self { tables } }

    pub fn empty() -> Self { Self::default() }

    pub fn tables(&self) -> &[Arc<Table>] { &self.tables }

    pub fn find_table(&self, name: &str) -> Option<&Arc<Table>> {
        self.tables.iter().find(|t| t.name == name)
    }
}
