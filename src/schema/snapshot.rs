//! JSON snapshot document for a schema and its compilation into the [`Schema`] graph.
//!
//! ```json
//! { "tables": [ {
//!     "name": "Users",
//!     "columns": [ { "name": "id", "type": "INT64", "nullable": false },
//!                  { "name": "email", "type": "STRING(256)", "nullable": false } ],
//!     "primary_key": [ "id" ],
//!     "indexes": [ { "name": "UsersByEmail", "columns": [ { "column": "email", "descending": true } ], "unique": true } ]
//! } ] }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::parse_declared_type;
use super::{
    CheckConstraint, Column, ForeignKey, Index, Interleave, KeyColumn, OnDeleteAction, RowDeletionPolicy, Schema, Table,
};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaDef {
    pub tables: Vec<TableDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<TableColumnDef>,
    pub primary_key: Vec<KeyColumnDef>,
    pub indexes: Vec<IndexDef>,
    pub foreign_keys: Vec<ForeignKeyDef>,
    pub check_constraints: Vec<CheckDef>,
    /// Parent table for an interleaved table.
    pub parent: Option<String>,
    pub on_delete: Option<OnDeleteAction>,
    pub row_deletion_policy: Option<DeletionPolicyDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub generated: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub allow_commit_timestamp: bool,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

fn default_nullable() -> bool { true }

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyColumnDef {
    Name(String),
    Full {
        column: String,
        #[serde(default)]
        descending: bool,
    },
}

impl KeyColumnDef {
    fn parts(&self) -> (&str, bool) {
        match self {
            KeyColumnDef::Name(n) => (n.as_str(), false),
            KeyColumnDef::Full { column, descending } => (column.as_str(), *descending),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexDef {
    pub name: String,
    pub columns: Vec<KeyColumnDef>,
    pub storing: Vec<String>,
    pub unique: bool,
    pub null_filtered: bool,
    pub managed: bool,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKeyDef {
    pub name: String,
    pub columns: Vec<String>,
    pub references: String,
    pub referenced_columns: Vec<String>,
    pub referenced_index: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDef {
    pub name: String,
    pub expression: String,
    pub depends_on: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionPolicyDef {
    pub column: String,
    pub older_than_days: i64,
}

struct PartialTable<'a> {
    def: &'a TableDef,
    columns: Vec<Arc<Column>>,
    primary_key: Vec<KeyColumn>,
    indexes: Vec<Arc<Index>>,
}

fn resolve_column(table: &str, columns: &[Arc<Column>], name: &str) -> CatalogResult<Arc<Column>> {
    columns
        .iter()
        .find(|c| c.name == name)
        .cloned()
        .ok_or_else(|| CatalogError::snapshot(format!("unknown column '{}' in table '{}'", name, table)))
}

fn resolve_key(table: &str, columns: &[Arc<Column>], keys: &[KeyColumnDef]) -> CatalogResult<Vec<KeyColumn>> {
    keys.iter()
        .map(|k| {
            let (name, descending) = k.parts();
            Ok(KeyColumn { column: resolve_column(table, columns, name)?, descending })
        })
        .collect()
}

fn check_names(table: &str, columns: &[Arc<Column>], names: &[String]) -> CatalogResult<()> {
    for n in names {
        resolve_column(table, columns, n)?;
    }
    Ok(())
}

impl SchemaDef {
    pub fn from_json_str(text: &str) -> CatalogResult<Self> { Ok(serde_json::from_str(text)?) }

    pub fn from_json_value(value: serde_json::Value) -> CatalogResult<Self> { Ok(serde_json::from_value(value)?) }

    /// Resolve names into the linked schema graph.
    pub fn compile(&self) -> CatalogResult<Schema> {
        let mut partials: Vec<PartialTable<'_>> = Vec::with_capacity(self.tables.len());
        for t in &self.tables {
            if partials.iter().any(|p| p.def.name == t.name) {
                return Err(CatalogError::snapshot(format!("duplicate table '{}'", t.name)));
            }
            let mut columns: Vec<Arc<Column>> = Vec::with_capacity(t.columns.len());
            for c in &t.columns {
                let (column_type, declared_max_length) = parse_declared_type(&c.declared_type)?;
                columns.push(Arc::new(Column {
                    name: c.name.clone(),
                    column_type,
                    declared_max_length,
                    nullable: c.nullable,
                    generated_expr: c.generated.clone(),
                    default_expr: c.default.clone(),
                    allows_commit_timestamp: c.allow_commit_timestamp,
                    dependent_columns: c.depends_on.clone(),
                }));
            }
            for c in &t.columns {
                check_names(&t.name, &columns, &c.depends_on)?;
            }
            let primary_key = resolve_key(&t.name, &columns, &t.primary_key)?;
            let mut indexes: Vec<Arc<Index>> = Vec::with_capacity(t.indexes.len());
            for i in &t.indexes {
                let key_columns = resolve_key(&t.name, &columns, &i.columns)?;
                let stored_columns = i
                    .storing
                    .iter()
                    .map(|n| resolve_column(&t.name, &columns, n))
                    .collect::<CatalogResult<Vec<_>>>()?;
                indexes.push(Arc::new(Index {
                    name: i.name.clone(),
                    table: t.name.clone(),
                    key_columns,
                    stored_columns,
                    unique: i.unique,
                    null_filtered: i.null_filtered,
                    managed: i.managed,
                    parent: i.parent.clone(),
                }));
            }
            partials.push(PartialTable { def: t, columns, primary_key, indexes });
        }

        let mut tables: Vec<Arc<Table>> = Vec::with_capacity(partials.len());
        for p in &partials {
            let t = p.def;
            let mut foreign_keys: Vec<ForeignKey> = Vec::with_capacity(t.foreign_keys.len());
            for fk in &t.foreign_keys {
                check_names(&t.name, &p.columns, &fk.columns)?;
                let referenced = partials.iter().find(|r| r.def.name == fk.references).ok_or_else(|| {
                    CatalogError::snapshot(format!("foreign key '{}' references unknown table '{}'", fk.name, fk.references))
                })?;
                check_names(&referenced.def.name, &referenced.columns, &fk.referenced_columns)?;
                let referenced_index = match &fk.referenced_index {
                    Some(name) => Some(referenced.indexes.iter().find(|i| &i.name == name).cloned().ok_or_else(|| {
                        CatalogError::snapshot(format!(
                            "foreign key '{}' references unknown index '{}' on '{}'",
                            fk.name, name, fk.references
                        ))
                    })?),
                    None => None,
                };
                foreign_keys.push(ForeignKey {
                    name: fk.name.clone(),
                    referencing_table: t.name.clone(),
                    referencing_columns: fk.columns.clone(),
                    referenced_table: fk.references.clone(),
                    referenced_columns: fk.referenced_columns.clone(),
                    referenced_index,
                });
            }
            let mut check_constraints: Vec<CheckConstraint> = Vec::with_capacity(t.check_constraints.len());
            for ck in &t.check_constraints {
                check_names(&t.name, &p.columns, &ck.depends_on)?;
                check_constraints.push(CheckConstraint {
                    name: ck.name.clone(),
                    expression: ck.expression.clone(),
                    dependent_columns: ck.depends_on.clone(),
                });
            }
            let interleave = match &t.parent {
                Some(parent) => {
                    if !partials.iter().any(|r| &r.def.name == parent) {
                        return Err(CatalogError::snapshot(format!(
                            "table '{}' is interleaved in unknown table '{}'",
                            t.name, parent
                        )));
                    }
                    Some(Interleave { parent: parent.clone(), on_delete: t.on_delete.unwrap_or(OnDeleteAction::NoAction) })
                }
                None => None,
            };
            let row_deletion_policy = match &t.row_deletion_policy {
                Some(rdp) => {
                    resolve_column(&t.name, &p.columns, &rdp.column)?;
                    Some(RowDeletionPolicy { column: rdp.column.clone(), older_than_days: rdp.older_than_days })
                }
                None => None,
            };
            tables.push(Arc::new(Table {
                name: t.name.clone(),
                columns: p.columns.clone(),
                primary_key: p.primary_key.clone(),
                indexes: p.indexes.clone(),
                foreign_keys,
                check_constraints,
                interleave,
                row_deletion_policy,
            }));
        }
        debug!(target: "infoschema::schema", "compiled schema snapshot: tables={}", tables.len());
        Ok(Schema::new(tables))
    }
}

/// Read and compile a JSON schema snapshot from disk.
pub fn load_schema(path: &Path) -> CatalogResult<Schema> {
    let text = std::fs::read_to_string(path)?;
    SchemaDef::from_json_str(&text)?.compile()
}
