use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::INFORMATION_SCHEMA;
use crate::system_catalog::value::Row;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColType {
    Text,
    Int64,
    Boolean,
}

impl ColType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColType::Text => "STRING",
            ColType::Int64 => "INT64",
            ColType::Boolean => "BOOL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub coltype: ColType,
}

/// One introspection relation: a fixed column schema plus the synthesizer for its rows.
pub trait InfoSchemaTable: Send + Sync {
    fn name(&self) -> &'static str;
    fn columns(&self) -> &'static [ColumnDef];
    /// Produce the relation's rows. Runs only after every relation is registered,
    /// so `ctx.views()` already lists the complete introspection namespace.
    fn build(&self, _ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        Ok(Vec::new())
    }
}

static REGISTRY: OnceCell<Vec<Arc<dyn InfoSchemaTable>>> = OnceCell::new();

fn registry() -> &'static [Arc<dyn InfoSchemaTable>] {
    REGISTRY.get_or_init(super::information_schema::defaults)
}

/// All relations in registration order.
pub fn all() -> &'static [Arc<dyn InfoSchemaTable>] {
    registry()
}

/// Reduce an input identifier such as `information_schema.tables`,
/// `"INFORMATION_SCHEMA"/"COLUMNS" c` or `indexes;` to a bare relation name.
/// Returns `None` when the identifier names a different schema.
pub fn relation_name_from_str(input: &str) -> Option<String> {
    // Normalize: trim, strip alias after whitespace, strip semicolon and quotes
    let mut base = input.trim().to_string();
    if let Some(idx) = base.find(|c: char| c.is_whitespace()) {
        base.truncate(idx);
    }
    if base.ends_with(';') {
        base.pop();
    }
    let ident = base.replace('\\', "/").replace(['"', '`', '\''], "");
    let dotted = ident.replace('/', ".");
    let parts: Vec<&str> = dotted.split('.').filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        [name] => Some(name.to_string()),
        [.., schema, name] if schema.eq_ignore_ascii_case(INFORMATION_SCHEMA) => Some(name.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_catalog::names::relation;

    #[test]
    fn registry_lists_every_relation_once_in_order() {
        let names: Vec<&str> = all().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                relation::SCHEMATA,
                relation::SPANNER_STATISTICS,
                relation::DATABASE_OPTIONS,
                relation::TABLES,
                relation::COLUMNS,
                relation::COLUMN_COLUMN_USAGE,
                relation::INDEXES,
                relation::INDEX_COLUMNS,
                relation::COLUMN_OPTIONS,
                relation::CHECK_CONSTRAINTS,
                relation::TABLE_CONSTRAINTS,
                relation::CONSTRAINT_TABLE_USAGE,
                relation::REFERENTIAL_CONSTRAINTS,
                relation::KEY_COLUMN_USAGE,
                relation::CONSTRAINT_COLUMN_USAGE,
            ]
        );
    }

    #[test]
    fn column_names_unique_per_relation() {
        for t in all() {
            let mut seen = std::collections::HashSet::new();
            for c in t.columns() {
                assert!(seen.insert(c.name), "duplicate column {}.{}", t.name(), c.name);
            }
        }
    }

    #[test]
    fn identifier_normalization() {
        assert_eq!(relation_name_from_str("information_schema.tables").as_deref(), Some("tables"));
        assert_eq!(relation_name_from_str("  \"INFORMATION_SCHEMA\".\"COLUMNS\" c").as_deref(), Some("COLUMNS"));
        assert_eq!(relation_name_from_str("db/information_schema/indexes;").as_deref(), Some("indexes"));
        assert_eq!(relation_name_from_str("key_column_usage;").as_deref(), Some("key_column_usage"));
        assert_eq!(relation_name_from_str("public.tables"), None);
        assert_eq!(relation_name_from_str("information_schema.check_constraints").as_deref(), Some("check_constraints"));
    }
}
