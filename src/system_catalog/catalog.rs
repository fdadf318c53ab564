//! Assembly of the `INFORMATION_SCHEMA` catalog from a schema snapshot.
//!
//! Construction runs in two phases. Every registered relation first gets an
//! empty [`ViewTable`]; only then are rows synthesized, so relations that
//! describe the introspection namespace see all of it regardless of
//! registration order. Rows are installed after every synthesizer has run.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::schema::Schema;
use crate::system_catalog::metadata::{ColumnMeta, IndexColumnMeta, SelfDescription};
use crate::system_catalog::names::INFORMATION_SCHEMA;
use crate::system_catalog::registry::{self, InfoSchemaTable};
use crate::system_catalog::view_table::ViewTable;

/// Inputs visible to every row synthesizer during phase two.
pub struct BuildContext<'a> {
    schema: &'a Schema,
    views: &'a [ViewTable],
    metadata: &'a SelfDescription,
}

/// A primary-key column of an introspection relation with its resolved ordinal.
#[derive(Debug, Clone, Copy)]
pub struct ViewKeyColumn<'a> {
    pub column: &'static str,
    pub meta: &'a IndexColumnMeta,
    pub ordinal: i64,
}

impl<'a> BuildContext<'a> {
    pub fn new(schema: &'a Schema, views: &'a [ViewTable], metadata: &'a SelfDescription) -> Self {
        Self { schema, views, metadata }
    }

    pub fn schema(&self) -> &'a Schema { self.schema }

    /// Every registered relation, in registration order.
    pub fn views(&self) -> &'a [ViewTable] { self.views }

    /// Metadata for a column of an introspection relation. A missing entry is a
    /// build defect and fails the whole construction.
    pub fn column_meta(&self, table: &str, column: &str) -> CatalogResult<&'a ColumnMeta> {
        match self.metadata.column(table, column) {
            Some(m) => Ok(m),
            None => {
                error!(target: "infoschema::catalog", table, column, "missing metadata for column {}.{}", table, column);
                Err(CatalogError::missing_metadata(table, column))
            }
        }
    }

    /// Non-nullable columns of an introspection relation, in column order.
    pub fn view_not_null_columns(&self, view: &ViewTable) -> CatalogResult<Vec<&'static str>> {
        let mut out = Vec::new();
        for c in view.columns() {
            if !self.column_meta(view.name(), c.name)?.is_nullable {
                out.push(c.name);
            }
        }
        Ok(out)
    }

    /// Primary-key columns of an introspection relation, in column order. The
    /// ordinal is the stored one when positive, else the next sequential value.
    pub fn view_key_columns(&self, view: &ViewTable) -> Vec<ViewKeyColumn<'a>> {
        let mut next = 1;
        let mut out = Vec::new();
        for c in view.columns() {
            let Some(meta) = self.metadata.key_column(view.name(), c.name) else { continue };
            let ordinal = if meta.primary_key_ordinal > 0 {
                meta.primary_key_ordinal
            } else {
                next += 1;
                next - 1
            };
            out.push(ViewKeyColumn { column: c.name, meta, ordinal });
        }
        out
    }
}

/// The assembled, immutable set of introspection relations.
#[derive(Debug, Clone, PartialEq)]
pub struct InformationSchemaCatalog {
    views: Vec<ViewTable>,
}

impl InformationSchemaCatalog {
    pub fn new(schema: &Schema) -> CatalogResult<Self> {
        Self::with_metadata(schema, SelfDescription::builtin()?)
    }

    /// Build against a custom store. A store that describes any column twice is rejected.
    pub fn with_metadata(schema: &Schema, metadata: &SelfDescription) -> CatalogResult<Self> {
        metadata.validate()?;
        Self::assemble(schema, metadata, registry::all())
    }

    fn assemble(
        schema: &Schema,
        metadata: &SelfDescription,
        relations: &[Arc<dyn InfoSchemaTable>],
    ) -> CatalogResult<Self> {
        // Phase 1: register every relation.
        let mut views: Vec<ViewTable> =
            relations.iter().map(|r| ViewTable::new(r.name(), r.columns())).collect();

        // Phase 2: synthesize against the complete namespace.
        let contents = {
            let ctx = BuildContext::new(schema, &views, metadata);
            let mut contents = Vec::with_capacity(relations.len());
            for r in relations {
                let rows = r.build(&ctx)?;
                debug!(target: "infoschema::catalog", relation = r.name(), rows = rows.len(), "synthesized");
                contents.push(rows);
            }
            contents
        };
        for (view, rows) in views.iter_mut().zip(contents) {
            view.set_contents(rows)?;
        }

        let catalog = Self { views };
        info!(
            target: "infoschema::catalog",
            user_tables = schema.tables().len(),
            relations = catalog.views.len(),
            rows = catalog.total_rows(),
            "information schema built"
        );
        Ok(catalog)
    }

    pub fn name(&self) -> &'static str { INFORMATION_SCHEMA }

    pub fn tables(&self) -> &[ViewTable] { &self.views }

    pub fn table(&self, name: &str) -> Option<&ViewTable> {
        self.views.iter().find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a possibly qualified, quoted or aliased identifier.
    pub fn lookup(&self, ident: &str) -> Option<&ViewTable> {
        registry::relation_name_from_str(ident).and_then(|n| self.table(&n))
    }

    pub fn total_rows(&self) -> usize { self.views.iter().map(|v| v.num_rows()).sum() }
}

/// Shared, swappable reference to the current catalog.
///
/// Readers keep the `Arc` they got from [`CatalogHandle::snapshot`] for as long
/// as they need it; a rebuild only affects later snapshots.
pub struct CatalogHandle {
    current: RwLock<Arc<InformationSchemaCatalog>>,
}

impl CatalogHandle {
    pub fn new(schema: &Schema) -> CatalogResult<Self> {
        Ok(Self::from_catalog(InformationSchemaCatalog::new(schema)?))
    }

    pub fn from_catalog(catalog: InformationSchemaCatalog) -> Self {
        Self { current: RwLock::new(Arc::new(catalog)) }
    }

    pub fn snapshot(&self) -> Arc<InformationSchemaCatalog> { self.current.read().clone() }

    pub fn rebuild(&self, schema: &Schema) -> CatalogResult<Arc<InformationSchemaCatalog>> {
        self.rebuild_with_metadata(schema, SelfDescription::builtin()?)
    }

    /// Build a catalog for `schema` and make it current. On failure the
    /// previous catalog stays in place.
    pub fn rebuild_with_metadata(
        &self,
        schema: &Schema,
        metadata: &SelfDescription,
    ) -> CatalogResult<Arc<InformationSchemaCatalog>> {
        match InformationSchemaCatalog::with_metadata(schema, metadata) {
            Ok(catalog) => {
                let next = Arc::new(catalog);
                *self.current.write() = next.clone();
                Ok(next)
            }
            Err(e) => {
                warn!(target: "infoschema::catalog", code = e.code_str(), "rebuild failed, keeping previous catalog: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_catalog::names::relation;

    fn builtin() -> &'static SelfDescription { SelfDescription::builtin().unwrap() }

    fn store_without(table: &str, column: &str) -> SelfDescription {
        let cols: Vec<ColumnMeta> = builtin()
            .column_entries()
            .iter()
            .filter(|m| !(m.table == table && m.column == column))
            .cloned()
            .collect();
        SelfDescription::from_entries(cols, builtin().key_column_entries().to_vec())
    }

    #[test]
    fn empty_schema_builds_every_relation() {
        let cat = InformationSchemaCatalog::new(&Schema::empty()).unwrap();
        assert_eq!(cat.tables().len(), 15);
        assert_eq!(cat.name(), "INFORMATION_SCHEMA");
        assert_eq!(cat.table(relation::SCHEMATA).unwrap().num_rows(), 2);
        assert_eq!(cat.table(relation::SPANNER_STATISTICS).unwrap().num_rows(), 0);
        assert_eq!(cat.table("tables").unwrap().num_rows(), 15);
    }

    #[test]
    fn lookup_accepts_qualified_names() {
        let cat = InformationSchemaCatalog::new(&Schema::empty()).unwrap();
        assert_eq!(cat.lookup("information_schema.columns").map(|t| t.name()), Some(relation::COLUMNS));
        assert!(cat.lookup("pg_catalog.pg_class").is_none());
    }

    #[test]
    fn missing_metadata_aborts_build() {
        let sd = store_without(relation::SCHEMATA, "SCHEMA_NAME");
        let err = InformationSchemaCatalog::with_metadata(&Schema::empty(), &sd).unwrap_err();
        assert_eq!(err, CatalogError::missing_metadata("SCHEMATA", "SCHEMA_NAME"));
        assert!(err.is_defect());
    }

    #[test]
    fn conflicting_metadata_aborts_build() {
        let mut cols = builtin().column_entries().to_vec();
        cols.push(ColumnMeta {
            table: relation::TABLES.into(),
            column: "TABLE_NAME".into(),
            is_nullable: true,
            spanner_type: "STRING(MAX)".into(),
        });
        let sd = SelfDescription::from_entries(cols, builtin().key_column_entries().to_vec());
        let err = InformationSchemaCatalog::with_metadata(&Schema::empty(), &sd).unwrap_err();
        assert_eq!(err, CatalogError::duplicate_metadata("TABLES", "TABLE_NAME"));
        assert!(err.is_defect());

        let handle = CatalogHandle::new(&Schema::empty()).unwrap();
        let before = handle.snapshot();
        assert!(handle.rebuild_with_metadata(&Schema::empty(), &sd).is_err());
        assert!(Arc::ptr_eq(&before, &handle.snapshot()));
    }

    #[test]
    fn key_ordinals_explicit_or_sequential() {
        let views: Vec<ViewTable> = registry::all().iter().map(|r| ViewTable::new(r.name(), r.columns())).collect();
        let schema = Schema::empty();
        let ctx = BuildContext::new(&schema, &views, builtin());

        let tables = views.iter().find(|v| v.name() == relation::TABLES).unwrap();
        let keys: Vec<(&str, i64)> = ctx.view_key_columns(tables).iter().map(|k| (k.column, k.ordinal)).collect();
        assert_eq!(keys, vec![("TABLE_CATALOG", 1), ("TABLE_SCHEMA", 2), ("TABLE_NAME", 3)]);

        let usage = views.iter().find(|v| v.name() == relation::CONSTRAINT_TABLE_USAGE).unwrap();
        let keys: Vec<(&str, i64)> = ctx.view_key_columns(usage).iter().map(|k| (k.column, k.ordinal)).collect();
        assert_eq!(keys[0], ("TABLE_CATALOG", 4));
        assert_eq!(keys[3], ("CONSTRAINT_CATALOG", 1));
    }

    #[test]
    fn failed_rebuild_keeps_previous_catalog() {
        let handle = CatalogHandle::new(&Schema::empty()).unwrap();
        let before = handle.snapshot();
        let sd = store_without(relation::INDEXES, "INDEX_STATE");
        assert!(handle.rebuild_with_metadata(&Schema::empty(), &sd).is_err());
        assert!(Arc::ptr_eq(&before, &handle.snapshot()));

        let after = handle.rebuild(&Schema::empty()).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }
}
