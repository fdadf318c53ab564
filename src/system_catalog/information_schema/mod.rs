pub mod schemata;
pub mod spanner_statistics;
pub mod database_options;
pub mod tables;
pub mod columns;
pub mod column_column_usage;
pub mod indexes;
pub mod index_columns;
pub mod column_options;
pub mod check_constraints;
pub mod table_constraints;
pub mod constraint_table_usage;
pub mod referential_constraints;
pub mod key_column_usage;
pub mod constraint_column_usage;

use std::sync::Arc;

use crate::system_catalog::registry::InfoSchemaTable;

/// Every relation in registration order. Self-describing rows list the
/// introspection relations in this order too.
pub fn defaults() -> Vec<Arc<dyn InfoSchemaTable>> {
    vec![
        Arc::new(schemata::ISchemata),
        Arc::new(spanner_statistics::ISpannerStatistics),
        Arc::new(database_options::IDatabaseOptions),
        Arc::new(tables::ITables),
        Arc::new(columns::IColumns),
        Arc::new(column_column_usage::IColumnColumnUsage),
        Arc::new(indexes::IIndexes),
        Arc::new(index_columns::IIndexColumns),
        Arc::new(column_options::IColumnOptions),
        Arc::new(check_constraints::ICheckConstraints),
        Arc::new(table_constraints::ITableConstraints),
        Arc::new(constraint_table_usage::IConstraintTableUsage),
        Arc::new(referential_constraints::IReferentialConstraints),
        Arc::new(key_column_usage::IKeyColumnUsage),
        Arc::new(constraint_column_usage::IConstraintColumnUsage),
    ]
}
