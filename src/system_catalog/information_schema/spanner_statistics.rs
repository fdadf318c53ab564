use crate::system_catalog::names::{column, relation};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};

/// Query optimizer statistics packages. No packages exist, so the relation is always empty.
pub struct ISpannerStatistics;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CATALOG_NAME, coltype: ColType::Text },
    ColumnDef { name: column::SCHEMA_NAME, coltype: ColType::Text },
    ColumnDef { name: column::PACKAGE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::ALLOW_GC, coltype: ColType::Boolean },
];

impl InfoSchemaTable for ISpannerStatistics {
    fn name(&self) -> &'static str { relation::SPANNER_STATISTICS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
}
