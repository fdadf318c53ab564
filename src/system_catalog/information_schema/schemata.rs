use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{system_ns, user_ns};
use crate::system_catalog::value::Row;

pub struct ISchemata;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CATALOG_NAME, coltype: ColType::Text },
    ColumnDef { name: column::SCHEMA_NAME, coltype: ColType::Text },
];

impl InfoSchemaTable for ISchemata {
    fn name(&self) -> &'static str { relation::SCHEMATA }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, _ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        // The unnamed user schema and the introspection schema.
        Ok(vec![vec![user_ns(), user_ns()], vec![user_ns(), system_ns()]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::system_catalog::information_schema::testutil::{rows_for, text};

    #[test]
    fn lists_both_namespaces() {
        let rows = rows_for(&ISchemata, &Schema::empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(text(&rows[0]), vec!["", ""]);
        assert_eq!(text(&rows[1]), vec!["", "INFORMATION_SCHEMA"]);
    }
}
