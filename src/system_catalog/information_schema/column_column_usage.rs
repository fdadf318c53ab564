use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::user_ns;
use crate::system_catalog::value::{Row, Value};

/// Which columns each generated column reads.
pub struct IColumnColumnUsage;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::COLUMN_NAME, coltype: ColType::Text },
    ColumnDef { name: column::DEPENDENT_COLUMN, coltype: ColType::Text },
];

impl InfoSchemaTable for IColumnColumnUsage {
    fn name(&self) -> &'static str { relation::COLUMN_COLUMN_USAGE }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for c in t.columns.iter().filter(|c| c.is_generated()) {
                for used in &c.dependent_columns {
                    rows.push(vec![
                        user_ns(),
                        user_ns(),
                        Value::string(t.name.as_str()),
                        Value::string(used.as_str()),
                        Value::string(c.name.as_str()),
                    ]);
                }
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_catalog::information_schema::testutil::{music, rows_for, text};

    #[test]
    fn one_row_per_used_column() {
        let rows = rows_for(&IColumnColumnUsage, &music());
        assert_eq!(rows.len(), 2);
        assert_eq!(text(&rows[0]), vec!["", "", "Singers", "FirstName", "FullName"]);
        assert_eq!(text(&rows[1]), vec!["", "", "Singers", "LastName", "FullName"]);
    }
}
