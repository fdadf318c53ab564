use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::user_ns;
use crate::system_catalog::value::{Row, Value};

pub struct IColumnOptions;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::COLUMN_NAME, coltype: ColType::Text },
    ColumnDef { name: column::OPTION_NAME, coltype: ColType::Text },
    ColumnDef { name: column::OPTION_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::OPTION_VALUE, coltype: ColType::Text },
];

impl InfoSchemaTable for IColumnOptions {
    fn name(&self) -> &'static str { relation::COLUMN_OPTIONS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for c in t.columns.iter().filter(|c| c.allows_commit_timestamp) {
                rows.push(vec![
                    user_ns(),
                    user_ns(),
                    Value::string(t.name.as_str()),
                    Value::string(c.name.as_str()),
                    Value::string(value::ALLOW_COMMIT_TIMESTAMP),
                    Value::string(value::BOOL),
                    Value::string(value::TRUE),
                ]);
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
    fn commit_timestamp_columns_only() {
        let rows = rows_for(&IColumnOptions, &music());
        assert_eq!(rows.len(), 1);
        assert_eq!(
            text(&rows[0]),
            vec!["", "", "Singers", "LastUpdated", "allow_commit_timestamp", "BOOL", "TRUE"]
        );
    }
}
