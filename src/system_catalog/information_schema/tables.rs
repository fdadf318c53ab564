use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct ITables;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::PARENT_TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::ON_DELETE_ACTION, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_STATE, coltype: ColType::Text },
    ColumnDef { name: column::ROW_DELETION_POLICY_EXPRESSION, coltype: ColType::Text },
];

impl InfoSchemaTable for ITables {
    fn name(&self) -> &'static str { relation::TABLES }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            rows.push(vec![
                user_ns(),
                user_ns(),
                Value::string(value::BASE_TABLE),
                Value::string(t.name.as_str()),
                Value::opt_string(t.parent()),
                Value::opt_string(t.interleave.as_ref().map(|i| i.on_delete.as_str())),
                Value::string(value::COMMITTED),
                Value::opt_string(t.row_deletion_policy.as_ref().map(|p| p.render())),
            ]);
        }
        for v in ctx.views() {
            rows.push(vec![
                user_ns(),
                system_ns(),
                Value::string(value::VIEW),
                Value::string(v.name()),
                Value::null_string(),
                Value::null_string(),
                Value::null_string(),
                Value::null_string(),
            ]);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_catalog::information_schema::testutil::{music, rows_for, text, user_rows};

    #[test]
    fn user_tables_carry_interleave_and_deletion_policy() {
        let rows = user_rows(&rows_for(&ITables, &music()), 1);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            text(&rows[0]),
            vec!["", "", "BASE TABLE", "Singers", "NULL", "NULL", "COMMITTED", "OLDER_THAN(LastUpdated, INTERVAL 30 DAY)"]
        );
        assert_eq!(text(&rows[1]), vec!["", "", "BASE TABLE", "Albums", "Singers", "CASCADE", "COMMITTED", "NULL"]);
    }

    #[test]
    fn lists_every_introspection_relation_as_view() {
        let rows = rows_for(&ITables, &music());
        let views: Vec<&Row> = rows.iter().filter(|r| r[2].as_str() == Some("VIEW")).collect();
        assert_eq!(views.len(), 15);
        assert_eq!(text(views[0]), vec!["", "INFORMATION_SCHEMA", "VIEW", "SCHEMATA", "NULL", "NULL", "NULL", "NULL"]);
        assert!(views.iter().any(|r| r[3].as_str() == Some("TABLES")));
    }
}
