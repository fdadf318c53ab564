use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{check_not_null_name, not_null_columns, primary_key_name, system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct IConstraintTableUsage;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_NAME, coltype: ColType::Text },
];

fn usage_row(schema: fn() -> Value, table: &str, constraint: String) -> Row {
    vec![user_ns(), schema(), Value::string(table), user_ns(), schema(), Value::string(constraint)]
}

impl InfoSchemaTable for IConstraintTableUsage {
    fn name(&self) -> &'static str { relation::CONSTRAINT_TABLE_USAGE }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            rows.push(usage_row(user_ns, &t.name, primary_key_name(&t.name)));
            for c in not_null_columns(t) {
                rows.push(usage_row(user_ns, &t.name, check_not_null_name(&t.name, c)));
            }
            for ck in &t.check_constraints {
                rows.push(usage_row(user_ns, &t.name, ck.name.clone()));
            }
            // A foreign key is recorded against the table it references.
            for fk in &t.foreign_keys {
                rows.push(usage_row(user_ns, &fk.referenced_table, fk.name.clone()));
                if let Some(idx) = &fk.referenced_index {
                    rows.push(usage_row(user_ns, &fk.referenced_table, idx.name.clone()));
                }
            }
        }
        for v in ctx.views() {
            rows.push(usage_row(system_ns, v.name(), primary_key_name(v.name())));
            for c in ctx.view_not_null_columns(v)? {
                rows.push(usage_row(system_ns, v.name(), check_not_null_name(v.name(), c)));
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_catalog::information_schema::testutil::{music, rows_for, text, user_rows};

    #[test]
    fn foreign_keys_name_the_referenced_table() {
        let rows = user_rows(&rows_for(&IConstraintTableUsage, &music()), 1);
        let fk = rows.iter().find(|r| r[5].as_str() == Some("FK_Singer")).unwrap();
        assert_eq!(text(fk), vec!["", "", "Singers", "", "", "FK_Singer"]);
        let backing = rows.iter().find(|r| r[5].as_str() == Some("SingersByLastName")).unwrap();
        assert_eq!(backing[2], Value::string("Singers"));
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn mirrors_introspection_constraints() {
        let rows = rows_for(&IConstraintTableUsage, &music());
        let pk = rows.iter().find(|r| r[5].as_str() == Some("PK_INDEXES")).unwrap();
        assert_eq!(text(pk), vec!["", "INFORMATION_SCHEMA", "INDEXES", "", "INFORMATION_SCHEMA", "PK_INDEXES"]);
    }
}
