use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{check_not_null_name, not_null_columns, primary_key_name, system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct IConstraintColumnUsage;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::COLUMN_NAME, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_NAME, coltype: ColType::Text },
];

fn usage_row(schema: fn() -> Value, table: &str, col: &str, constraint: &str) -> Row {
    vec![
        user_ns(),
        schema(),
        Value::string(table),
        Value::string(col),
        user_ns(),
        schema(),
        Value::string(constraint),
    ]
}

impl InfoSchemaTable for IConstraintColumnUsage {
    fn name(&self) -> &'static str { relation::CONSTRAINT_COLUMN_USAGE }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            let pk = primary_key_name(&t.name);
            for k in &t.primary_key {
                rows.push(usage_row(user_ns, &t.name, k.name(), &pk));
            }
            for c in not_null_columns(t) {
                rows.push(usage_row(user_ns, &t.name, c, &check_not_null_name(&t.name, c)));
            }
            for ck in &t.check_constraints {
                for c in &ck.dependent_columns {
                    rows.push(usage_row(user_ns, &t.name, c, &ck.name));
                }
            }
            for fk in &t.foreign_keys {
                for c in &fk.referenced_columns {
                    rows.push(usage_row(user_ns, &fk.referenced_table, c, &fk.name));
                }
                if let Some(idx) = &fk.referenced_index {
                    for k in &idx.key_columns {
                        rows.push(usage_row(user_ns, &fk.referenced_table, k.name(), &idx.name));
                    }
                }
            }
        }
        for v in ctx.views() {
            let pk = primary_key_name(v.name());
            for k in ctx.view_key_columns(v) {
                rows.push(usage_row(system_ns, v.name(), k.column, &pk));
            }
        }
        for v in ctx.views() {
            for c in ctx.view_not_null_columns(v)? {
                rows.push(usage_row(system_ns, v.name(), c, &check_not_null_name(v.name(), c)));
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
    fn every_constrained_column_is_listed() {
        let rows = user_rows(&rows_for(&IConstraintColumnUsage, &music()), 1);
        let pairs: Vec<(String, String, String)> =
            rows.iter().map(|r| (r[2].to_string(), r[3].to_string(), r[6].to_string())).collect();
        let expect = [
            ("Singers", "SingerId", "PK_Singers"),
            ("Singers", "SingerId", "CK_IS_NOT_NULL_Singers_SingerId"),
            ("Singers", "LastName", "CK_IS_NOT_NULL_Singers_LastName"),
            ("Singers", "Score", "CK_Score"),
            ("Albums", "SingerId", "PK_Albums"),
            ("Albums", "AlbumId", "PK_Albums"),
            ("Albums", "SingerId", "CK_IS_NOT_NULL_Albums_SingerId"),
            ("Albums", "AlbumId", "CK_IS_NOT_NULL_Albums_AlbumId"),
            ("Singers", "LastName", "FK_LeadSinger"),
            ("Singers", "LastName", "SingersByLastName"),
            ("Singers", "SingerId", "FK_Singer"),
        ];
        let expect: Vec<(String, String, String)> =
            expect.iter().map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string())).collect();
        assert_eq!(pairs, expect);
    }

    #[test]
    fn introspection_keys_precede_not_null_checks() {
        let rows = rows_for(&IConstraintColumnUsage, &music());
        let own: Vec<&Row> = rows.iter().filter(|r| r[1].as_str() == Some("INFORMATION_SCHEMA")).collect();
        let first_check = own.iter().position(|r| r[6].as_str().is_some_and(|n| n.starts_with("CK_"))).unwrap();
        assert!(own[..first_check].iter().all(|r| r[6].as_str().is_some_and(|n| n.starts_with("PK_"))));
        assert_eq!(
            text(own[0]),
            vec!["", "INFORMATION_SCHEMA", "SCHEMATA", "CATALOG_NAME", "", "INFORMATION_SCHEMA", "PK_SCHEMATA"]
        );
    }
}
