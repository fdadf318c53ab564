use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{primary_key_name, system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct IKeyColumnUsage;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_NAME, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::COLUMN_NAME, coltype: ColType::Text },
    ColumnDef { name: column::ORDINAL_POSITION, coltype: ColType::Int64 },
    ColumnDef { name: column::POSITION_IN_UNIQUE_CONSTRAINT, coltype: ColType::Int64 },
];

fn key_row(schema: fn() -> Value, constraint: &str, table: &str, col: &str, ordinal: i64, position: Value) -> Row {
    vec![
        user_ns(),
        schema(),
        Value::string(constraint),
        user_ns(),
        schema(),
        Value::string(table),
        Value::string(col),
        Value::int64(ordinal),
        position,
    ]
}

impl InfoSchemaTable for IKeyColumnUsage {
    fn name(&self) -> &'static str { relation::KEY_COLUMN_USAGE }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            let pk = primary_key_name(&t.name);
            for (pos, k) in t.primary_key.iter().enumerate() {
                rows.push(key_row(user_ns, &pk, &t.name, k.name(), pos as i64 + 1, Value::null_int64()));
            }
            for fk in &t.foreign_keys {
                // Position in the unique constraint repeats the referencing ordinal.
                for (pos, c) in fk.referencing_columns.iter().enumerate() {
                    let ordinal = pos as i64 + 1;
                    rows.push(key_row(user_ns, &fk.name, &t.name, c, ordinal, Value::int64(ordinal)));
                }
                if let Some(idx) = &fk.referenced_index {
                    for (pos, k) in idx.key_columns.iter().enumerate() {
                        rows.push(key_row(
                            user_ns,
                            &idx.name,
                            &fk.referenced_table,
                            k.name(),
                            pos as i64 + 1,
                            Value::null_int64(),
                        ));
                    }
                }
            }
        }
        for v in ctx.views() {
            let pk = primary_key_name(v.name());
            for k in ctx.view_key_columns(v) {
                rows.push(key_row(system_ns, &pk, v.name(), k.column, k.ordinal, Value::null_int64()));
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
    fn primary_key_foreign_key_and_backing_index_columns() {
        let rows = user_rows(&rows_for(&IKeyColumnUsage, &music()), 1);
        let rendered: Vec<Vec<String>> = rows.iter().map(text).collect();
        assert_eq!(
            rendered,
            vec![
                vec!["", "", "PK_Singers", "", "", "Singers", "SingerId", "1", "NULL"],
                vec!["", "", "PK_Albums", "", "", "Albums", "SingerId", "1", "NULL"],
                vec!["", "", "PK_Albums", "", "", "Albums", "AlbumId", "2", "NULL"],
                vec!["", "", "FK_LeadSinger", "", "", "Albums", "LeadSinger", "1", "1"],
                vec!["", "", "SingersByLastName", "", "", "Singers", "LastName", "1", "NULL"],
                vec!["", "", "FK_Singer", "", "", "Albums", "SingerId", "1", "1"],
            ]
        );
    }

    #[test]
    fn primary_key_position_is_a_typed_null() {
        let rows = rows_for(&IKeyColumnUsage, &music());
        assert!(rows.iter().filter(|r| r[8].is_null()).all(|r| r[8] == Value::null_int64()));
    }

    #[test]
    fn introspection_keys_mirror_metadata() {
        let rows = rows_for(&IKeyColumnUsage, &music());
        let own: Vec<(String, i64)> = rows
            .iter()
            .filter(|r| r[2].as_str() == Some("PK_CONSTRAINT_COLUMN_USAGE"))
            .map(|r| (r[6].to_string(), r[7].as_i64().unwrap()))
            .collect();
        assert_eq!(own.len(), 7);
        assert_eq!(own[3], ("COLUMN_NAME".to_string(), 7));
        assert_eq!(own[4], ("CONSTRAINT_CATALOG".to_string(), 1));
    }
}
