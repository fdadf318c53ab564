use crate::error::CatalogResult;
use crate::schema::KeyColumn;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{system_ns, user_ns, yes_no};
use crate::system_catalog::value::{Row, Value};

pub struct IIndexColumns;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::INDEX_NAME, coltype: ColType::Text },
    ColumnDef { name: column::INDEX_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::COLUMN_NAME, coltype: ColType::Text },
    ColumnDef { name: column::ORDINAL_POSITION, coltype: ColType::Int64 },
    ColumnDef { name: column::COLUMN_ORDERING, coltype: ColType::Text },
    ColumnDef { name: column::IS_NULLABLE, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_TYPE, coltype: ColType::Text },
];

fn ordering(k: &KeyColumn) -> &'static str {
    if k.descending { value::DESC } else { value::ASC }
}

impl InfoSchemaTable for IIndexColumns {
    fn name(&self) -> &'static str { relation::INDEX_COLUMNS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for idx in &t.indexes {
                // A null-filtered index never holds nulls in its key columns.
                for (pos, k) in idx.key_columns.iter().enumerate() {
                    rows.push(vec![
                        user_ns(),
                        user_ns(),
                        Value::string(t.name.as_str()),
                        Value::string(idx.name.as_str()),
                        Value::string(value::INDEX),
                        Value::string(k.name()),
                        Value::int64(pos as i64 + 1),
                        Value::string(ordering(k)),
                        Value::string(yes_no(k.column.nullable && !idx.null_filtered)),
                        Value::string(k.column.spanner_type()),
                    ]);
                }
                for c in &idx.stored_columns {
                    rows.push(vec![
                        user_ns(),
                        user_ns(),
                        Value::string(t.name.as_str()),
                        Value::string(idx.name.as_str()),
                        Value::string(value::INDEX),
                        Value::string(c.name.as_str()),
                        Value::null_int64(),
                        Value::null_string(),
                        Value::string(yes_no(c.nullable)),
                        Value::string(c.spanner_type()),
                    ]);
                }
            }
            for (pos, k) in t.primary_key.iter().enumerate() {
                rows.push(vec![
                    user_ns(),
                    user_ns(),
                    Value::string(t.name.as_str()),
                    Value::string(value::PRIMARY_KEY_INDEX),
                    Value::string(value::PRIMARY_KEY_INDEX),
                    Value::string(k.name()),
                    Value::int64(pos as i64 + 1),
                    Value::string(ordering(k)),
                    Value::string(yes_no(k.column.nullable)),
                    Value::string(k.column.spanner_type()),
                ]);
            }
        }
        for v in ctx.views() {
            for k in ctx.view_key_columns(v) {
                rows.push(vec![
                    user_ns(),
                    system_ns(),
                    Value::string(v.name()),
                    Value::string(value::PRIMARY_KEY_INDEX),
                    Value::string(value::PRIMARY_KEY_INDEX),
                    Value::string(k.column),
                    Value::int64(k.ordinal),
                    Value::string(k.meta.column_ordering.as_str()),
                    Value::string(k.meta.nullable_str()),
                    Value::string(k.meta.spanner_type.as_str()),
                ]);
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
    fn key_and_stored_columns() {
        let rows = user_rows(&rows_for(&IIndexColumns, &music()), 1);
        let by_last: Vec<Vec<String>> =
            rows.iter().filter(|r| r[3].as_str() == Some("SingersByLastName")).map(text).collect();
        assert_eq!(
            by_last,
            vec![
                vec!["", "", "Singers", "SingersByLastName", "INDEX", "LastName", "1", "DESC", "NO", "STRING(1024)"],
                vec!["", "", "Singers", "SingersByLastName", "INDEX", "FirstName", "NULL", "NULL", "YES", "STRING(1024)"],
            ]
        );
        let stored = rows.iter().find(|r| r[5].as_str() == Some("FirstName")).unwrap();
        assert_eq!(stored[6], Value::null_int64());
    }

    #[test]
    fn null_filtering_only_hides_nullable_keys_on_filtered_indexes() {
        let rows = user_rows(&rows_for(&IIndexColumns, &music()), 1);
        let title = rows.iter().find(|r| r[3].as_str() == Some("AlbumsByTitle")).unwrap();
        assert_eq!(title[8], Value::string("YES"));
    }

    #[test]
    fn primary_key_pseudo_index_in_key_order() {
        let rows = user_rows(&rows_for(&IIndexColumns, &music()), 1);
        let pk: Vec<Vec<String>> = rows
            .iter()
            .filter(|r| r[2].as_str() == Some("Albums") && r[3].as_str() == Some("PRIMARY_KEY"))
            .map(text)
            .collect();
        assert_eq!(
            pk,
            vec![
                vec!["", "", "Albums", "PRIMARY_KEY", "PRIMARY_KEY", "SingerId", "1", "ASC", "NO", "INT64"],
                vec!["", "", "Albums", "PRIMARY_KEY", "PRIMARY_KEY", "AlbumId", "2", "DESC", "NO", "INT64"],
            ]
        );
    }

    #[test]
    fn introspection_keys_use_stored_ordinals() {
        let rows = rows_for(&IIndexColumns, &music());
        let usage: Vec<(String, i64)> = rows
            .iter()
            .filter(|r| r[1].as_str() == Some("INFORMATION_SCHEMA") && r[2].as_str() == Some("CONSTRAINT_TABLE_USAGE"))
            .map(|r| (r[5].to_string(), r[6].as_i64().unwrap()))
            .collect();
        assert_eq!(usage.len(), 6);
        assert_eq!(usage[0], ("TABLE_CATALOG".to_string(), 4));
        assert_eq!(usage[5], ("CONSTRAINT_NAME".to_string(), 3));

        let schemata: Vec<Vec<String>> = rows
            .iter()
            .filter(|r| r[1].as_str() == Some("INFORMATION_SCHEMA") && r[2].as_str() == Some("SCHEMATA"))
            .map(text)
            .collect();
        assert_eq!(
            schemata,
            vec![
                vec!["", "INFORMATION_SCHEMA", "SCHEMATA", "PRIMARY_KEY", "PRIMARY_KEY", "CATALOG_NAME", "1", "ASC", "NO", "STRING(MAX)"],
                vec!["", "INFORMATION_SCHEMA", "SCHEMATA", "PRIMARY_KEY", "PRIMARY_KEY", "SCHEMA_NAME", "2", "ASC", "NO", "STRING(MAX)"],
            ]
        );
    }
}
