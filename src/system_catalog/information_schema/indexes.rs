use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct IIndexes;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::INDEX_NAME, coltype: ColType::Text },
    ColumnDef { name: column::INDEX_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::PARENT_TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::IS_UNIQUE, coltype: ColType::Boolean },
    ColumnDef { name: column::IS_NULL_FILTERED, coltype: ColType::Boolean },
    ColumnDef { name: column::INDEX_STATE, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_IS_MANAGED, coltype: ColType::Boolean },
];

/// Row for a table's primary key, modeled as a pseudo-index named `PRIMARY_KEY`.
fn primary_key_row(schema: Value, table: &str) -> Row {
    vec![
        user_ns(),
        schema,
        Value::string(table),
        Value::string(value::PRIMARY_KEY_INDEX),
        Value::string(value::PRIMARY_KEY_INDEX),
        Value::string(""),
        Value::bool(true),
        Value::bool(false),
        Value::null_string(),
        Value::bool(false),
    ]
}

impl InfoSchemaTable for IIndexes {
    fn name(&self) -> &'static str { relation::INDEXES }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for idx in &t.indexes {
                rows.push(vec![
                    user_ns(),
                    user_ns(),
                    Value::string(t.name.as_str()),
                    Value::string(idx.name.as_str()),
                    Value::string(value::INDEX),
                    Value::string(idx.parent.as_deref().unwrap_or("")),
                    Value::bool(idx.unique),
                    Value::bool(idx.null_filtered),
                    Value::string(value::READ_WRITE),
                    Value::bool(idx.managed),
                ]);
            }
            rows.push(primary_key_row(user_ns(), &t.name));
        }
        for v in ctx.views() {
            rows.push(primary_key_row(system_ns(), v.name()));
        }
        Ok(rows)
    }
}
