use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{check_not_null_name, not_null_columns, primary_key_name, system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct ITableConstraints;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_NAME, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::IS_DEFERRABLE, coltype: ColType::Text },
    ColumnDef { name: column::INITIALLY_DEFERRED, coltype: ColType::Text },
    ColumnDef { name: column::ENFORCED, coltype: ColType::Text },
];

/// Constraints are never deferrable and always enforced.
fn constraint_row(schema: fn() -> Value, name: String, table: &str, kind: &str) -> Row {
    vec![
        user_ns(),
        schema(),
        Value::string(name),
        user_ns(),
        schema(),
        Value::string(table),
        Value::string(kind),
        Value::string(value::NO),
        Value::string(value::NO),
        Value::string(value::YES),
    ]
}

impl InfoSchemaTable for ITableConstraints {
    fn name(&self) -> &'static str { relation::TABLE_CONSTRAINTS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            rows.push(constraint_row(user_ns, primary_key_name(&t.name), &t.name, value::PRIMARY_KEY));
            for c in not_null_columns(t) {
                rows.push(constraint_row(user_ns, check_not_null_name(&t.name, c), &t.name, value::CHECK));
            }
            for ck in &t.check_constraints {
                rows.push(constraint_row(user_ns, ck.name.clone(), &t.name, value::CHECK));
            }
            for fk in &t.foreign_keys {
                rows.push(constraint_row(user_ns, fk.name.clone(), &t.name, value::FOREIGN_KEY));
                if let Some(idx) = &fk.referenced_index {
                    rows.push(constraint_row(user_ns, idx.name.clone(), &fk.referenced_table, value::UNIQUE));
                }
            }
        }
        for v in ctx.views() {
            rows.push(constraint_row(system_ns, primary_key_name(v.name()), v.name(), value::PRIMARY_KEY));
            for c in ctx.view_not_null_columns(v)? {
                rows.push(constraint_row(system_ns, check_not_null_name(v.name(), c), v.name(), value::CHECK));
            }
        }
        Ok(rows)
    }
}
