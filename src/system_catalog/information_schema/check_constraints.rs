use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{check_not_null_clause, check_not_null_name, not_null_columns, system_ns, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct ICheckConstraints;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_NAME, coltype: ColType::Text },
    ColumnDef { name: column::CHECK_CLAUSE, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_STATE, coltype: ColType::Text },
];

fn check_row(schema: Value, name: String, clause: String) -> Row {
    vec![user_ns(), schema, Value::string(name), Value::string(clause), Value::string(value::COMMITTED)]
}

impl InfoSchemaTable for ICheckConstraints {
    fn name(&self) -> &'static str { relation::CHECK_CONSTRAINTS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for c in not_null_columns(t) {
                rows.push(check_row(user_ns(), check_not_null_name(&t.name, c), check_not_null_clause(c)));
            }
            for ck in &t.check_constraints {
                rows.push(check_row(user_ns(), ck.name.clone(), ck.expression.clone()));
            }
        }
        for v in ctx.views() {
            for c in ctx.view_not_null_columns(v)? {
                rows.push(check_row(system_ns(), check_not_null_name(v.name(), c), check_not_null_clause(c)));
            }
        }
        Ok(rows)
    }
}
