use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{trim_outer_parens, system_ns, user_ns, yes_no};
use crate::system_catalog::value::{Row, Value};

pub struct IColumns;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::TABLE_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::TABLE_NAME, coltype: ColType::Text },
    ColumnDef { name: column::COLUMN_NAME, coltype: ColType::Text },
    ColumnDef { name: column::ORDINAL_POSITION, coltype: ColType::Int64 },
    ColumnDef { name: column::COLUMN_DEFAULT, coltype: ColType::Text },
    ColumnDef { name: column::DATA_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::IS_NULLABLE, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::IS_GENERATED, coltype: ColType::Text },
    ColumnDef { name: column::GENERATION_EXPRESSION, coltype: ColType::Text },
    ColumnDef { name: column::IS_STORED, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_STATE, coltype: ColType::Text },
];

impl InfoSchemaTable for IColumns {
    fn name(&self) -> &'static str { relation::COLUMNS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for (pos, c) in t.columns.iter().enumerate() {
                let default = c.default_expr.as_deref().map(trim_outer_parens);
                let generated = c.generated_expr.as_deref().map(trim_outer_parens);
                rows.push(vec![
                    user_ns(),
                    user_ns(),
                    Value::string(t.name.as_str()),
                    Value::string(c.name.as_str()),
                    Value::int64(pos as i64 + 1),
                    Value::opt_string(default),
                    Value::null_string(),
                    Value::string(yes_no(c.nullable)),
                    Value::string(c.spanner_type()),
                    Value::string(if c.is_generated() { value::ALWAYS } else { value::NEVER }),
                    Value::opt_string(generated),
                    Value::opt_string(c.is_generated().then_some(value::YES)),
                    Value::string(value::COMMITTED),
                ]);
            }
        }
        for v in ctx.views() {
            for (pos, c) in v.columns().iter().enumerate() {
                let meta = ctx.column_meta(v.name(), c.name)?;
                rows.push(vec![
                    user_ns(),
                    system_ns(),
                    Value::string(v.name()),
                    Value::string(c.name),
                    Value::int64(pos as i64 + 1),
                    Value::null_string(),
                    Value::null_string(),
                    Value::string(meta.nullable_str()),
                    Value::string(meta.spanner_type.as_str()),
                    Value::string(value::NEVER),
                    Value::null_string(),
                    Value::null_string(),
                    Value::null_string(),
                ]);
            }
        }
        Ok(rows)
    }
}
