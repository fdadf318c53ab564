use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::{foreign_key_unique_name, user_ns};
use crate::system_catalog::value::{Row, Value};

pub struct IReferentialConstraints;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::CONSTRAINT_NAME, coltype: ColType::Text },
    ColumnDef { name: column::UNIQUE_CONSTRAINT_CATALOG, coltype: ColType::Text },
    ColumnDef { name: column::UNIQUE_CONSTRAINT_SCHEMA, coltype: ColType::Text },
    ColumnDef { name: column::UNIQUE_CONSTRAINT_NAME, coltype: ColType::Text },
    ColumnDef { name: column::MATCH_OPTION, coltype: ColType::Text },
    ColumnDef { name: column::UPDATE_RULE, coltype: ColType::Text },
    ColumnDef { name: column::DELETE_RULE, coltype: ColType::Text },
    ColumnDef { name: column::SPANNER_STATE, coltype: ColType::Text },
];

impl InfoSchemaTable for IReferentialConstraints {
    fn name(&self) -> &'static str { relation::REFERENTIAL_CONSTRAINTS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        let mut rows: Vec<Row> = Vec::new();
        for t in ctx.schema().tables() {
            for fk in &t.foreign_keys {
                rows.push(vec![
                    user_ns(),
                    user_ns(),
                    Value::string(fk.name.as_str()),
                    user_ns(),
                    user_ns(),
                    Value::string(foreign_key_unique_name(fk)),
                    Value::string(value::SIMPLE),
                    Value::string(value::NO_ACTION),
                    Value::string(value::NO_ACTION),
                    Value::string(value::COMMITTED),
                ]);
            }
        }
        Ok(rows)
    }
}
