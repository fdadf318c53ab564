use crate::error::CatalogResult;
use crate::system_catalog::catalog::BuildContext;
use crate::system_catalog::names::{column, relation, value};
use crate::system_catalog::registry::{ColType, ColumnDef, InfoSchemaTable};
use crate::system_catalog::shared::user_ns;
use crate::system_catalog::value::{Row, Value};

pub struct IDatabaseOptions;

const COLS: &[ColumnDef] = &[
    ColumnDef { name: column::CATALOG_NAME, coltype: ColType::Text },
    ColumnDef { name: column::SCHEMA_NAME, coltype: ColType::Text },
    ColumnDef { name: column::OPTION_NAME, coltype: ColType::Text },
    ColumnDef { name: column::OPTION_TYPE, coltype: ColType::Text },
    ColumnDef { name: column::OPTION_VALUE, coltype: ColType::Text },
];

impl InfoSchemaTable for IDatabaseOptions {
    fn name(&self) -> &'static str { relation::DATABASE_OPTIONS }
    fn columns(&self) -> &'static [ColumnDef] { COLS }
    fn build(&self, _ctx: &BuildContext<'_>) -> CatalogResult<Vec<Row>> {
        Ok(vec![vec![
            user_ns(),
            user_ns(),
            Value::string(value::DATABASE_DIALECT),
            Value::string(value::STRING),
            Value::string(value::GOOGLE_STANDARD_SQL),
        ]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::system_catalog::information_schema::testutil::{rows_for, text};

    #[test]
    fn advertises_dialect() {
        let rows = rows_for(&IDatabaseOptions, &Schema::empty());
        assert_eq!(rows.len(), 1);
        assert_eq!(text(&rows[0]), vec!["", "", "database_dialect", "STRING", "GOOGLE_STANDARD_SQL"]);
    }
}
