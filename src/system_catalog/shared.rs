use crate::schema::Table;
use crate::system_catalog::names::{value, DEFAULT_NAMESPACE, INFORMATION_SCHEMA};
use crate::system_catalog::value::Value;

/// `PK_<table>`
pub fn primary_key_name(table: &str) -> String {
    format!("{}{}", value::PRIMARY_KEY_PREFIX, table)
}

/// `CK_IS_NOT_NULL_<table>_<column>`
pub fn check_not_null_name(table: &str, column: &str) -> String {
    format!("{}{}_{}", value::NOT_NULL_CHECK_PREFIX, table, column)
}

/// `<column> IS NOT NULL`
pub fn check_not_null_clause(column: &str) -> String {
    format!("{}{}", column, value::NOT_NULL_CHECK_SUFFIX)
}

/// Name of the unique constraint backing a foreign key: its explicit referenced
/// index, else the primary key of the referenced table.
pub fn foreign_key_unique_name(fk: &crate::schema::ForeignKey) -> String {
    match &fk.referenced_index {
        Some(idx) => idx.name.clone(),
        None => primary_key_name(&fk.referenced_table),
    }
}

/// Drop one leading `(` and one trailing `)`. Each side is trimmed on its own,
/// so unbalanced text loses whichever paren it has.
pub fn trim_outer_parens(expr: &str) -> &str {
    let expr = expr.strip_prefix('(').unwrap_or(expr);
    expr.strip_suffix(')').unwrap_or(expr)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { value::YES } else { value::NO }
}

pub fn user_ns() -> Value { Value::string(DEFAULT_NAMESPACE) }
pub fn system_ns() -> Value { Value::string(INFORMATION_SCHEMA) }

/// Columns of `table` that may not hold nulls, in declaration order.
pub fn not_null_columns(table: &Table) -> impl Iterator<Item = &str> {
    table.columns.iter().filter(|c| !c.nullable).map(|c| c.name.as_str())
}
