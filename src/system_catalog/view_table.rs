use polars::prelude::{DataFrame, NamedFrom, Series};
use serde_json::json;

use crate::error::{CatalogError, CatalogResult};
use crate::system_catalog::registry::{ColType, ColumnDef};
use crate::system_catalog::value::{Row, Value};

/// A registered introspection relation: fixed column schema plus its synthesized rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTable {
    name: &'static str,
    columns: &'static [ColumnDef],
    rows: Vec<Row>,
}

impl ViewTable {
    pub fn new(name: &'static str, columns: &'static [ColumnDef]) -> Self {
        Self { name, columns, rows: Vec::new() }
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn columns(&self) -> &'static [ColumnDef] { self.columns }
    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn num_rows(&self) -> usize { self.rows.len() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Values of one column across all rows, in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Rows whose `column` holds the string `value`.
    pub fn rows_where(&self, column: &str, value: &str) -> Vec<&Row> {
        match self.column_index(column) {
            Some(idx) => self.rows.iter().filter(|r| r[idx].as_str() == Some(value)).collect(),
            None => Vec::new(),
        }
    }

    /// Install rows after checking each one against the column schema.
    pub(crate) fn set_contents(&mut self, rows: Vec<Row>) -> CatalogResult<()> {
        for (i, row) in rows.iter().enumerate() {
            check_row(self.name, self.columns, i, row)?;
        }
        self.rows = rows;
        Ok(())
    }

    /// Export as a DataFrame with one nullable, typed column per relation column.
    pub fn to_dataframe(&self) -> CatalogResult<DataFrame> {
        let mut series: Vec<Series> = Vec::with_capacity(self.columns.len());
        for (idx, c) in self.columns.iter().enumerate() {
            let s = match c.coltype {
                ColType::Text => {
                    let vals: Vec<Option<String>> =
                        self.rows.iter().map(|r| r[idx].as_str().map(|s| s.to_string())).collect();
                    Series::new(c.name.into(), vals)
                }
                ColType::Int64 => {
                    let vals: Vec<Option<i64>> = self.rows.iter().map(|r| r[idx].as_i64()).collect();
                    Series::new(c.name.into(), vals)
                }
                ColType::Boolean => {
                    let vals: Vec<Option<bool>> = self.rows.iter().map(|r| r[idx].as_bool()).collect();
                    Series::new(c.name.into(), vals)
                }
            };
            series.push(s);
        }
        Ok(DataFrame::new(series.into_iter().map(|s| s.into()).collect())?)
    }

    /// `{"name": ..., "columns": [...], "rows": [[...], ...]}`
    pub fn to_json(&self) -> serde_json::Value {
        let columns: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        json!({ "name": self.name, "columns": columns, "rows": self.rows })
    }
}

fn check_row(table: &str, columns: &[ColumnDef], idx: usize, row: &Row) -> CatalogResult<()> {
    if row.len() != columns.len() {
        return Err(CatalogError::row_shape(
            table.to_string(),
            idx,
            format!("expected {} values, got {}", columns.len(), row.len()),
        ));
    }
    for (c, v) in columns.iter().zip(row.iter()) {
        if v.col_type() != c.coltype {
            return Err(CatalogError::row_shape(
                table.to_string(),
                idx,
                format!("column {} expects {}, got {}", c.name, c.coltype.as_str(), v.col_type().as_str()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLS: &[ColumnDef] = &[
        ColumnDef { name: "NAME", coltype: ColType::Text },
        ColumnDef { name: "POS", coltype: ColType::Int64 },
        ColumnDef { name: "FLAG", coltype: ColType::Boolean },
    ];

    fn table_with(rows: Vec<Row>) -> ViewTable {
        let mut t = ViewTable::new("T", COLS);
        t.set_contents(rows).unwrap();
        t
    }

    #[test]
    fn accepts_matching_rows_with_typed_nulls() {
        let t = table_with(vec![
            vec![Value::string("a"), Value::int64(1), Value::bool(true)],
            vec![Value::null_string(), Value::null_int64(), Value::Null(ColType::Boolean)],
        ]);
        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.column_values("pos").unwrap(), vec![&Value::int64(1), &Value::null_int64()]);
        assert_eq!(t.rows_where("NAME", "a").len(), 1);
    }

    #[test]
    fn rejects_wrong_arity() {
        let mut t = ViewTable::new("T", COLS);
        let err = t.set_contents(vec![vec![Value::string("a")]]).unwrap_err();
        assert_eq!(err.code_str(), "row_shape");
        assert!(err.to_string().contains("expected 3 values, got 1"));
        assert_eq!(t.num_rows(), 0);
    }

    #[test]
    fn rejects_mistyped_null() {
        let mut t = ViewTable::new("T", COLS);
        let err = t
            .set_contents(vec![vec![Value::string("a"), Value::null_string(), Value::bool(false)]])
            .unwrap_err();
        assert!(err.to_string().contains("column POS expects INT64, got STRING"));
    }

    #[test]
    fn dataframe_export_is_typed() {
        let t = table_with(vec![
            vec![Value::string("a"), Value::int64(1), Value::bool(true)],
            vec![Value::string("b"), Value::null_int64(), Value::bool(false)],
        ]);
        let df = t.to_dataframe().unwrap();
        assert_eq!(df.shape(), (2, 3));
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["NAME", "POS", "FLAG"]);
        assert_eq!(df.column("POS").unwrap().null_count(), 1);
    }

    #[test]
    fn empty_table_exports_empty_frame() {
        let t = ViewTable::new("T", COLS);
        let df = t.to_dataframe().unwrap();
        assert_eq!(df.shape(), (0, 3));
    }

    #[test]
    fn json_export_shape() {
        let t = table_with(vec![vec![Value::string("a"), Value::int64(1), Value::Null(ColType::Boolean)]]);
        let v = t.to_json();
        assert_eq!(v["name"], "T");
        assert_eq!(v["columns"][1], "POS");
        assert_eq!(v["rows"][0][2], serde_json::Value::Null);
    }
}
