//! Self-description of the information schema's own relations.
//!
//! The relations in `INFORMATION_SCHEMA` are not user tables, so their column
//! nullability, declared types and primary keys come from versioned data files
//! under `data/` instead of a schema snapshot. The files are bundled into the
//! binary and parsed once; `tools::metacheck` reports drift between them and
//! the registered relations.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::error;

use crate::error::{CatalogError, CatalogResult};

pub const COLUMNS_CSV_NAME: &str = "info_schema_columns_metadata.csv";
pub const KEY_COLUMNS_CSV_NAME: &str = "info_schema_columns_metadata_for_index.csv";

pub const COLUMNS_CSV: &str = include_str!("../../data/info_schema_columns_metadata.csv");
pub const KEY_COLUMNS_CSV: &str = include_str!("../../data/info_schema_columns_metadata_for_index.csv");

const COLUMNS_HEADER: &[&str] = &["table_name", "column_name", "is_nullable", "spanner_type"];
const KEY_COLUMNS_HEADER: &[&str] =
    &["table_name", "column_name", "is_nullable", "column_ordering", "spanner_type", "ordinal_position"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub table: String,
    pub column: String,
    pub is_nullable: bool,
    pub spanner_type: String,
}

impl ColumnMeta {
    pub fn nullable_str(&self) -> &'static str { if self.is_nullable { "YES" } else { "NO" } }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumnMeta {
    pub table: String,
    pub column: String,
    pub is_nullable: bool,
    pub column_ordering: String,
    pub spanner_type: String,
    /// Position in the primary key; 0 means "assign sequentially in column order".
    pub primary_key_ordinal: i64,
}

impl IndexColumnMeta {
    pub fn nullable_str(&self) -> &'static str { if self.is_nullable { "YES" } else { "NO" } }
}

#[derive(Debug, Deserialize)]
struct ColumnRecord {
    table_name: String,
    column_name: String,
    is_nullable: String,
    spanner_type: String,
}

#[derive(Debug, Deserialize)]
struct KeyColumnRecord {
    table_name: String,
    column_name: String,
    is_nullable: String,
    column_ordering: String,
    spanner_type: String,
    ordinal_position: i64,
}

fn read_records<T: DeserializeOwned>(file: &str, text: &str, header: &[&str]) -> CatalogResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());
    let found = rdr.headers()?.clone();
    if found.iter().ne(header.iter().copied()) {
        return Err(CatalogError::metadata(format!(
            "{}: expected header '{}', found '{}'",
            file,
            header.join(","),
            found.iter().collect::<Vec<_>>().join(",")
        )));
    }
    let mut out = Vec::new();
    for rec in rdr.deserialize::<T>() {
        out.push(rec.map_err(|e| CatalogError::metadata(format!("{}: {}", file, e)))?);
    }
    Ok(out)
}

fn parse_nullable(file: &str, table: &str, column: &str, v: &str) -> CatalogResult<bool> {
    match v {
        "YES" => Ok(true),
        "NO" => Ok(false),
        other => Err(CatalogError::metadata(format!(
            "{}: {}.{}: is_nullable must be YES or NO, got '{}'",
            file, table, column, other
        ))),
    }
}

fn parse_columns(file: &str, text: &str) -> CatalogResult<Vec<ColumnMeta>> {
    read_records::<ColumnRecord>(file, text, COLUMNS_HEADER)?
        .into_iter()
        .map(|r| {
            let is_nullable = parse_nullable(file, &r.table_name, &r.column_name, &r.is_nullable)?;
            Ok(ColumnMeta { table: r.table_name, column: r.column_name, is_nullable, spanner_type: r.spanner_type })
        })
        .collect()
}

fn parse_key_columns(file: &str, text: &str) -> CatalogResult<Vec<IndexColumnMeta>> {
    read_records::<KeyColumnRecord>(file, text, KEY_COLUMNS_HEADER)?
        .into_iter()
        .map(|r| {
            let is_nullable = parse_nullable(file, &r.table_name, &r.column_name, &r.is_nullable)?;
            if r.column_ordering != "ASC" && r.column_ordering != "DESC" {
                return Err(CatalogError::metadata(format!(
                    "{}: {}.{}: column_ordering must be ASC or DESC, got '{}'",
                    file, r.table_name, r.column_name, r.column_ordering
                )));
            }
            if r.ordinal_position < 0 {
                return Err(CatalogError::metadata(format!(
                    "{}: {}.{}: negative ordinal_position {}",
                    file, r.table_name, r.column_name, r.ordinal_position
                )));
            }
            Ok(IndexColumnMeta {
                table: r.table_name,
                column: r.column_name,
                is_nullable,
                column_ordering: r.column_ordering,
                spanner_type: r.spanner_type,
                primary_key_ordinal: r.ordinal_position,
            })
        })
        .collect()
}

trait Keyed {
    fn key(&self) -> (&str, &str);
}

impl Keyed for ColumnMeta {
    fn key(&self) -> (&str, &str) { (&self.table, &self.column) }
}

impl Keyed for IndexColumnMeta {
    fn key(&self) -> (&str, &str) { (&self.table, &self.column) }
}

type Index = HashMap<String, HashMap<String, usize>>;

// First entry wins; duplicates are reported separately.
fn index_by<T: Keyed>(entries: &[T]) -> Index {
    let mut idx: Index = HashMap::new();
    for (pos, e) in entries.iter().enumerate() {
        let (table, column) = e.key();
        idx.entry(table.to_string()).or_default().entry(column.to_string()).or_insert(pos);
    }
    idx
}

fn repeated<T: Keyed>(entries: &[T]) -> Vec<(&str, &str)> {
    let mut seen = HashSet::new();
    entries.iter().map(|e| e.key()).filter(|k| !seen.insert(*k)).collect()
}

/// Lookup structure over the metadata tables, keyed by (relation, column).
#[derive(Debug, Clone)]
pub struct SelfDescription {
    columns: Vec<ColumnMeta>,
    key_columns: Vec<IndexColumnMeta>,
    column_index: Index,
    key_column_index: Index,
}

static BUILTIN: Lazy<CatalogResult<SelfDescription>> = Lazy::new(|| {
    let loaded = SelfDescription::bundled().and_then(|sd| sd.validate().map(|_| sd));
    if let Err(e) = &loaded {
        error!(target: "infoschema::metadata", code = e.code_str(), "bundled self-description rejected: {}", e);
    }
    loaded
});

impl SelfDescription {
    /// A store over the given entries, as-is. Use [`SelfDescription::validate`]
    /// before building from it.
    pub fn from_entries(columns: Vec<ColumnMeta>, key_columns: Vec<IndexColumnMeta>) -> Self {
        let column_index = index_by(&columns);
        let key_column_index = index_by(&key_columns);
        Self { columns, key_columns, column_index, key_column_index }
    }

    /// Parse the two metadata files. Malformed files are rejected; duplicate
    /// entries are kept so they can be audited.
    pub fn from_csv(columns_csv: &str, key_columns_csv: &str) -> CatalogResult<Self> {
        let columns = parse_columns(COLUMNS_CSV_NAME, columns_csv)?;
        let key_columns = parse_key_columns(KEY_COLUMNS_CSV_NAME, key_columns_csv)?;
        Ok(Self::from_entries(columns, key_columns))
    }

    /// The data files bundled into this binary, parsed but not validated.
    pub fn bundled() -> CatalogResult<Self> { Self::from_csv(COLUMNS_CSV, KEY_COLUMNS_CSV) }

    /// The validated bundled store, parsed on first use.
    pub fn builtin() -> CatalogResult<&'static SelfDescription> {
        match &*BUILTIN {
            Ok(sd) => Ok(sd),
            Err(e) => Err(e.clone()),
        }
    }

    /// Every column must be described at most once in each table.
    pub fn validate(&self) -> CatalogResult<()> {
        if let Some((table, column)) = self.duplicate_columns().into_iter().chain(self.duplicate_key_columns()).next() {
            error!(target: "infoschema::metadata", table, column, "duplicate metadata for column {}.{}", table, column);
            return Err(CatalogError::duplicate_metadata(table, column));
        }
        Ok(())
    }

    /// (table, column) of every column entry beyond the first for that column.
    pub fn duplicate_columns(&self) -> Vec<(&str, &str)> { repeated(&self.columns) }

    pub fn duplicate_key_columns(&self) -> Vec<(&str, &str)> { repeated(&self.key_columns) }

    pub fn column(&self, table: &str, column: &str) -> Option<&ColumnMeta> {
        let pos = self.column_index.get(table)?.get(column)?;
        self.columns.get(*pos)
    }

    /// Key metadata for a primary-key column; `None` when the column is not part of the key.
    pub fn key_column(&self, table: &str, column: &str) -> Option<&IndexColumnMeta> {
        let pos = self.key_column_index.get(table)?.get(column)?;
        self.key_columns.get(*pos)
    }

    pub fn column_entries(&self) -> &[ColumnMeta] { &self.columns }
    pub fn key_column_entries(&self) -> &[IndexColumnMeta] { &self.key_columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLS: &str = "table_name,column_name,is_nullable,spanner_type\nX,A,YES,INT64\nX,B,NO,STRING(MAX)\n";
    const KEYS: &str =
        "table_name,column_name,is_nullable,column_ordering,spanner_type,ordinal_position\nX,B,NO,DESC,STRING(MAX),0\n";

    #[test]
    fn builtin_lookup() {
        let sd = SelfDescription::builtin().unwrap();
        let m = sd.column("COLUMNS", "ORDINAL_POSITION").unwrap();
        assert_eq!(m.spanner_type, "INT64");
        assert!(!m.is_nullable);
        assert_eq!(m.nullable_str(), "NO");
        assert_eq!(sd.column("TABLES", "PARENT_TABLE_NAME").unwrap().nullable_str(), "YES");
        assert!(sd.column("TABLES", "NOPE").is_none());
        assert!(sd.column("NOPE", "TABLE_NAME").is_none());
    }

    #[test]
    fn key_lookup_distinguishes_non_key_columns() {
        let sd = SelfDescription::builtin().unwrap();
        assert!(sd.key_column("TABLES", "TABLE_NAME").is_some());
        assert!(sd.key_column("TABLES", "TABLE_TYPE").is_none());
        assert_eq!(sd.key_column("CONSTRAINT_TABLE_USAGE", "TABLE_NAME").unwrap().primary_key_ordinal, 6);
    }

    #[test]
    fn key_columns_agree_with_column_metadata() {
        let sd = SelfDescription::builtin().unwrap();
        for k in sd.key_column_entries() {
            let c = sd.column(&k.table, &k.column).unwrap();
            assert_eq!(c.spanner_type, k.spanner_type, "{}.{}", k.table, k.column);
            assert_eq!(c.is_nullable, k.is_nullable, "{}.{}", k.table, k.column);
        }
    }

    #[test]
    fn bundled_files_have_no_duplicates() {
        let sd = SelfDescription::bundled().unwrap();
        assert!(sd.duplicate_columns().is_empty());
        assert!(sd.duplicate_key_columns().is_empty());
        assert_eq!(sd.column_entries().len(), 111);
        assert_eq!(sd.key_column_entries().len(), 62);
    }

    #[test]
    fn parses_key_data_as_written() {
        let sd = SelfDescription::from_csv(COLS, KEYS).unwrap();
        assert_eq!(sd.column("X", "A").unwrap().spanner_type, "INT64");
        assert!(sd.column("X", "A").unwrap().is_nullable);
        assert!(sd.key_column("X", "A").is_none());
        let k = sd.key_column("X", "B").unwrap();
        assert_eq!(k.column_ordering, "DESC");
        assert_eq!(k.primary_key_ordinal, 0);
    }

    #[test]
    fn comments_and_padding_are_ignored() {
        let cols = "table_name,column_name,is_nullable,spanner_type\n# note\n X , A , NO , INT64 \n";
        let sd = SelfDescription::from_csv(cols, KEYS).unwrap();
        assert!(!sd.column("X", "A").unwrap().is_nullable);
    }

    #[test]
    fn rejects_malformed_files() {
        let bad_header = "table,column,is_nullable,spanner_type\nX,A,YES,INT64\n";
        let err = SelfDescription::from_csv(bad_header, KEYS).unwrap_err();
        assert_eq!(err.code_str(), "invalid_metadata");
        assert!(err.to_string().contains("expected header"), "{}", err);

        let short_row = "table_name,column_name,is_nullable,spanner_type\nX,A,YES\n";
        assert_eq!(SelfDescription::from_csv(short_row, KEYS).unwrap_err().code_str(), "invalid_metadata");

        let bad_flag = "table_name,column_name,is_nullable,spanner_type\nX,A,maybe,INT64\n";
        let err = SelfDescription::from_csv(bad_flag, KEYS).unwrap_err();
        assert!(err.to_string().contains("X.A: is_nullable must be YES or NO"), "{}", err);

        let bad_ordinal = KEYS.replace(",0\n", ",first\n");
        assert_eq!(SelfDescription::from_csv(COLS, &bad_ordinal).unwrap_err().code_str(), "invalid_metadata");

        let bad_order = KEYS.replace("DESC", "DOWN");
        let err = SelfDescription::from_csv(COLS, &bad_order).unwrap_err();
        assert!(err.to_string().contains("column_ordering must be ASC or DESC"), "{}", err);
        assert!(err.is_defect());
    }

    #[test]
    fn duplicate_entries_fail_validation() {
        let cols = format!("{}X,A,NO,INT64\n", COLS);
        let sd = SelfDescription::from_csv(&cols, KEYS).unwrap();
        assert_eq!(sd.duplicate_columns(), vec![("X", "A")]);
        // Lookups keep resolving to the first entry.
        assert!(sd.column("X", "A").unwrap().is_nullable);
        assert_eq!(sd.validate().unwrap_err(), CatalogError::duplicate_metadata("X", "A"));

        let keys = format!("{}X,B,NO,ASC,STRING(MAX),0\n", KEYS);
        let sd = SelfDescription::from_csv(COLS, &keys).unwrap();
        assert_eq!(sd.duplicate_key_columns(), vec![("X", "B")]);
        assert!(sd.validate().is_err());
        assert!(SelfDescription::from_csv(COLS, KEYS).unwrap().validate().is_ok());
    }
}
