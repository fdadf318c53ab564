//! Catalog error model.
//! Two classes matter to callers: defects (the self-description data is malformed or
//! disagrees with the registered relations, or a synthesizer produced a malformed row) and
//! input errors raised while compiling a schema snapshot document.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An introspection relation column has no self-description entry.
    #[error("missing metadata for column {table}.{column}")]
    MissingColumnMetadata { table: String, column: String },
    /// More than one self-description entry for the same column.
    #[error("duplicate metadata for column {table}.{column}")]
    DuplicateMetadata { table: String, column: String },
    /// The self-description data files could not be read.
    #[error("invalid self-description data: {0}")]
    Metadata(String),
    /// A synthesized row does not match its relation's column schema.
    #[error("row {row} of {table} does not match the relation schema: {detail}")]
    RowShape { table: String, row: usize, detail: String },
    #[error("invalid schema snapshot: {0}")]
    Snapshot(String),
    #[error("dataframe conversion failed: {0}")]
    Frame(String),
    #[error("io error: {0}")]
    Io(String),
}

impl CatalogError {
    pub fn code_str(&self) -> &'static str {
        match self {
            CatalogError::MissingColumnMetadata { .. } => "missing_metadata",
            CatalogError::DuplicateMetadata { .. } => "duplicate_metadata",
            CatalogError::Metadata(_) => "invalid_metadata",
            CatalogError::RowShape { .. } => "row_shape",
            CatalogError::Snapshot(_) => "invalid_snapshot",
            CatalogError::Frame(_) => "frame_error",
            CatalogError::Io(_) => "io_error",
        }
    }

    /// True for build/deployment defects that must abort catalog construction.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingColumnMetadata { .. }
                | CatalogError::DuplicateMetadata { .. }
                | CatalogError::Metadata(_)
                | CatalogError::RowShape { .. }
        )
    }

    pub fn missing_metadata<S: Into<String>>(table: S, column: S) -> Self {
        CatalogError::MissingColumnMetadata { table: table.into(), column: column.into() }
    }

    pub fn row_shape<S: Into<String>>(table: S, row: usize, detail: S) -> Self {
        CatalogError::RowShape { table: table.into(), row, detail: detail.into() }
    }

    pub fn duplicate_metadata<S: Into<String>>(table: S, column: S) -> Self {
        CatalogError::DuplicateMetadata { table: table.into(), column: column.into() }
    }

    pub fn snapshot<S: Into<String>>(msg: S) -> Self { CatalogError::Snapshot(msg.into()) }

    pub fn metadata<S: Into<String>>(msg: S) -> Self { CatalogError::Metadata(msg.into()) }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<polars::error::PolarsError> for CatalogError {
    fn from(err: polars::error::PolarsError) -> Self { CatalogError::Frame(err.to_string()) }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self { CatalogError::Snapshot(err.to_string()) }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self { CatalogError::Metadata(err.to_string()) }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self { CatalogError::Io(err.to_string()) }
}
