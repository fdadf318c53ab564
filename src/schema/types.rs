use std::fmt::{Display, Formatter};

use crate::error::{CatalogError, CatalogResult};

/// Scalar and array column types of the user schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Bool,
    Int64,
    Float64,
    Numeric,
    String,
    Bytes,
    Json,
    Date,
    Timestamp,
    Array(Box<ColumnType>),
}

impl ColumnType {
    /// Canonical declared-type text, e.g. `STRING(MAX)`, `ARRAY<BYTES(16)>`.
    /// `max_length` applies to sized types and to the element of a sized array.
    pub fn render(&self, max_length: Option<i64>) -> String {
        let len = || match max_length {
            Some(n) => n.to_string(),
            None => "MAX".to_string(),
        };
        match self {
            ColumnType::Bool => "BOOL".into(),
            ColumnType::Int64 => "INT64".into(),
            ColumnType::Float64 => "FLOAT64".into(),
            ColumnType::Numeric => "NUMERIC".into(),
            ColumnType::Json => "JSON".into(),
            ColumnType::Date => "DATE".into(),
            ColumnType::Timestamp => "TIMESTAMP".into(),
            ColumnType::String => format!("STRING({})", len()),
            ColumnType::Bytes => format!("BYTES({})", len()),
            ColumnType::Array(inner) => format!("ARRAY<{}>", inner.render(max_length)),
        }
    }

    pub fn is_sized(&self) -> bool {
        match self {
            ColumnType::String | ColumnType::Bytes => true,
            ColumnType::Array(inner) => inner.is_sized(),
            _ => false,
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

/// Parse declared type text into a type plus its declared max length.
/// Accepts `STRING`, `STRING(MAX)`, `string(64)`, `ARRAY<BYTES(16)>`.
pub fn parse_declared_type(text: &str) -> CatalogResult<(ColumnType, Option<i64>)> {
    let s = text.trim();
    let upper = s.to_ascii_uppercase();
    if let Some(inner) = upper.strip_prefix("ARRAY<").and_then(|r| r.strip_suffix('>')) {
        if inner.trim_start().starts_with("ARRAY<") {
            return Err(CatalogError::snapshot(format!("nested arrays are not supported: '{}'", s)));
        }
        let (elem, len) = parse_declared_type(inner)?;
        return Ok((ColumnType::Array(Box::new(elem)), len));
    }
    let (base, len) = match upper.find('(') {
        Some(open) => {
            let close = upper
                .rfind(')')
                .filter(|c| *c > open)
                .ok_or_else(|| CatalogError::snapshot(format!("unbalanced length in type '{}'", s)))?;
            let arg = upper[open + 1..close].trim();
            let len = if arg == "MAX" {
                None
            } else {
                let n = arg
                    .parse::<i64>()
                    .map_err(|_| CatalogError::snapshot(format!("invalid length '{}' in type '{}'", arg, s)))?;
                Some(n)
            };
            (upper[..open].trim().to_string(), len)
        }
        None => (upper.clone(), None),
    };
    let ty = match base.as_str() {
        "BOOL" => ColumnType::Bool,
        "INT64" => ColumnType::Int64,
        "FLOAT64" => ColumnType::Float64,
        "NUMERIC" => ColumnType::Numeric,
        "STRING" => ColumnType::String,
        "BYTES" => ColumnType::Bytes,
        "JSON" => ColumnType::Json,
        "DATE" => ColumnType::Date,
        "TIMESTAMP" => ColumnType::Timestamp,
        _ => return Err(CatalogError::snapshot(format!("unknown column type '{}'", s))),
    };
    if len.is_some() && !ty.is_sized() {
        return Err(CatalogError::snapshot(format!("type '{}' does not take a length", s)));
    }
    Ok((ty, len))
}
