use std::fmt::{Display, Formatter};

use serde::ser::{Serialize, Serializer};

use crate::system_catalog::registry::ColType;

/// A single field of an information schema row. Nulls carry their column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    String(String),
    Int64(i64),
    Bool(bool),
    Null(ColType),
}

pub type Row = Vec<Value>;

impl Value {
    pub fn string<S: Into<String>>(s: S) -> Self { Value::String(s.into()) }
    pub fn int64(v: i64) -> Self { Value::Int64(v) }
    pub fn bool(v: bool) -> Self { Value::Bool(v) }
    pub fn null_string() -> Self { Value::Null(ColType::Text) }
    pub fn null_int64() -> Self { Value::Null(ColType::Int64) }

    pub fn opt_string<S: Into<String>>(s: Option<S>) -> Self {
        match s {
            Some(s) => Value::String(s.into()),
            None => Value::null_string(),
        }
    }

    pub fn col_type(&self) -> ColType {
        match self {
            Value::String(_) => ColType::Text,
            Value::Int64(_) => ColType::Int64,
            Value::Bool(_) => ColType::Boolean,
            Value::Null(t) => *t,
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null(_)) }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Null(_) => write!(f, "NULL"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Null(_) => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_nulls_keep_their_type() {
        assert_eq!(Value::null_int64().col_type(), ColType::Int64);
        assert_eq!(Value::null_string().col_type(), ColType::Text);
        assert_ne!(Value::null_int64(), Value::null_string());
        assert_eq!(Value::opt_string(None::<&str>), Value::null_string());
        assert_eq!(Value::opt_string(Some("x")), Value::string("x"));
    }

    #[test]
    fn serializes_as_plain_json() {
        let row: Row = vec![Value::string("a"), Value::int64(3), Value::bool(true), Value::null_string()];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["a",3,true,null]"#);
    }
}
