use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::system_catalog::metadata::SelfDescription;
use crate::system_catalog::registry::{self, ColType, InfoSchemaTable};

#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Treat any discrepancy as an error instead of only reporting it.
    pub strict: bool,
}

/// One disagreement between the registered relations and the self-description store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    MissingColumnMeta { table: String, column: String },
    StaleColumnMeta { table: String, column: String },
    DuplicateColumnMeta { table: String, column: String },
    TypeMismatch { table: String, column: String, registered: &'static str, declared: String },
    StaleKeyMeta { table: String, column: String },
    DuplicateKeyMeta { table: String, column: String },
    KeyOrdinals { table: String, detail: String },
}

impl Display for Discrepancy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Discrepancy::MissingColumnMeta { table, column } => write!(f, "{} | {} | no column metadata", table, column),
            Discrepancy::StaleColumnMeta { table, column } => {
                write!(f, "{} | {} | metadata for unregistered column", table, column)
            }
            Discrepancy::DuplicateColumnMeta { table, column } => {
                write!(f, "{} | {} | column metadata listed more than once", table, column)
            }
            Discrepancy::TypeMismatch { table, column, registered, declared } => {
                write!(f, "{} | {} | registered {} but declared {}", table, column, registered, declared)
            }
            Discrepancy::StaleKeyMeta { table, column } => {
                write!(f, "{} | {} | key metadata for unregistered column", table, column)
            }
            Discrepancy::DuplicateKeyMeta { table, column } => {
                write!(f, "{} | {} | key metadata listed more than once", table, column)
            }
            Discrepancy::KeyOrdinals { table, detail } => write!(f, "{} | - | {}", table, detail),
        }
    }
}

fn type_compatible(coltype: ColType, declared: &str) -> bool {
    match coltype {
        ColType::Text => declared.starts_with("STRING("),
        ColType::Int64 => declared == "INT64",
        ColType::Boolean => declared == "BOOL",
    }
}

/// Compare `relations` against `metadata`, in registration order.
pub fn check_relations(relations: &[Arc<dyn InfoSchemaTable>], metadata: &SelfDescription) -> Vec<Discrepancy> {
    let mut out: Vec<Discrepancy> = Vec::new();
    let mut registered: HashSet<(&str, &str)> = HashSet::new();

    for t in relations {
        for c in t.columns() {
            registered.insert((t.name(), c.name));
            match metadata.column(t.name(), c.name) {
                None => out.push(Discrepancy::MissingColumnMeta { table: t.name().into(), column: c.name.into() }),
                Some(m) if !type_compatible(c.coltype, &m.spanner_type) => out.push(Discrepancy::TypeMismatch {
                    table: t.name().into(),
                    column: c.name.into(),
                    registered: c.coltype.as_str(),
                    declared: m.spanner_type.clone(),
                }),
                Some(_) => {}
            }
        }
    }

    for (table, column) in metadata.duplicate_columns() {
        out.push(Discrepancy::DuplicateColumnMeta { table: table.into(), column: column.into() });
    }
    for m in metadata.column_entries() {
        if !registered.contains(&(m.table.as_str(), m.column.as_str())) {
            out.push(Discrepancy::StaleColumnMeta { table: m.table.clone(), column: m.column.clone() });
        }
    }

    for (table, column) in metadata.duplicate_key_columns() {
        out.push(Discrepancy::DuplicateKeyMeta { table: table.into(), column: column.into() });
    }

    let mut ordinals: HashMap<&str, Vec<i64>> = HashMap::new();
    let mut key_order: Vec<&str> = Vec::new();
    for k in metadata.key_column_entries() {
        if !registered.contains(&(k.table.as_str(), k.column.as_str())) {
            out.push(Discrepancy::StaleKeyMeta { table: k.table.clone(), column: k.column.clone() });
            continue;
        }
        if !ordinals.contains_key(k.table.as_str()) {
            key_order.push(k.table.as_str());
        }
        ordinals.entry(k.table.as_str()).or_default().push(k.primary_key_ordinal);
    }
    for table in key_order {
        let ords = &ordinals[table];
        let explicit: Vec<i64> = ords.iter().copied().filter(|o| *o > 0).collect();
        if explicit.is_empty() {
            continue;
        }
        if explicit.len() != ords.len() {
            out.push(Discrepancy::KeyOrdinals { table: table.into(), detail: "mixes explicit and sequential ordinals".into() });
            continue;
        }
        let mut sorted = explicit.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != explicit.len() {
            out.push(Discrepancy::KeyOrdinals { table: table.into(), detail: "repeats a key ordinal".into() });
        } else if sorted.iter().zip(1..).any(|(o, want)| *o != want) {
            out.push(Discrepancy::KeyOrdinals { table: table.into(), detail: format!("key ordinals {:?} are not 1..{}", sorted, sorted.len()) });
        }
    }
    out
}

/// Audit the registry against `metadata`.
pub fn check_self_description(metadata: &SelfDescription) -> Vec<Discrepancy> {
    check_relations(registry::all(), metadata)
}

/// Print every discrepancy of the bundled metadata files and return how many were found.
/// Files that do not parse are an error regardless of `strict`.
pub fn run(opts: &CheckOptions) -> Result<usize> {
    let found = check_self_description(&SelfDescription::bundled()?);
    println!("Table | Column | Problem");
    println!("----- | ------ | -------");
    for d in &found {
        println!("{}", d);
    }
    println!("[metacheck] discrepancies found: {}", found.len());
    if opts.strict && !found.is_empty() {
        return Err(anyhow!("self-description store out of sync with {} relation(s)", registry::all().len()));
    }
    Ok(found.len())
}
