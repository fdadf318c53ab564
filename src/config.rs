//! Command-line and environment configuration for the `infoschema` binary.
//!
//! Flags win over environment variables:
//! - `--schema <file>` / `INFOSCHEMA_SCHEMA_FILE`: JSON schema snapshot to describe
//! - `--format table|frame|json` / `INFOSCHEMA_OUTPUT`: output rendering (default `table`)
//! - `--table <NAME>`: only dump one relation
//! - `--strict`: `check` fails when any discrepancy is found
//!
//! `--schema`, `--table` and `--format` only apply to `dump`; `--strict` only to `check`.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub const ENV_SCHEMA_FILE: &str = "INFOSCHEMA_SCHEMA_FILE";
pub const ENV_OUTPUT: &str = "INFOSCHEMA_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Dump,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bordered text table.
    Table,
    /// polars `DataFrame` display.
    Frame,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "frame" => Ok(OutputFormat::Frame),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("unknown output format '{}' (expected table, frame or json)", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Frame => "frame",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub schema_file: Option<PathBuf>,
    pub table: Option<String>,
    pub format: OutputFormat,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Parse arguments (without the program name), falling back to `env` for unset flags.
    pub fn from_args<F>(args: &[String], env: F) -> Result<Invocation>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut command: Option<Command> = None;
        let mut schema_file: Option<PathBuf> = None;
        let mut table: Option<String> = None;
        let mut format: Option<OutputFormat> = None;
        let mut strict = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--schema" => {
                    let v = args.get(i + 1).ok_or_else(|| anyhow!("--schema requires a file path"))?;
                    schema_file = Some(PathBuf::from(v));
                    i += 2; continue;
                }
                "--table" => {
                    let v = args.get(i + 1).ok_or_else(|| anyhow!("--table requires a relation name"))?;
                    table = Some(v.clone());
                    i += 2; continue;
                }
                "--format" => {
                    let v = args.get(i + 1).ok_or_else(|| anyhow!("--format requires a value"))?;
                    format = Some(OutputFormat::parse(v)?);
                    i += 2; continue;
                }
                "--strict" => { strict = true; i += 1; continue; }
                "-h" | "--help" => return Ok(Invocation::Help),
                "dump" if command.is_none() => { command = Some(Command::Dump); i += 1; continue; }
                "check" if command.is_none() => { command = Some(Command::Check); i += 1; continue; }
                unk => bail!("unrecognized argument: {}", unk),
            }
        }

        let command = command.unwrap_or(Command::Dump);
        match command {
            Command::Check => {
                let dump_only = [
                    ("--schema", schema_file.is_some()),
                    ("--table", table.is_some()),
                    ("--format", format.is_some()),
                ];
                if let Some((flag, _)) = dump_only.iter().find(|(_, set)| *set) {
                    bail!("{} only applies to dump", flag);
                }
            }
            Command::Dump if strict => bail!("--strict only applies to check"),
            Command::Dump => {}
        }

        if schema_file.is_none() {
            schema_file = env(ENV_SCHEMA_FILE).filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        }
        let format = match format {
            Some(f) => f,
            None => match env(ENV_OUTPUT) {
                Some(v) if !v.trim().is_empty() => OutputFormat::parse(&v)?,
                _ => OutputFormat::Table,
            },
        };
        Ok(Invocation::Run(Config { command, schema_file, table, format, strict }))
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} [dump] [--schema <file>] [--table <NAME>] [--format table|frame|json]\n  {program} check [--strict]\n\nFlags:\n  --schema <file>    JSON schema snapshot (env {ENV_SCHEMA_FILE}); without one only INFORMATION_SCHEMA is described\n  --table <NAME>     Dump a single relation, e.g. TABLES or information_schema.columns\n  --format <fmt>     table (default), frame or json (env {ENV_OUTPUT})\n  --strict           check: exit non-zero when the self-description store has drifted\n  -h, --help         Show this help"
    )
}
