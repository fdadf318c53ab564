use std::env;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use infoschema::cli::render_views;
use infoschema::config::{usage, Command, Config, Invocation, OutputFormat};
use infoschema::schema::{load_schema, Schema};
use infoschema::system_catalog::{InformationSchemaCatalog, ViewTable};
use infoschema::tools::metacheck;

fn main() -> Result<()> {
    // Logs go to stderr so dumps on stdout stay clean.
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args: Vec<String> = env::args().collect();
    let program = if args.is_empty() { "infoschema".to_string() } else { args.remove(0) };
    let cfg = match Config::from_args(&args, |k| env::var(k).ok()) {
        Ok(Invocation::Run(cfg)) => cfg,
        Ok(Invocation::Help) => {
            eprintln!("{}", usage(&program));
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, usage(&program));
            std::process::exit(2);
        }
    };

    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    info!(
        target: "infoschema",
        "infoschema starting: RUST_LOG='{}', command={:?}, schema={}, format={}",
        rust_log,
        cfg.command,
        cfg.schema_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".to_string()),
        cfg.format.as_str()
    );

    match cfg.command {
        Command::Check => check(&cfg),
        Command::Dump => dump(&cfg),
    }
}

fn check(cfg: &Config) -> Result<()> {
    let found = metacheck::run(&metacheck::CheckOptions { strict: cfg.strict })?;
    eprintln!("[metacheck] {} discrepancy(ies){}", found, if cfg.strict { " [STRICT]" } else { "" });
    Ok(())
}

fn dump(cfg: &Config) -> Result<()> {
    let schema = match &cfg.schema_file {
        Some(path) => load_schema(path).with_context(|| format!("failed to load schema snapshot {}", path.display()))?,
        None => Schema::empty(),
    };
    let catalog = InformationSchemaCatalog::new(&schema).context("failed to build INFORMATION_SCHEMA")?;
    let views: Vec<&ViewTable> = match &cfg.table {
        Some(name) => vec![catalog.lookup(name).ok_or_else(|| anyhow!("unknown relation: {}", name))?],
        None => catalog.tables().iter().collect(),
    };
    if cfg.format == OutputFormat::Frame && env::var_os("POLARS_FMT_MAX_ROWS").is_none() {
        // Show every row instead of polars' head/tail preview.
        env::set_var("POLARS_FMT_MAX_ROWS", "-1");
    }
    print!("{}", render_views(&views, cfg.format)?);
    Ok(())
}
