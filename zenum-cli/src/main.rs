use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use zenum_core::{Catalog, Instance, Value};

#[derive(Parser)]
#[command(name = "zenum")]
#[command(about = "Inspect enumeration catalogs")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log discovery and validation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the merged constants of a variant
    List {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Variant name
        variant: String,
    },
    /// Validate a value against a variant
    Resolve {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Variant name
        variant: String,

        /// JSON literal (1, 2.0, "1", null); text that is not JSON is taken
        /// as a string. Omit to select the default.
        value: Option<String>,
    },
    /// Select a constant by name
    Name {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Variant name
        variant: String,

        /// Constant name
        name: String,
    },
    /// Check that every variant in a catalog resolves
    Check {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::List { catalog, variant } => {
            list_constants(catalog, variant, cli.json)?;
        }
        Commands::Resolve {
            catalog,
            variant,
            value,
        } => {
            resolve_value(catalog, variant, value.as_deref(), cli.json)?;
        }
        Commands::Name {
            catalog,
            variant,
            name,
        } => {
            let catalog = load_catalog(catalog)?;
            let instance = Instance::by_name(&catalog.lineage(variant)?, name)?;
            print_instance(&instance, cli.json)?;
        }
        Commands::Check { catalog } => {
            check_catalog(catalog, cli.json)?;
        }
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Cannot read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&content)
        .wrap_err_with(|| format!("Cannot load catalog {}", path.display()))?;
    info!(path = %path.display(), variants = catalog.variants.len(), "loaded catalog");
    Ok(catalog)
}

/// Valid JSON must also be a valid `Value`, so an out-of-range integer is an
/// error rather than a string.
fn parse_value(raw: &str) -> Result<Value> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => serde_json::from_value(json)
            .wrap_err_with(|| format!("Cannot use {} as a constant value", raw)),
        Err(_) => {
            debug!(raw, "value is not a JSON literal, using it as a string");
            Ok(Value::Str(raw.to_string()))
        }
    }
}

fn list_constants(catalog: &Path, variant: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let lineage = catalog.lineage(variant)?;
    let constants = zenum_core::ConstantSet::from_lineage(&lineage)?;

    if json {
        let output = serde_json::json!({
            "variant": lineage.variant(),
            "lineage": lineage.levels().iter().map(|l| l.name.as_str()).collect::<Vec<_>>(),
            "coercion": lineage.coercion(),
            "default": lineage.default_value(),
            "constants": constants,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let chain: Vec<_> = lineage.levels().iter().map(|l| l.name.as_str()).collect();
    println!("{} ({} constants)", chain.join(" <- "), constants.len());

    let width = constants.names().map(str::len).max().unwrap_or(0);
    for (ordinal, (name, value)) in constants.iter().enumerate() {
        println!(
            "  {:>3}  {:<width$}  {}",
            ordinal,
            name,
            serde_json::to_string(value)?,
            width = width
        );
    }
    Ok(())
}

fn resolve_value(catalog: &Path, variant: &str, raw: Option<&str>, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let lineage = catalog.lineage(variant)?;

    let instance = match raw {
        Some(raw) => Instance::with_value(&lineage, parse_value(raw)?)?,
        None => Instance::new(&lineage)?,
    };
    print_instance(&instance, json)
}

fn print_instance(instance: &Instance, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "variant": instance.variant(),
            "name": instance.name(),
            "value": instance.value(),
            "ordinal": instance.ordinal(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}::{} = {} (ordinal {})",
            instance.variant(),
            instance.name(),
            serde_json::to_string(instance.value())?,
            instance.ordinal()
        );
    }
    Ok(())
}

fn check_catalog(catalog: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    let mut reports = Vec::new();
    for name in catalog.names() {
        let outcome = catalog
            .lineage(name)
            .and_then(|lineage| Instance::new(&lineage));
        reports.push((name, outcome));
    }

    let failed = reports.iter().filter(|(_, outcome)| outcome.is_err()).count();

    if json {
        let output: Vec<_> = reports
            .iter()
            .map(|(name, outcome)| match outcome {
                Ok(instance) => serde_json::json!({
                    "variant": name,
                    "ok": true,
                    "default": instance.name(),
                }),
                Err(e) => serde_json::json!({
                    "variant": name,
                    "ok": false,
                    "error": e.to_string(),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (name, outcome) in &reports {
            match outcome {
                Ok(instance) => println!("ok     {} (default {})", name, instance.name()),
                Err(e) => println!("error  {}: {}", name, e),
            }
        }
    }

    if failed > 0 {
        return Err(eyre::eyre!(
            "{} of {} variants failed to resolve",
            failed,
            reports.len()
        ));
    }
    Ok(())
}
