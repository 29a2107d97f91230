//! # lintdoc
//!
//! Derive configuration schemas and default options from lint rule documentation.
//!
//! ## Usage
//!
//! Show the options of one rule:
//! ```sh
//! lintdoc parse docs/rules/eslint/no-debugger.md
//! ```
//!
//! Build the rules file for a whole listing:
//! ```sh
//! oxlint --rules -f json | lintdoc generate --rules - --docs docs/rules -o rules.json
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use lintdoc::catalog::{self, Generator};
use lintdoc::parser::{self, JsonSchema, ParsedRuleDoc, RuleDocParser, SchemaItems};
use lintdoc::Config;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_logging(args.verbose);

    let config = match args.config.as_deref() {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };

    match args.command {
        Command::Parse { file, output } => {
            let markdown = read_input(&file)?;
            let doc = RuleDocParser::new(config.parser).parse(&markdown);
            print_doc(&doc, output)?;
        }
        Command::Describe { file } => {
            let markdown = read_input(&file)?;
            println!(
                "{}",
                parser::extract_description(&markdown, &config.description)
            );
        }
        Command::Generate {
            rules,
            docs,
            output,
            skip_missing,
        } => {
            let mut config = config;
            if skip_missing {
                config.catalog.skip_missing = true;
            }
            let Some(docs_dir) = docs.or_else(|| config.catalog.docs_dir.clone()) else {
                bail!("no documentation directory: pass --docs or set catalog.docs_dir");
            };
            let output = output.or_else(|| config.catalog.output.clone());

            let rules = catalog::load_rules(&rules)?;
            tracing::info!(rules = rules.len(), docs = %docs_dir.display(), "generating rules file");
            let records = Generator::new(&config, docs_dir).generate(&rules)?;

            match output {
                Some(path) => catalog::write_records(&path, &records)?,
                None => println!("{}", catalog::to_json(&records)?),
            }
        }
        Command::InitConfig { force } => {
            let path = match args.config.or_else(Config::config_path) {
                Some(path) => path,
                None => bail!("could not determine config directory; pass --config"),
            };
            init_config(&path, force)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    Config::default().save_to(path)
}

fn print_doc(doc: &ParsedRuleDoc, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(doc)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(doc)?),
        OutputFormat::Summary => print_summary(doc)?,
    }
    Ok(())
}

fn print_summary(doc: &ParsedRuleDoc) -> Result<()> {
    if !doc.has_options() {
        println!("No configuration options.");
        return Ok(());
    }

    if let Some(properties) = &doc.schema.properties {
        println!("Options ({}):", properties.len());
        for (name, schema) in properties {
            println!("  {}: {}", name, describe_schema(schema));
        }
    } else if let Some(SchemaItems::Tuple(items)) = &doc.schema.items {
        println!("Positional options ({}):", items.len());
        for (i, schema) in items.iter().enumerate() {
            println!("  [{}]: {}", i, describe_schema(schema));
        }
    }

    if doc.default_options.is_empty() {
        println!("\nNo default options.");
    } else {
        println!(
            "\nDefault options: {}",
            serde_json::to_string(&doc.default_options)?
        );
    }
    Ok(())
}

/// One-line description of a schema node
fn describe_schema(schema: &JsonSchema) -> String {
    if let Some(values) = &schema.enum_values {
        let quoted: Vec<_> = values.iter().map(|v| format!("\"{}\"", v)).collect();
        return quoted.join(" | ");
    }

    match (&schema.kind, &schema.items, &schema.properties) {
        (_, Some(SchemaItems::Single(item)), _) => format!("{}[]", describe_schema(item)),
        (_, Some(SchemaItems::Tuple(items)), _) => {
            let parts: Vec<_> = items.iter().map(describe_schema).collect();
            format!("[{}]", parts.join(", "))
        }
        (_, _, Some(properties)) => {
            let keys: Vec<_> = properties.keys().map(String::as_str).collect();
            format!("{{ {} }}", keys.join(", "))
        }
        (Some(kind), _, _) => kind.as_str().to_string(),
        _ => "any".to_string(),
    }
}
