mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use localized_getters::{Column, GetterConfig, LocalizedDateBehavior, Table};

use output::{Reporter, WriteOutcome, write_if_changed};

#[derive(Parser)]
#[command(name = "localized-getters")]
#[command(version)]
#[command(
    about = "Preview the localized date getters generated for a table",
    long_about = r#"Preview the localized date getters generated for a table.

Columns are given on the command line as NAME:SQL_TYPE[:IdentifierName].
Every DATE, DATETIME and TIMESTAMP column receives a getter unless the
"columns" parameter names them explicitly.

Example:
  localized-getters --table book \
      --column published_at:TIMESTAMP --column title:VARCHAR \
      --param use_intl=true --param default_locale=en_US
"#
)]
struct Cli {
    /// Table name, used in error messages
    #[arg(long)]
    table: String,

    /// Column definition as NAME:SQL_TYPE[:IdentifierName]
    #[arg(long = "column", value_name = "NAME:TYPE[:IDENTIFIER]", value_parser = parse_column)]
    columns: Vec<Column>,

    /// TOML file holding behavior parameters
    #[arg(long, env = "LOCALIZED_GETTERS_CONFIG")]
    config: Option<PathBuf>,

    /// Behavior parameter, applied on top of the config file
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_parameter)]
    params: Vec<(String, String)>,

    /// Write the generated methods to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Suppress status messages (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_column(arg: &str) -> Result<Column, String> {
    let mut parts = arg.split(':').map(str::trim);
    let (Some(name), Some(sql_type)) = (parts.next(), parts.next()) else {
        return Err(format!("expected NAME:SQL_TYPE[:IdentifierName], got \"{arg}\""));
    };
    if name.is_empty() || sql_type.is_empty() {
        return Err(format!("column name and type must not be empty in \"{arg}\""));
    }
    let column = Column::new(name, sql_type.to_ascii_uppercase());
    match (parts.next(), parts.next()) {
        (None, _) => Ok(column),
        (Some(identifier), None) if !identifier.is_empty() => Ok(column.with_identifier_name(identifier)),
        _ => Err(format!("expected NAME:SQL_TYPE[:IdentifierName], got \"{arg}\"")),
    }
}

fn parse_parameter(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got \"{arg}\""))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let reporter = Reporter::new(cli.quiet, cli.no_color);

    if let Err(err) = execute(cli, &reporter) {
        reporter.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn execute(cli: Cli, reporter: &Reporter) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GetterConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load behavior parameters from {}", path.display()))?,
        None => GetterConfig::default(),
    };
    for (key, value) in cli.params {
        if !config.set_parameter(&key, value) {
            reporter.warning(&format!("ignoring unknown parameter \"{key}\""));
        }
    }

    let mut table = Table::new(cli.table);
    for column in cli.columns {
        table.add_column(column);
    }

    let code = LocalizedDateBehavior::new(&table, config).object_methods()?;
    let generated = code.matches("public function ").count();

    match cli.output {
        Some(path) => match write_if_changed(&path, &code)? {
            WriteOutcome::Written => {
                reporter.success(&format!("Generated {} with {generated} getter(s)", path.display()));
            }
            WriteOutcome::Unchanged => {
                reporter.info(&format!("{} is up to date", path.display()));
            }
        },
        None => println!("{code}"),
    }

    Ok(())
}
