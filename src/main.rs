use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use recordstore::{Config, Record, RecordStore, Value, query};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recordstore")]
#[command(about = "RecordStore CLI - in-memory record sequence and score table")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config_dir>/recordstore/recordstore.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored headings
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every store and query operation on the loaded data
    Demo {
        /// Prefix used for the filter step
        #[arg(short, long, default_value = "F")]
        prefix: String,
    },

    /// Print every record in order
    List,

    /// Print records whose string field starts with PREFIX
    Prefix {
        prefix: String,

        /// Field to match (default: prefix_field from config)
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Print records whose boolean field is true
    Active {
        /// Field to check (default: active_field from config)
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Print every score as "<key> : <value>"
    Scores,

    /// Look up one score
    Score { key: String },

    /// Check whether a score key exists
    Contains { key: String },
}

fn main() -> Result<()> {
    // Setup tracing; stdout is reserved for listings
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let mut store = config.to_store();

    match cli.command {
        Commands::Demo { prefix } => run_demo(&mut store, &config, &prefix)?,
        Commands::List => print_records(store.iter()),
        Commands::Prefix { prefix, field } => {
            let field = field.unwrap_or_else(|| config.prefix_field.clone());
            print_records(query::filter_by_prefix(store.records(), &field, &prefix));
        }
        Commands::Active { field } => {
            let field = field.unwrap_or_else(|| config.active_field.clone());
            print_records(query::filter_by_boolean_field(store.records(), &field));
        }
        Commands::Scores => print!("{}", store.scores()),
        Commands::Score { key } => print_score(&store, &key),
        Commands::Contains { key } => println!("{}", store.contains_key(&key)),
    }

    Ok(())
}

fn run_demo(store: &mut RecordStore, config: &Config, prefix: &str) -> Result<()> {
    heading("Records");
    print_records(store.iter());

    if let Some(first) = store.records().first() {
        println!("\nFirst record: {}", first);
    }

    match store.set_field(1, &config.active_field, false) {
        Ok(old) => println!("Set {} at index 1: {} -> false", config.active_field, old),
        Err(e) => println!("Could not update index 1: {}", e),
    }

    let extra = Record::new([
        (config.prefix_field.as_str(), Value::from(format!("{}iona", prefix))),
        (config.active_field.as_str(), Value::from(true)),
    ])?;
    let index = store.append(extra);
    println!("Appended {} at index {}", store.get(index)?, index);

    heading(&format!("Filtered ({} starts with {})", config.prefix_field, prefix));
    print_records(query::filter_by_prefix(store.records(), &config.prefix_field, prefix));

    heading(&format!("Active ({} is true)", config.active_field));
    print_records(query::filter_by_boolean_field(store.records(), &config.active_field));

    heading("Lookups");
    print_score(store, "Francis");
    println!("contains Admin: {}", store.contains_key("Admin"));

    heading("All Scores");
    print!("{}", store.scores());

    Ok(())
}

fn heading(title: &str) {
    println!("\n{}", format!("--- {} ---", title).bold().cyan());
}

fn print_records<'a>(records: impl Iterator<Item = &'a Record>) {
    for record in records {
        println!("{}", record);
    }
}

fn print_score(store: &RecordStore, key: &str) {
    match store.score_get(key) {
        Some(score) => println!("{} : {}", key, score),
        None => println!("{} : {}", key, "not found".yellow()),
    }
}
