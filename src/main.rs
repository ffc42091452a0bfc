use chrono::{Local, NaiveDate};
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use upkeep::application::{
    show_registry, BumpService, CheckService, ConfigService, ListEntriesService, PruneService,
};
use upkeep::cli::{format_check_report, format_entry_listing, Cli, Commands};
use upkeep::domain::{BumpOffset, BumpResult, RegistryKind, DATE_FORMAT};
use upkeep::error::{Result, UpkeepError};
use upkeep::infrastructure::{FileSystemRepository, RegistryRepository};

fn main() {
    let cli = Cli::parse();

    init_tracing();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by UPKEEP_LOG (warnings only by default)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("UPKEEP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let repo = FileSystemRepository::discover(cli.dir)?;

    let today = match cli.today.as_deref() {
        Some(value) => NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|_| UpkeepError::InvalidDate(value.to_string()))?,
        None => Local::now().date_naive(),
    };

    let command = cli.command.unwrap_or(Commands::Check);
    if let Commands::Config { key, value, list } = command {
        return manage_config(repo, key, value, list);
    }

    let kind = match cli.kind.as_deref() {
        Some(value) => RegistryKind::from_str(value).map_err(UpkeepError::Config)?,
        None => repo.load_config()?.kind,
    };

    match command {
        Commands::Check => {
            let report = CheckService::new(repo).execute(kind, today)?;
            print!("{}", format_check_report(&report));
            Ok(())
        }
        Commands::Show => {
            print!("{}", show_registry(&repo, kind, today)?);
            Ok(())
        }
        Commands::List => {
            let listing = ListEntriesService::new(repo).execute(kind, today)?;
            print!("{}", format_entry_listing(&listing));
            Ok(())
        }
        Commands::Bump { amount, unit, name } => {
            let offset = BumpOffset::parse(&amount, &unit)?;
            let outcome = BumpService::new(repo).execute(kind, today, offset, name.as_deref())?;
            match outcome.result {
                BumpResult::Renewed => println!(
                    "Renewed {} until {}",
                    outcome.name,
                    outcome.date.format(DATE_FORMAT)
                ),
                BumpResult::Added => {
                    println!("Adding new contact for: {}", outcome.name)
                }
            }
            Ok(())
        }
        Commands::Prune => {
            let removed = PruneService::new(repo).execute(kind, today)?;
            println!("Removed {} expired entries", removed);
            Ok(())
        }
        Commands::Config { .. } => unreachable!("config is handled before resolving the registry"),
    }
}

fn manage_config(
    repo: FileSystemRepository,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    let service = ConfigService::new(repo);

    if list {
        let config = service.list()?;
        println!("kind = {}", config.kind);
        println!("identity = {}", config.identity.unwrap_or_default());
        println!("warning_days = {}", config.warning_days);
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: upkeep config [--list | <key> [<value>]]");
        println!("Valid keys: kind, identity, warning_days");
    }
    Ok(())
}
