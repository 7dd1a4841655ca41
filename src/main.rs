use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::str::FromStr;
use tagsmith::application::init::InitService;
use tagsmith::application::manage_config::ConfigService;
use tagsmith::application::{CatalogService, EditSession};
use tagsmith::cli::{
    format_candidate_list, format_category, format_category_list, run_session, Cli, Commands,
};
use tagsmith::domain::{SearchMode, SearchQuery, SymbolStyle, TagStore};
use tagsmith::domain::tags::split_custom_input;
use tagsmith::error::TagsmithError;
use tagsmith::infrastructure::config::symbol_override;
use tagsmith::infrastructure::FileSystemWorkspace;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

// Logs go to stderr so stdout stays usable as an export pipe.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TAGSMITH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), TagsmithError> {
    match cli.command {
        Some(Commands::Init { path, symbol }) => {
            let symbol = SymbolStyle::from_str(&symbol).map_err(TagsmithError::Config)?;
            InitService::execute(&path, symbol)?;
            println!("Initialized tagsmith workspace in {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemWorkspace::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("symbol = {}", config.symbol);
                println!("catalog_dir = {}", config.catalog_dir.display());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: tagsmith config [--list | <key> [<value>]]");
                println!("Valid keys: symbol, catalog_dir, created");
                Ok(())
            }
        }
        Some(Commands::Categories) => {
            let service = CatalogService::new(FileSystemWorkspace::discover()?)?;
            print!("{}", with_newline(format_category_list(&service.categories()?)));
            Ok(())
        }
        Some(Commands::Browse { category, group }) => {
            let service = CatalogService::new(FileSystemWorkspace::discover()?)?;
            let category = service.browse(&category, group.as_deref())?;
            print!("{}", with_newline(format_category(&category, group.as_deref())));
            Ok(())
        }
        Some(Commands::Search { query, mode, limit }) => {
            let mode = SearchMode::from_str(&mode).map_err(TagsmithError::InvalidCommand)?;
            let service = CatalogService::new(FileSystemWorkspace::discover()?)?;
            let results = service.search(&SearchQuery {
                mode,
                text: query,
                limit,
            })?;
            print!("{}", with_newline(format_candidate_list(&results)));
            Ok(())
        }
        Some(Commands::Render { text }) => {
            let mut store = TagStore::new();
            store.extend(split_custom_input(&text));
            println!("{}", store.render(SymbolStyle::default()));
            Ok(())
        }
        Some(Commands::Session { script, round }) => {
            let mut session = open_session(round)?;
            let stdout = io::stdout();
            let stderr = io::stderr();
            let mut out = stdout.lock();
            let mut err = stderr.lock();

            match script {
                Some(path) => {
                    let file = File::open(&path)?;
                    run_session(&mut session, BufReader::new(file), &mut out, &mut err)
                }
                None => run_session(&mut session, io::stdin().lock(), &mut out, &mut err),
            }
        }
        None => {
            println!("tagsmith - Weighted prompt tag composer");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Session with the workspace catalog when one is found.
/// `--round` wins over TAGSMITH_SYMBOL, which wins over the config file.
fn open_session(round: bool) -> Result<EditSession, TagsmithError> {
    let catalog = match FileSystemWorkspace::discover() {
        Ok(workspace) => Some(CatalogService::new(workspace)?),
        Err(TagsmithError::NotWorkspace(_)) => None,
        Err(e) => return Err(e),
    };

    let style = if round {
        SymbolStyle::Round
    } else {
        match &catalog {
            Some(service) => service.config().get_symbol()?,
            None => symbol_override()?.unwrap_or_default(),
        }
    };

    let session = EditSession::new(style);
    Ok(match catalog {
        Some(service) => session.with_catalog(service),
        None => session,
    })
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
