use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thesaurus::{server, startup};
use thesaurus_core::config::Config;

#[derive(Parser)]
#[command(name = "thesaurus", about = "Synonym lookup service backed by WordNet")]
struct Cli {
    /// Config file (default: ~/.config/thesaurus/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// WordNet dict directory, overriding wordnet.dict_dir.
    #[arg(long, global = true)]
    dict_dir: Option<PathBuf>,
    /// Log at debug level regardless of RUST_LOG and log.filter.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load the lexicon and serve HTTP (default).
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Download the WordNet dictionary and exit.
    Fetch {
        /// Download even if the files are already present.
        #[arg(long)]
        force: bool,
    },
    /// Print the synonyms of one word as JSON and exit.
    Lookup { word: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.dict_dir {
        config.wordnet.dict_dir = Some(dir);
    }
    init_tracing(&config, cli.debug);

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(&config)
        }
        Command::Fetch { force } => {
            let dir = config.wordnet.dict_dir();
            let written = thesaurus_wordnet::fetch(&config.wordnet.download_url, &dir, force)?;
            tracing::info!(dir = %dir.display(), files = written, "WordNet ready");
            Ok(())
        }
        Command::Lookup { word } => {
            let thesaurus = startup::build_thesaurus(&config)?;
            let entries = thesaurus.synonyms(&word)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        }
    }
}

fn run_server(config: &Config) -> anyhow::Result<()> {
    let thesaurus = startup::build_thesaurus(config)?;
    let state = server::AppState::new(thesaurus);
    let addr = config.server.bind_addr();

    tokio::runtime::Runtime::new()?.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "listening");
        server::serve(listener, state).await
    })
}

fn init_tracing(config: &Config, debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
