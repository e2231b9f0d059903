mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_appender::rolling::InitError;

use filmico_api::tmdb::{TmdbClient, TmdbError};
use filmico_core::config::AppConfig;
use filmico_core::error::CoreError;
use filmico_core::session::BrowseSession;

#[derive(Parser, Debug)]
#[command(
    name = "filmico",
    version,
    about = "Browse popular movies, search by title or genre, and look up trailers"
)]
struct Cli {
    /// TMDB API key; overrides the config file and TMDB_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Response language, e.g. es-ES or en-US
    #[arg(long, global = true)]
    language: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print poster URLs under each movie
    #[arg(long, global = true)]
    posters: bool,

    /// Print a detail block per movie: language, release date, backdrop,
    /// trailer and overview
    #[arg(long, global = true)]
    details: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List popular movies
    Popular {
        /// Number of pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// Search by genre name (exact, any case) or by movie title
    Search {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List movie genres
    Genres,
    /// Print a movie's YouTube trailer URL
    Trailer { movie_id: u64 },
    /// Print the config file location
    ConfigPath,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] TmdbError),

    #[error("cannot write logs: {0}")]
    Logging(#[from] InitError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, CoreError> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_env_overrides();
            config
        }
        None => AppConfig::load()?,
    };
    if let Some(key) = &cli.api_key {
        config.tmdb.api_key = Some(key.clone());
    }
    if let Some(language) = &cli.language {
        config.tmdb.language = language.clone();
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::ConfigPath = cli.command {
        let path = cli.config.unwrap_or_else(AppConfig::config_path);
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _log_guard = logging::init(&config.logging.filter, cli.log_dir.as_deref())?;

    let api_key = config.api_key().ok_or(TmdbError::MissingApiKey)?;
    let client = TmdbClient::new(api_key.to_string(), config.tmdb.language.clone())
        .with_base_url(config.tmdb.base_url.as_str())
        .with_timeout(config.tmdb.timeout())?;
    tracing::debug!(
        base_url = %config.tmdb.base_url,
        language = %config.tmdb.language,
        "TMDB client ready"
    );
    let mut session =
        BrowseSession::new(client).with_prefetch_threshold(config.browse.prefetch_threshold);
    let image_base = config.tmdb.image_base_url.as_str();

    match cli.command {
        Command::Popular { pages } => {
            session.start().await;
            for _ in 1..pages {
                let before = session.controller().items().len();
                if !session.load_next_page().await || session.controller().items().len() == before
                {
                    break;
                }
            }
            print_movies(&session, image_base, cli.posters, cli.details).await;
        }
        Command::Search { text } => {
            session.load_genres().await;
            session.submit_query(&text.join(" ")).await;
            print_movies(&session, image_base, cli.posters, cli.details).await;
        }
        Command::Genres => {
            session.load_genres().await;
            print!("{}", render::genre_list(session.controller().genres()));
        }
        Command::Trailer { movie_id } => match session.trailer(movie_id).await {
            Some(url) => println!("{url}"),
            None => println!("{}", render::NO_TRAILER),
        },
        Command::ConfigPath => {}
    }

    Ok(())
}

/// List mode prints one line per movie; detail mode looks up every trailer
/// first.
async fn print_movies(
    session: &BrowseSession<TmdbClient>,
    image_base: &str,
    posters: bool,
    details: bool,
) {
    let controller = session.controller();
    if details {
        let ids: Vec<u64> = controller.items().iter().map(|m| m.id).collect();
        let trailers = session.trailers(&ids).await;
        print!("{}", render::detail_list(controller, image_base, &trailers));
    } else {
        print!(
            "{}",
            render::movie_list(controller, posters.then_some(image_base))
        );
    }
}
