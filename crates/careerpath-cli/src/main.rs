use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "careerpath-cli", version, about = "CareerPath career assessment CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Career assessment flow
    Test {
        #[command(subcommand)]
        action: commands::test::TestAction,
    },
    /// Score an ad-hoc list of SKILL=RATING pairs
    Score(commands::score::ScoreArgs),
    /// Career and learning recommendations
    Catalog(commands::catalog::CatalogArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CAREERPATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Test { action } => commands::test::run(action),
        Commands::Score(args) => commands::score::run(args),
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
