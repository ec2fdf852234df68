//! Memlink CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use memlink::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Key(args) => memlink::cli::commands::key::execute(args, cli.json).await,
        Commands::Connect(args) => memlink::cli::commands::connect::execute(args, cli.json).await,
        Commands::List(args) => memlink::cli::commands::list::execute(args, cli.json).await,
        Commands::Start(args) => memlink::cli::commands::start::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        memlink::cli::handle_error(err, cli.json);
    }
}
