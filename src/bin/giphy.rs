//! CLI for the Giphy API.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use giphy::dispatch::{Dispatcher, COMMANDS_HELP};
use giphy::opener::SystemOpener;
use giphy::{Client, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "giphy")]
#[command(about = "A command line client for the Giphy API")]
#[command(version)]
#[command(after_help = COMMANDS_HELP)]
struct Cli {
    /// Command to run (see Commands below)
    #[arg(short, long)]
    command: Option<String>,

    /// Open each result in the browser
    #[arg(short, long)]
    render: bool,

    /// Log requests to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Arguments passed to the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env().context("reading GIPHY_* environment")?;
    let client = Client::new(config)?;
    let opener = cli.render.then(SystemOpener::detect);

    let mut dispatcher = Dispatcher::new(&client).usage(Cli::command().render_help().to_string());
    if let Some(opener) = &opener {
        dispatcher = dispatcher.opener(opener);
    }

    let mut out = std::io::stdout().lock();
    if let Err(e) = dispatcher
        .execute(cli.command.as_deref(), &cli.args, &mut out)
        .await
    {
        // stdout is still locked by `out`.
        drop(out);
        println!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "giphy=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
