use anyhow::Context;
use clap::Parser;
use sofia_config::SofiaConfig;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sofia error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags, wants_json(&cli.command));

    let config = SofiaConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    match &cli.command {
        cli::Commands::Config(args) => commands::config::handle(args, &config),
        cli::Commands::Resources(args) => commands::resources::handle(args, &config),
        cli::Commands::Contact(args) => commands::contact::handle(args, &config).await,
        cli::Commands::Ask(args) => {
            let ctx = assistant_context(config).await?;
            commands::ask::handle(args, &ctx).await
        }
        cli::Commands::Chat => {
            let ctx = assistant_context(config).await?;
            commands::chat::handle(&ctx).await
        }
    }
}

async fn assistant_context(config: SofiaConfig) -> anyhow::Result<context::AppContext> {
    context::warn_unconfigured(&config);
    context::AppContext::init(config)
        .await
        .context("failed to initialize the assistant")
}

const fn wants_json(command: &cli::Commands) -> bool {
    match command {
        cli::Commands::Ask(args) => args.json,
        cli::Commands::Resources(args) | cli::Commands::Config(args) => args.json,
        cli::Commands::Chat | cli::Commands::Contact(_) => false,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SOFIA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
