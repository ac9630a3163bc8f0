//! pricewatch CLI - crypto price alerts and daily market reports.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use pricewatch_lib::{DEFAULT_CURRENCY, Threshold};
use std::path::PathBuf;

mod commands;
mod logging;

/// Index reported when none is given.
const DEFAULT_INDEX: &str = "^IXIC";

#[derive(Parser)]
#[command(name = "pricewatch")]
#[command(about = "Crypto price alerts and daily market reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no summary output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Telegram credentials, from flags or the environment.
#[derive(Args, Clone, Default)]
struct TelegramArgs {
    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    telegram_token: Option<String>,

    /// Telegram chat id
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    telegram_chat: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one price check and alert on large moves
    Check {
        /// Alert threshold in percent
        #[arg(short, long, default_value_t = Threshold::DEFAULT.percent())]
        threshold: f64,

        /// Asset to track, by CoinGecko id or ticker (repeatable).
        /// Defaults to bitcoin and ethereum.
        #[arg(short, long = "asset")]
        assets: Vec<String>,

        /// Quote currency
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,

        /// Observation file. Defaults to the platform data directory.
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Print alerts instead of sending them
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        telegram: TelegramArgs,
    },

    /// Build the daily market report
    Report {
        /// Send the chat summary to Telegram
        #[arg(long)]
        send: bool,

        /// Save the markdown report into this directory
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Crypto asset to include (repeatable). Defaults to bitcoin and ethereum.
        #[arg(short, long = "asset")]
        assets: Vec<String>,

        /// Index symbol to include
        #[arg(long, default_value = DEFAULT_INDEX)]
        index: String,

        #[command(flatten)]
        telegram: TelegramArgs,
    },

    /// Build, archive and publish the daily report to a GitHub repository
    Publish {
        /// Repository owner
        #[arg(long)]
        owner: String,

        /// Repository name
        #[arg(long)]
        repo: String,

        /// GitHub token with contents write access
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Local archive directory
        #[arg(long, default_value = "reports")]
        archive: PathBuf,

        /// GitHub Pages custom domain to write into CNAME
        #[arg(long, env = "PRICEWATCH_CNAME")]
        cname: Option<String>,

        /// Crypto asset to include (repeatable). Defaults to bitcoin and ethereum.
        #[arg(short, long = "asset")]
        assets: Vec<String>,

        /// Index symbol to include
        #[arg(long, default_value = DEFAULT_INDEX)]
        index: String,
    },

    /// Show stored observations
    Show {
        /// Observation file. Defaults to the platform data directory.
        #[arg(short, long)]
        store: Option<PathBuf>,
    },

    /// List known assets
    Assets,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Check {
            threshold,
            assets,
            currency,
            store,
            dry_run,
            telegram,
        } => {
            let telegram = if dry_run {
                None
            } else {
                commands::telegram_config(telegram.telegram_token, telegram.telegram_chat)?
            };
            commands::check::check(threshold, &assets, &currency, store, telegram, cli.quiet).await
        }
        Commands::Report {
            send,
            archive,
            assets,
            index,
            telegram,
        } => {
            let telegram = if send {
                commands::telegram_config(telegram.telegram_token, telegram.telegram_chat)?
            } else {
                None
            };
            commands::report::report(&assets, &index, archive, send, telegram, cli.quiet).await
        }
        Commands::Publish {
            owner,
            repo,
            token,
            archive,
            cname,
            assets,
            index,
        } => {
            let target = commands::publish::Target {
                owner,
                repo,
                token,
                cname,
            };
            commands::publish::publish(target, archive, &assets, &index, cli.quiet).await
        }
        Commands::Show { store } => commands::show::show(store),
        Commands::Assets => commands::assets::list_assets(),
    }
}
