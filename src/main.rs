use clap::Parser;
use tracing::error;

use clipkeep_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use clipkeep_lib::cli::{Cli, Command, WatchArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = bootstrap::resolve_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Watch(WatchArgs::default())) {
        Command::Password(args) => {
            let options = args.apply(config.password);
            println!("{}", bootstrap::run_password(&options)?);
            Ok(())
        }
        Command::Watch(args) => {
            if let Some(interval_ms) = args.interval_ms {
                config.watcher_interval_ms = interval_ms;
            }
            init_tracing_subscriber(&config)?;

            if let Err(err) = bootstrap::run_watch(&config).await {
                error!(error = %err, "clipkeep stopped with an error");
                return Err(err);
            }
            Ok(())
        }
    }
}
