use anyhow::Context;
use clap::Parser;
use tracy_core::CoreError;
use tracy_db::error::DatabaseError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[cfg(test)]
mod test_support;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tracy error: {error:#}");
        if let Some(hint) = error_hint(&error) {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to open the tracy database")?;

    let result = commands::dispatch::dispatch(cli.command, &ctx, &flags).await;
    ctx.close();
    result
}

/// A short follow-up line for errors the user can fix by changing the input.
fn error_hint(error: &anyhow::Error) -> Option<&'static str> {
    let recoverable = error
        .downcast_ref::<DatabaseError>()
        .is_some_and(DatabaseError::is_recoverable)
        || matches!(error.downcast_ref::<CoreError>(), Some(CoreError::Validation(_)));
    recoverable.then_some("nothing was saved; correct the input and run the command again")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TRACY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
