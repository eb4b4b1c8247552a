//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, initializes logging and dispatches to
//! the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use promptlab_cli::handlers::run::RunArgs;
use promptlab_cli::handlers::serve::ServeArgs;
use promptlab_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Log to stderr so command output on stdout stays clean. `-v` forces
/// debug; otherwise `RUST_LOG` applies, defaulting to info.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            static_dir,
            data_dir,
            templates_dir,
            api_only,
        } => {
            let args = ServeArgs {
                host,
                port,
                static_dir,
                data_dir,
                templates_dir,
                api_only,
            };
            handlers::serve::execute(&config, args).await?;
        }
        Commands::Run {
            config: config_path,
            output_dir,
            max_tokens,
        } => {
            let ctx = bootstrap(&config)?;
            let args = RunArgs {
                config_path,
                output_dir,
                max_tokens,
            };
            let mut stdout = std::io::stdout();
            if let Err(e) = handlers::run::execute(&ctx.executor, &args, &mut stdout).await {
                report_and_exit(&e);
            }
        }
    }

    Ok(())
}

fn report_and_exit(err: &CliError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}
