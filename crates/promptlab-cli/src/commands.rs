//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (JSON API plus optional browser UI)
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
        /// Directory containing the built UI (index.html)
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Directory for the local JSON result files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Directory of prompt template YAML files
        #[arg(long, default_value = "templates")]
        templates_dir: PathBuf,
        /// Serve the API only, even if a UI build is found
        #[arg(long)]
        api_only: bool,
    },

    /// Run the prompt in a YAML file against each listed model and write a Markdown report
    Run {
        /// YAML file with `prompt` and `models`
        config: PathBuf,
        /// Directory for the report
        #[arg(short, long, default_value = "results")]
        output_dir: PathBuf,
        /// Completion budget per model
        #[arg(long)]
        max_tokens: Option<u32>,
    },
}
