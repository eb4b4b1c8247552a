//! `serve` command - start the web server.

use std::path::{Path, PathBuf};

use anyhow::Result;
use promptlab_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Locations checked for a UI build when `--static-dir` is not given.
const STATIC_DIR_CANDIDATES: [&str; 3] = ["./static", "./frontend/dist", "./dist"];

/// Arguments for the serve command.
#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub api_only: bool,
}

/// Resolve the UI directory: `--api-only` wins, then an explicit
/// `--static-dir`, then the first candidate containing `index.html`.
pub fn resolve_static_dir(explicit: Option<PathBuf>, api_only: bool) -> Option<PathBuf> {
    if api_only {
        return None;
    }
    explicit.or_else(|| {
        STATIC_DIR_CANDIDATES
            .into_iter()
            .map(Path::new)
            .find(|path| path.join("index.html").exists())
            .map(Path::to_path_buf)
    })
}

/// Build the server configuration from CLI input.
pub fn server_config(config: &CliConfig, args: ServeArgs) -> ServerConfig {
    let store = config.store_config(&args.data_dir);
    let mut server = ServerConfig::default()
        .with_bind(args.host, args.port)
        .with_templates_dir(args.templates_dir)
        .with_openrouter(config.openrouter.clone())
        .with_store(store);

    if let Some(dir) = resolve_static_dir(args.static_dir, args.api_only) {
        server = server.with_static_dir(dir);
    }
    server
}

/// Start the server and run until it stops.
pub async fn execute(config: &CliConfig, args: ServeArgs) -> Result<()> {
    let server = server_config(config, args);

    println!();
    match server.static_dir {
        Some(ref dir) => {
            println!("  promptlab web server starting...");
            println!();
            println!("  Serving UI from: {}", dir.display());
            println!("  Local:   http://localhost:{}", server.port);
        }
        None => {
            println!("  promptlab web server starting (API only)...");
            println!();
            println!("  API:     http://localhost:{}/api", server.port);
            println!();
            println!("  Tip: Use --static-dir to serve a frontend build");
        }
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(server).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use promptlab_store::StoreConfig;

    use crate::parser::Cli;

    fn args(static_dir: Option<PathBuf>, api_only: bool) -> ServeArgs {
        ServeArgs {
            host: "127.0.0.1".to_string(),
            port: 8123,
            static_dir,
            data_dir: PathBuf::from("runs"),
            templates_dir: PathBuf::from("prompts"),
            api_only,
        }
    }

    #[test]
    fn test_api_only_overrides_static_dir() {
        assert_eq!(resolve_static_dir(Some(PathBuf::from("ui")), true), None);
        assert_eq!(
            resolve_static_dir(Some(PathBuf::from("ui")), false),
            Some(PathBuf::from("ui"))
        );
    }

    #[test]
    fn test_server_config_from_args() {
        let cli = Cli::parse_from(["promptlab", "serve"]);
        let config = CliConfig {
            supabase_url: None,
            supabase_key: None,
            ..CliConfig::from_cli(&cli)
        };

        let server = server_config(&config, args(Some(PathBuf::from("ui")), false));

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 8123);
        assert_eq!(server.static_dir, Some(PathBuf::from("ui")));
        assert_eq!(server.templates_dir, PathBuf::from("prompts"));
        assert_eq!(server.store, StoreConfig::file("runs"));
    }
}
