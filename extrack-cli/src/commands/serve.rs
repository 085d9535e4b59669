//! HTTP server command for the exercise tracker API

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use extrack_server::db::open_pool;
use extrack_server::models::DateComparison;
use extrack_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// SQLite database file (created if missing)
    #[arg(long, short = 'd', env = "DATABASE_PATH", default_value = "exercise-tracker.db")]
    pub database: PathBuf,

    /// Directory of static assets served for unmatched paths
    #[arg(long, env = "PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// How log from/to bounds are compared: chronological or lexicographic
    #[arg(long, env = "DATE_COMPARISON", default_value = "chronological")]
    pub date_comparison: DateComparison,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            public_dir: self.public_dir.clone(),
            date_comparison: self.date_comparison,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.database.display(), "Opening database");

    let pool = open_pool(&args.database)
        .await
        .with_context(|| format!("failed to open database at {}", args.database.display()))?;

    // Run server (blocks until shutdown)
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        let config = args.server_config();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(args.database, PathBuf::from("exercise-tracker.db"));
        assert_eq!(config.date_comparison, DateComparison::Chronological);
    }

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--date-comparison",
            "lexicographic",
            "--public-dir",
            "public",
        ])
        .unwrap();
        let config = args.server_config();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.date_comparison, DateComparison::Lexicographic);
        assert_eq!(config.public_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn rejects_unknown_comparison() {
        assert!(ServeArgs::try_parse_from(["serve", "--date-comparison", "fuzzy"]).is_err());
    }
}
