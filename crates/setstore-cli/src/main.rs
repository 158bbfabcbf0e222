//! Setstore CLI - entrypoint for the settings API server

mod commands;

use clap::{Parser, Subcommand};
use commands::ServeCommand;
use tracing_subscriber::{layer::SubscriberExt, Layer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        env = "SETSTORE_LOG_LEVEL",
        global = true
    )]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "SETSTORE_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve(ServeCommand),
}

fn build_filter(log_level: &str) -> anyhow::Result<tracing_subscriber::EnvFilter> {
    // RUST_LOG takes full control when set
    if std::env::var("RUST_LOG").is_ok() {
        return tracing_subscriber::EnvFilter::try_from_default_env()
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG environment variable: {}", e));
    }

    // All setstore crates at the requested level, noisy dependencies at warn
    Ok(tracing_subscriber::EnvFilter::new(format!(
        "setstore={level},\
         setstore_cli={level},\
         setstore_core={level},\
         setstore_auth={level},\
         setstore_cache={level},\
         setstore_database={level},\
         setstore_entities={level},\
         setstore_settings={level},\
         tower_http={level},\
         sqlx=warn,\
         sea_orm=warn,\
         redis=warn,\
         h2=warn,\
         tower=warn,\
         hyper=warn",
        level = log_level
    )))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = build_filter(&cli.log_level)?;

    let fmt_layer = match cli.log_format.as_str() {
        "full" => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer() // "compact" or any other value
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve(serve_cmd) => serve_cmd.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["setstore", "serve"]).unwrap();

        assert_eq!(cli.log_format, "compact");
        let Commands::Serve(serve) = cli.command;
        assert_eq!(serve.port, 8080);
        assert_eq!(serve.db_host, "db");
        assert_eq!(serve.db_port, 5432);
        assert_eq!(serve.db_user, "postgres");
        assert_eq!(serve.db_password, "example");
        assert_eq!(serve.db_name, "settingsdb");
        assert_eq!(serve.redis_host, "redis");
        assert_eq!(serve.redis_port, 6379);
        assert_eq!(serve.secret, "my-secret");
        assert_eq!(serve.admin_username, "admin");
        assert_eq!(serve.admin_password, "SabziPolo");
        assert!(!serve.init_schema);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "setstore",
            "serve",
            "--log-level",
            "debug",
            "--port",
            "9000",
            "--init-schema",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "debug");
        let Commands::Serve(serve) = cli.command;
        assert_eq!(serve.port, 9000);
        assert!(serve.init_schema);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["setstore", "serve", "--port", "http"]).is_err());
    }

    #[test]
    fn test_build_filter_from_level() {
        std::env::remove_var("RUST_LOG");
        assert!(build_filter("debug").is_ok());
    }
}
