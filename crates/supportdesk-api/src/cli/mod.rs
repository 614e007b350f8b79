//! CLI definitions for the `supportd` binary.

use clap::{Parser, Subcommand};

/// Customer support chat backend.
#[derive(Parser)]
#[command(name = "supportd", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Detailed output (-v for debug, -vv for trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter forced by `-v` flags; `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info,supportdesk=debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "8000", env = "SUPPORTDESK_PORT")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1", env = "SUPPORTDESK_HOST")]
        host: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["supportd", "serve"]).unwrap();
        assert_eq!(cli.log_level(), None);
        assert!(!cli.otel);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, 8000);
                assert_eq!(host, "127.0.0.1");
            }
        }
    }

    #[test]
    fn verbosity_flags_raise_level() {
        let cli = Cli::try_parse_from(["supportd", "-vv", "serve", "--port", "9000"]).unwrap();
        assert_eq!(cli.log_level(), Some("trace"));
    }
}
