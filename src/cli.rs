//! Command-line interface parsing for the reviews server
//!
//! Listener settings come from flags or their environment fallbacks; upstream
//! credentials are read separately by [`crate::config::Config`].

use std::net::SocketAddr;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Host and port do not form a socket address
    #[error("Invalid listen address: '{0}'")]
    InvalidAddress(String),
}

/// HVAC reviews server - serves cached Google reviews at /api/reviews
#[derive(Parser, Debug)]
#[command(name = "hvac-reviews")]
#[command(about = "Cached Google Places reviews API for the HVAC marketing site")]
#[command(version)]
pub struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    pub port: u16,
}

impl Cli {
    /// Resolves host and port into a socket address.
    ///
    /// The host may be an IP literal or a hostname such as `localhost`.
    ///
    /// # Returns
    /// * `Ok(SocketAddr)` - The first address the host resolves to
    /// * `Err(CliError::InvalidAddress)` if resolution fails or yields nothing
    pub async fn listen_addr(&self) -> Result<SocketAddr, CliError> {
        let invalid = || CliError::InvalidAddress(format!("{}:{}", self.host, self.port));

        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_explicit_flags() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8080);
    }

    #[tokio::test]
    async fn test_cli_parse_short_flags() {
        let cli = Cli::parse_from(["hvac-reviews", "-H", "::1", "-p", "9000"]);
        assert_eq!(cli.host, "::1");
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.listen_addr().await.unwrap().to_string(), "[::1]:9000");
    }

    #[tokio::test]
    async fn test_listen_addr() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "127.0.0.1", "--port", "8080"]);
        let addr = cli.listen_addr().await.unwrap();
        assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_listen_addr_resolves_localhost() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "localhost", "--port", "8080"]);
        let addr = cli.listen_addr().await.expect("localhost should resolve");
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[tokio::test]
    async fn test_listen_addr_invalid_host() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "not a host", "--port", "8080"]);
        let err = cli.listen_addr().await.unwrap_err();
        assert!(err.to_string().contains("Invalid listen address"));
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        let result = Cli::try_parse_from(["hvac-reviews", "--port", "seventy"]);
        assert!(result.is_err());
    }
}
