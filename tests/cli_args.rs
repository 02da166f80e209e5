//! Integration tests for CLI argument handling
//!
//! Runs the compiled binary for flags that exit before the server starts.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hvac-reviews"))
        .args(args)
        .output()
        .expect("Failed to execute hvac-reviews")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hvac-reviews"), "Help should mention the binary");
    assert!(stdout.contains("--port"), "Help should mention --port flag");
    assert!(stdout.contains("--host"), "Help should mention --host flag");
}

#[test]
fn test_invalid_port_prints_error_and_exits() {
    let output = run_cli(&["--port", "not-a-port"]);
    assert!(!output.status.success(), "Expected invalid port to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid") || stderr.contains("Invalid"),
        "Should print error message about invalid port: {}",
        stderr
    );
}

#[test]
fn test_invalid_host_fails_before_binding() {
    let output = run_cli(&["--host", "not a host", "--port", "0"]);
    assert!(!output.status.success(), "Expected invalid host to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid listen address"),
        "Should report the bad address: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use hvac_reviews::cli::Cli;

    #[test]
    fn test_cli_flags_override_defaults() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "127.0.0.1", "--port", "4000"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 4000);
    }

    #[tokio::test]
    async fn test_listen_addr_from_flags() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "0.0.0.0", "--port", "3000"]);
        assert_eq!(cli.listen_addr().await.unwrap().to_string(), "0.0.0.0:3000");
    }

    #[tokio::test]
    async fn test_listen_addr_accepts_hostname() {
        let cli = Cli::parse_from(["hvac-reviews", "--host", "localhost", "--port", "3000"]);
        let addr = cli.listen_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
    }
}
