//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - call: run one API call through the interceptors
//! - classify: show how a failure value would be classified
//! - session: inspect or change the persisted session flag

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// docdesk - document-management API client
#[derive(Parser, Debug)]
#[command(name = "docdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// HTTP methods the call command accepts
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl CallMethod {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            CallMethod::Get => reqwest::Method::GET,
            CallMethod::Post => reqwest::Method::POST,
            CallMethod::Put => reqwest::Method::PUT,
            CallMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Call an endpoint and print the response data
    Call {
        /// Endpoint path relative to the base URL (e.g. "document/search")
        path: String,

        /// HTTP method
        #[arg(short, long, value_enum, default_value = "get")]
        method: CallMethod,

        /// Query parameters as key=value, repeatable
        #[arg(short, long = "query", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },

    /// Classify a failure value given as JSON
    Classify {
        /// Failure JSON, e.g. '{"status":"FETCH_ERROR","error":"offline"}'
        json: String,
    },

    /// Session flag management
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

/// Session flag subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommands {
    /// Show the stored flag
    Status,

    /// Remove the flag
    Clear,

    /// Set the flag to false
    Invalidate,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing key in '{}'", s)),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["docdesk"]).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["docdesk", "-v", "session", "status"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli =
            Cli::try_parse_from(["docdesk", "-c", "/path/to/docdesk.yml", "session", "status"])
                .unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/docdesk.yml")));
    }

    #[test]
    fn test_call_defaults_to_get() {
        let cli = Cli::try_parse_from(["docdesk", "call", "profile"]).unwrap();
        match cli.command {
            Commands::Call { path, method, query } => {
                assert_eq!(path, "profile");
                assert_eq!(method, CallMethod::Get);
                assert!(query.is_empty());
            }
            _ => panic!("Expected call command"),
        }
    }

    #[test]
    fn test_call_with_method_and_query() {
        let cli = Cli::try_parse_from([
            "docdesk",
            "call",
            "document/search",
            "--method",
            "post",
            "-q",
            "page=0",
            "-q",
            "name=",
        ])
        .unwrap();
        match cli.command {
            Commands::Call { method, query, .. } => {
                assert_eq!(method.as_reqwest(), reqwest::Method::POST);
                assert_eq!(
                    query,
                    vec![("page".to_string(), "0".to_string()), ("name".to_string(), String::new())]
                );
            }
            _ => panic!("Expected call command"),
        }
    }

    #[test]
    fn test_call_rejects_bad_query() {
        assert!(Cli::try_parse_from(["docdesk", "call", "x", "-q", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["docdesk", "call", "x", "-q", "=v"]).is_err());
    }

    #[test]
    fn test_classify() {
        let cli =
            Cli::try_parse_from(["docdesk", "classify", r#"{"status":"FETCH_ERROR"}"#]).unwrap();
        assert!(matches!(cli.command, Commands::Classify { .. }));
    }

    #[test]
    fn test_session_subcommands() {
        for (arg, expected) in [
            ("status", SessionCommands::Status),
            ("clear", SessionCommands::Clear),
            ("invalidate", SessionCommands::Invalidate),
        ] {
            let cli = Cli::try_parse_from(["docdesk", "session", arg]).unwrap();
            match cli.command {
                Commands::Session { command } => assert_eq!(command, expected),
                _ => panic!("Expected session command"),
            }
        }
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
