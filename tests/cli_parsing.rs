//! Tests for the clap surface of the CLI.

use clap::Parser;
use memlink::cli::{Cli, Commands};

#[test]
fn parse_key_with_token() {
    let cli = Cli::try_parse_from(vec!["memlink", "key", "abc-123", "--token", "tok-456"]).unwrap();

    match cli.command {
        Commands::Key(args) => {
            assert_eq!(args.api_key, "abc-123");
            assert_eq!(args.token.as_deref(), Some("tok-456"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_key_short_token_flag() {
    let cli = Cli::try_parse_from(vec!["memlink", "key", "abc-123", "-t", "tok-456"]).unwrap();

    match cli.command {
        Commands::Key(args) => assert_eq!(args.token.as_deref(), Some("tok-456")),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_key_without_token() {
    let cli = Cli::try_parse_from(vec!["memlink", "key", "abc-123"]).unwrap();

    match cli.command {
        Commands::Key(args) => {
            assert_eq!(args.api_key, "abc-123");
            assert!(args.token.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_connect() {
    let cli = Cli::try_parse_from(vec!["memlink", "connect", "Claude"]).unwrap();

    match cli.command {
        Commands::Connect(args) => assert_eq!(args.agent_name, "Claude"),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_list_all() {
    let cli = Cli::try_parse_from(vec!["memlink", "list", "--all"]).unwrap();

    match cli.command {
        Commands::List(args) => {
            assert!(args.all);
            assert!(args.status.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_list_status() {
    let cli = Cli::try_parse_from(vec!["memlink", "list", "--status", "claude"]).unwrap();

    match cli.command {
        Commands::List(args) => {
            assert!(!args.all);
            assert_eq!(args.status.as_deref(), Some("claude"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_start_default_port() {
    let cli = Cli::try_parse_from(vec!["memlink", "start"]).unwrap();

    match cli.command {
        Commands::Start(args) => assert_eq!(args.port, 8000),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_start_custom_port() {
    let cli = Cli::try_parse_from(vec!["memlink", "start", "--port", "9000"]).unwrap();

    match cli.command {
        Commands::Start(args) => assert_eq!(args.port, 9000),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn json_flag_is_global() {
    let cli = Cli::try_parse_from(vec!["memlink", "list", "--all", "--json"]).unwrap();
    assert!(cli.json);
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(vec!["memlink"]).is_err());
}
