use std::path::PathBuf;

use super::*;
use crate::output::OutputFormat;

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["bracket-guard", "check", "a.cpp", "b.cpp"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("a.cpp"), PathBuf::from("b.cpp")]
            );
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_requires_a_path() {
    assert!(Cli::try_parse_from(["bracket-guard", "check"]).is_err());
}

#[test]
fn cli_check_with_config() {
    let cli = Cli::parse_from(["bracket-guard", "check", "--config", "custom.toml", "a.cpp"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_policy_overrides() {
    let cli = Cli::parse_from([
        "bracket-guard",
        "check",
        "--max-lines",
        "300",
        "--max-line-length",
        "120",
        "--directive",
        "#include",
        "a.cpp",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.max_lines, Some(300));
            assert_eq!(args.max_line_length, Some(120));
            assert_eq!(args.directive, Some("#include".to_string()));
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_format_json() {
    let cli = Cli::parse_from(["bracket-guard", "check", "--format", "json", "a.cpp"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Json);
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["bracket-guard", "check", "a.cpp"]);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert!(!cli.no_config);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.output.is_none());
            assert!(!args.warn_only);
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["bracket-guard", "check", "-vv", "--quiet", "a.cpp"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["bracket-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".bracket-guard.toml"));
            assert!(!args.force);
        }
        Commands::Check(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_force_and_output() {
    let cli = Cli::parse_from(["bracket-guard", "init", "--force", "--output", "cfg.toml"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("cfg.toml"));
            assert!(args.force);
        }
        Commands::Check(_) => panic!("Expected Init command"),
    }
}
