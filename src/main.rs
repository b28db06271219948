use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use bracket_guard::checker::{BracketChecker, FileReport};
use bracket_guard::cli::{CheckArgs, Cli, Commands, InitArgs};
use bracket_guard::config::Config;
use bracket_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use bracket_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> bracket_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    // 3. Refuse inputs outside the accepted extension list
    for path in &args.paths {
        if !config.accepts_extension(path) {
            return Err(bracket_guard::BracketGuardError::UnsupportedExtension {
                path: path.clone(),
                expected: config.extensions.join(", "),
            });
        }
    }

    // 4. Check each file (parallel with rayon; each scan owns its state)
    let checker = BracketChecker::new(config);
    let mut reports = args
        .paths
        .par_iter()
        .map(|path| check_file(path, &checker))
        .collect::<bracket_guard::Result<Vec<_>>>()?;
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    // 5. Format output
    let output = format_output(args.format, &reports, cli)?;

    // 6. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Determine exit code
    let has_violations = reports.iter().any(|r| !r.is_clean());
    if has_violations && !args.warn_only {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> bracket_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    config_path.map_or_else(Config::load, Config::load_from_path)
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_lines) = args.max_lines {
        config.max_line_count = max_lines;
    }

    if let Some(max_line_length) = args.max_line_length {
        config.max_line_length = max_line_length;
    }

    if let Some(directive) = &args.directive {
        config.disallowed_directive.clone_from(directive);
    }
}

fn check_file(path: &Path, checker: &BracketChecker) -> bracket_guard::Result<FileReport> {
    let content =
        fs::read_to_string(path).map_err(|source| bracket_guard::BracketGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let lines: Vec<&str> = content.lines().collect();
    Ok(checker.check_file(path, &lines))
}

fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    cli: &Cli,
) -> bracket_guard::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.color, cli.verbose).format(reports)
        }
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> bracket_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> bracket_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(bracket_guard::BracketGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, Config::template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}
