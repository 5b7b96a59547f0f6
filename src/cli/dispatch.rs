// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;

use crate::config::LintConfig;
use crate::error::{CmlError, Result, ResultExt};
use crate::rules::{resolve, RuleEngine};

use super::args::{Cli, Commands, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Config => run_config(&cli, &config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &LintConfig, args: super::args::CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::from_config(config)?;

    let results = if let Some(ref text) = args.message {
        vec![engine.validate_string(text)?]
    } else if let Some(ref path) = args.file {
        let text = std::fs::read_to_string(path).context("reading message file")?;
        vec![engine.validate_string(&text)?]
    } else if args.range || args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    let mut error_count = 0;
    let mut warning_count = 0;
    for result in &results {
        error_count += result.errors.len();
        warning_count += result.warnings.len();
        result.print(cli.format);
    }

    if error_count > 0 || (args.strict && warning_count > 0) {
        let count = if args.strict {
            error_count + warning_count
        } else {
            error_count
        };
        Err(CmlError::LintFailed { count })
    } else {
        Ok(())
    }
}

/// Run the config command: resolve and print the effective rule set.
fn run_config(cli: &Cli, config: &LintConfig) -> Result<()> {
    tracing::debug!("Resolving effective rules for '{}'", config.extends);

    let rules = resolve(config)?;

    match cli.format {
        Some(OutputFormat::Json) => {
            let json = serde_json::json!({
                "extends": config.extends,
                "rules": rules,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            println!("extends: {}", style(&config.extends).cyan());
            for (name, rule) in rules.entries() {
                let styles = rule
                    .allowed
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "{}: {} {} [{}]",
                    style(name).bold(),
                    rule.severity,
                    rule.when,
                    styles
                );
            }
        }
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cml.toml");

    if config_path.exists() && !args.force {
        return Err(CmlError::WithContext {
            context: "init".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        });
    }

    std::fs::write(config_path, example_config()).map_err(|e| CmlError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("✓ Created cml.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cml {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
