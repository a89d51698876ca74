use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vchconf::cli::commands::{Cli, Cmd};
use vchconf::utils::io::{load_document, write_document, DocumentFormat};
use vchconf::utils::logging::init_logging;
use vchconf::validators::{numeric_validators, split_camel_case, validate, PatternName};
use vchconf::{api_to_ui, ui_to_api, Settings, VchApi, VchUi};

fn convert_to_api(input: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let ui: VchUi = load_document(input, DocumentFormat::from_path(input))?;
    let api = ui_to_api(&ui);
    write_document(&api, output, settings.pretty)?;
    info!(input = %input.display(), "converted UI model to API request body");
    Ok(())
}

fn convert_to_ui(input: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let api: VchApi = load_document(input, DocumentFormat::from_path(input))?;
    let ui = api_to_ui(&api)
        .with_context(|| format!("cannot load {} into the UI model", input.display()))?;
    write_document(&ui, output, settings.pretty)?;
    info!(input = %input.display(), "converted API document to UI model");
    Ok(())
}

fn check_pattern(name: PatternName, value: &str) -> Result<()> {
    let pattern = name.pattern();
    debug!(pattern = pattern.name(), source = pattern.source(), "checking value");
    if pattern.is_match(value) {
        println!("'{}' matches {}", value, pattern.name());
        Ok(())
    } else {
        Err(anyhow!("'{}' does not match {}", value, pattern.name()))
    }
}

fn check_numeric(value: &str, allow_unlimited: bool, field: &str, settings: &Settings) -> Result<()> {
    let rules = numeric_validators(allow_unlimited);
    match validate(&rules, Some(value)) {
        None => {
            println!("{} is valid", split_camel_case(field));
            Ok(())
        }
        Some(errors) => {
            write_document(&errors, None, settings.pretty)?;
            let keys: Vec<_> = errors.keys().map(String::as_str).collect();
            Err(anyhow!("{} is invalid: {}", split_camel_case(field), keys.join(", ")))
        }
    }
}

fn list_patterns() {
    for name in PatternName::value_variants() {
        let pattern = name.pattern();
        let arg = name
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        println!("{:<20} {}", arg, pattern.source());
    }
}

const BIN_NAME: &str = "vchconf";

/// Write fish completions to `<config_dir>/fish/completions/vchconf.fish`.
fn install_fish_completions() -> Result<PathBuf> {
    let fish_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("no user config directory"))?
        .join("fish")
        .join("completions");
    fs::create_dir_all(&fish_dir)
        .with_context(|| format!("failed to create {}", fish_dir.display()))?;

    let path = fish_dir.join(format!("{BIN_NAME}.fish"));
    let mut file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    clap_complete::generate(Shell::Fish, &mut Cli::command(), BIN_NAME, &mut file);
    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    settings.json_logs |= cli.json_logs;
    init_logging(&settings.log_level, settings.json_logs);

    match cli.cmd {
        Cmd::ToApi { input, output } => {
            convert_to_api(&input, output.as_deref(), &settings)?;
        }

        Cmd::ToUi { input, output } => {
            convert_to_ui(&input, output.as_deref(), &settings)?;
        }

        Cmd::Check { pattern, value } => {
            check_pattern(pattern, &value)?;
        }

        Cmd::Numeric {
            value,
            allow_unlimited,
            field,
        } => {
            check_numeric(&value, allow_unlimited, &field, &settings)?;
        }

        Cmd::Patterns => list_patterns(),

        Cmd::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        }

        Cmd::InstallFish => {
            let path = install_fish_completions()?;
            println!("Fish completions installed to: {}", path.display());
        }

        Cmd::ManPage => {
            clap_mangen::Man::new(Cli::command()).render(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}
