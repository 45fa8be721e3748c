//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde::Serialize;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Paths => handle_config_paths(output),
    }
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => config.to_toml()?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    output.writeln(content.trim_end())
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    if args.path.exists() && !args.force {
        output.warning(&format!("Config already exists at {}", args.path.display()))?;
        return Err(Error::config(format!(
            "{} already exists; pass --force to overwrite it",
            args.path.display()
        )));
    }

    Config::default().save(&args.path)?;
    output.success(&format!("✓ Created config at {}", args.path.display()))?;
    output.info("Edit it to customize settings for your environment.")?;
    Ok(())
}

#[derive(Serialize)]
struct SearchPath {
    path: String,
    exists: bool,
}

/// Handle config paths subcommand
fn handle_config_paths(output: &mut OutputWriter) -> Result<()> {
    let paths = Config::default_config_paths()
        .into_iter()
        .map(|path| SearchPath {
            exists: path.exists(),
            path: path.display().to_string(),
        })
        .collect::<Vec<_>>();

    if !output.is_human() {
        return output.data(&paths);
    }

    output.section("Configuration Search Paths")?;
    for entry in &paths {
        let marker = if entry.exists { "✓" } else { "✗" };
        output.writeln(&format!("{} {}", marker, entry.path))?;
    }
    Ok(())
}
