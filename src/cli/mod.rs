//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for confinject using clap.

pub mod commands;

use crate::core::ConfigProvider;
use crate::domain::Result;
use crate::source::{Properties, SourceLoader};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// confinject - typed configuration resolution
#[derive(Parser, Debug)]
#[command(name = "confinject")]
#[command(version, about, long_about = None)]
#[command(author = "Confinject Contributors")]
pub struct Cli {
    /// Directories probed for the bootstrap property file, in order
    #[arg(
        short = 'p',
        long = "search-path",
        env = "CONFINJECT_SEARCH_PATH",
        value_delimiter = ',',
        default_value = "."
    )]
    pub search_paths: Vec<PathBuf>,

    /// Override property (key=value), merged on the first resolution
    #[arg(short = 'o', long = "override", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CONFINJECT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one configuration key as a typed value
    Resolve(commands::resolve::ResolveArgs),

    /// Show the selected bootstrap source and the property table
    Show(commands::show::ShowArgs),

    /// Resolve every site declared in a site manifest
    Check(commands::check::CheckArgs),
}

impl Cli {
    /// Builds the provider from the global options
    ///
    /// `--override` values go through the override channel after
    /// construction, so they are merged on top of the bootstrap file.
    pub fn build_provider(&self) -> Result<ConfigProvider> {
        let loader = SourceLoader::new().with_search_paths(self.search_paths.iter().cloned());
        let provider = ConfigProvider::builder().loader(loader).build()?;

        if !self.overrides.is_empty() {
            let overrides: Properties = self.overrides.iter().cloned().collect();
            provider.set_overrides(overrides);
        }

        Ok(provider)
    }
}

fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid override '{raw}': expected key=value"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid override '{raw}': empty key"));
    }

    Ok((key.to_string(), value.to_string()))
}
