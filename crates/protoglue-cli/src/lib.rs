mod config;
pub use config::Config;

use anyhow::{Context, Result};
use clap::Parser;
use protoglue::{json, Options};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "protoglue")]
#[command(about = "Convert a protobuf message schema into table catalog columns")]
#[command(version)]
pub struct Cli {
    /// Path to the .proto file
    pub proto: PathBuf,

    /// Fully-qualified name of the message to convert (defaults to the first
    /// top-level message)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Override a type mapping entry, e.g. `--map int32=BIG_INT`
    #[arg(long = "map", value_name = "TAG=TYPE", value_parser = parse_mapping)]
    pub mappings: Vec<(String, String)>,

    /// Additional import search path
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    pub includes: Vec<PathBuf>,

    /// TOML config file with include paths and mapping overrides
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The config file, if any, with command-line flags layered on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::new(),
        };

        for include in &self.includes {
            config = config.include(include);
        }

        for (tag, ty) in &self.mappings {
            config = config.map(tag, ty);
        }

        Ok(config)
    }

    /// Generates the schema and renders it as JSON.
    pub fn run(&self) -> Result<String> {
        let config = self.config()?;
        debug!(?config, "resolved configuration");

        let options = Options {
            message: self.message.clone(),
            mapping: config.type_mapping()?,
        };

        let columns = protoglue::generate_schema(&config.loader(), &self.proto, &options)
            .with_context(|| format!("failed to generate schema for {}", self.proto.display()))?;

        let output = if self.compact {
            json::to_string(&columns)?
        } else {
            json::to_string_pretty(&columns)?
        };

        Ok(output)
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_mapping(src: &str) -> Result<(String, String), String> {
    match src.split_once('=') {
        Some((tag, ty)) if !tag.trim().is_empty() && !ty.trim().is_empty() => {
            Ok((tag.trim().to_string(), ty.trim().to_string()))
        }
        _ => Err(format!("expected TAG=TYPE, got `{src}`")),
    }
}
