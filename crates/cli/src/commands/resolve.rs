use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use runargs_core::{ArgumentSet, DirectoryStorage, PluginRegistry, RunConfigurationBuilder};

use crate::config::load_argument_file;
use crate::utils::parse_argument_pairs;

pub fn resolve_command(
    pairs: &[String],
    args_file: Option<&Path>,
    storage_root: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let mut arguments = match args_file {
        Some(path) => load_argument_file(path)?,
        None => ArgumentSet::new(),
    };
    arguments.merge(parse_argument_pairs(pairs)?);
    debug!("Resolving {} arguments", arguments.len());

    let registry = PluginRegistry::with_builtins();
    let storage = storage_root.map(DirectoryStorage::new);

    let mut builder = RunConfigurationBuilder::new(&registry);
    if let Some(storage) = &storage {
        info!("Using test storage at {}", storage.root().display());
        builder = builder.with_storage(storage);
    }

    let config = builder
        .resolve(&arguments)
        .context("Failed to resolve run arguments")?;

    let json = if pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    println!("{json}");

    Ok(())
}
