//! Site generation workflow.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::data::SPONSORS;
use crate::pages;

/// Generates the sponsors site into the configured output directory.
///
/// Validates the sponsor table, creates the output and assets directories,
/// writes the bundled CSS, renders the sponsors page, and writes it as
/// `index.html`.
///
/// # Arguments
///
/// * `config`: Command line configuration
///
/// # Returns
///
/// Path of the written index.html
///
/// # Errors
///
/// Returns error if the sponsor table is invalid or any output file
/// cannot be written.
pub fn generate_site(config: &Config) -> Result<PathBuf> {
    SPONSORS.validate().context("Invalid sponsor table")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let index_path = config.output.join("index.html");
    let page = pages::sponsors::generate();
    fs::write(&index_path, page.into_string()).context("Failed to write index.html")?;

    Ok(index_path)
}
