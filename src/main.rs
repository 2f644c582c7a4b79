use anyhow::{Context, Result};
use sponsorgen::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let index_path = sponsorgen::generate_site(&config)?;
    println!("Sponsors page written to {}", index_path.display());

    if config.open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
