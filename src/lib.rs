//! Static site generator for the event sponsors page.

mod assets;
pub mod components;
mod config;
mod data;
mod generators;
mod markdown;
pub mod pages;

pub use assets::write_css_assets;
pub use config::Config;
pub use data::{LogoStyle, SPONSORS, Sponsor, SponsorTable, Tier};
pub use generators::generate_site;
pub use markdown::MarkdownRenderer;
