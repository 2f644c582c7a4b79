//! Tier section component

use maud::{Markup, html};

use super::detail::sponsor_details;
use crate::data::Sponsor;

/// Renders one sponsorship tier as a heading followed by its sponsors
///
/// Sponsors are rendered in ascending lexical order of their id. Sorting is
/// a pure transformation over borrowed records and never mutates the input
/// slice. An empty tier renders its heading with no entries.
///
/// # Arguments
///
/// * `label`: Heading text for the tier
/// * `sponsors`: Sponsor records in this tier, in any order
///
/// # Returns
///
/// Tier section markup
pub fn tier_section(label: &str, sponsors: &[Sponsor]) -> Markup {
    let mut sorted: Vec<&Sponsor> = sponsors.iter().collect();
    sorted.sort_by_key(|sponsor| sponsor.id);

    html! {
        h2 { (label) }
        @for sponsor in &sorted {
            (sponsor_details(sponsor))
        }
    }
}
