//! Page footer component

use maud::{Markup, html};

/// Renders the shared page footer with generator credit
pub fn footer() -> Markup {
    html! {
        footer {
            p {
                "Generated by "
                a href="https://github.com/hackathon-goerlitz/sponsorgen" target="_blank" {
                    "sponsorgen"
                }
            }
        }
    }
}
