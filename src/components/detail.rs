//! Sponsor detail block component

use maud::{Markup, html};

use crate::data::Sponsor;

/// Renders one sponsor as a self-contained block
///
/// Produces a link to the sponsor's site wrapping the logo image and the
/// display name, followed by the greeting text when present. Optional
/// fields that are absent simply omit their sub-element; there are no
/// error conditions.
///
/// The logo's alt text is derived from the label, and per-sponsor size
/// overrides are merged into the image's inline style.
///
/// # Arguments
///
/// * `sponsor`: Sponsor record to render
///
/// # Returns
///
/// Sponsor detail markup
pub fn sponsor_details(sponsor: &Sponsor) -> Markup {
    html! {
        div class="sponsor-details" {
            div class="sponsor-title" {
                a href=(sponsor.link_target) title=[sponsor.label] {
                    @if let Some(logo) = sponsor.logo_img_path {
                        @let alt = format!("Logo {}", sponsor.label.unwrap_or(sponsor.id));
                        @if let Some(style) = &sponsor.logo_style {
                            img src=(logo) alt=(alt) style=(style.inline());
                        } @else {
                            img src=(logo) alt=(alt);
                        }
                    }
                    @if let Some(label) = sponsor.label {
                        p { (label) }
                    }
                }
            }

            @if let Some(greeting) = sponsor.greeting_text {
                div class="greeting-text" {
                    p { (greeting) }
                }
            }
        }
    }
}
