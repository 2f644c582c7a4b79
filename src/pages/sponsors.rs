//! Sponsors page composition

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::tier::tier_section;
use crate::data::{SPONSORS, SponsorTable, Tier};
use crate::markdown::MarkdownRenderer;

/// Page title, also used for head metadata by the layout wrapper.
pub const PAGE_TITLE: &str = "Unsere Sponsoren";

/// Introductory passage shown above the tier sections. Markdown.
const INTRO_TEXT: &str = "\
# Unsere Sponsoren

Wir bedanken uns bei unseren Sponsoren, ohne die der Hackathon so nicht möglich wäre.
Wir glauben, dass ein Hackathon in Görlitz ein Beitrag zur positiven Entwicklung der Region sein kann.
In Görlitz und der Oberlausitz gibt es viele junge und kluge Leute, die ihre Kreativität für
sinnvolle Projekte einsetzen möchten. Ein Hackathon kann ein Ort dafür sein und Technik-interessierte
Menschen zusammenbringen.
Unsere Sponsoren unterstützen uns aktiv bei der Verwirklichung dieser Vision.
";

/// Renders all tier sections for a sponsor table
///
/// Tiers appear in fixed order (gold, silver, bronze), each as a heading
/// followed by its sponsors sorted ascending by id.
///
/// # Arguments
///
/// * `table`: Sponsor table to render
///
/// # Returns
///
/// Overview markup with one section per tier
pub fn sponsor_overview(table: &SponsorTable<'_>) -> Markup {
    html! {
        div class="sponsor-overview" {
            @for tier in Tier::ALL {
                (tier_section(tier.heading(), table.tier(tier)))
            }
        }
    }
}

/// Generates the complete sponsors page
///
/// Composes the markdown intro and the tier overview inside the shared
/// page chrome. Output is deterministic: the sponsor table is static, so
/// repeated invocations produce byte-identical markup.
///
/// # Returns
///
/// Complete HTML document markup
pub fn generate() -> Markup {
    let intro = MarkdownRenderer::new().render(INTRO_TEXT);

    page_wrapper(
        PAGE_TITLE,
        &["assets/sponsors.css", "assets/markdown.css"],
        html! {
            section class="intro" {
                (PreEscaped(intro))
            }
            (sponsor_overview(&SPONSORS))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sponsor;

    fn sponsor(id: &'static str) -> Sponsor {
        Sponsor {
            id,
            label: Some(id),
            link_target: "https://example.com",
            logo_img_path: None,
            greeting_text: None,
            logo_style: None,
        }
    }

    #[test]
    fn test_overview_tier_order_is_fixed() {
        // Arrange & Act
        let html = sponsor_overview(&SPONSORS).into_string();

        // Assert
        let gold = html.find("<h2>Gold</h2>").expect("Gold heading");
        let silver = html.find("<h2>Silber</h2>").expect("Silber heading");
        let bronze = html.find("<h2>Bronze</h2>").expect("Bronze heading");
        assert!(gold < silver, "Gold before Silber");
        assert!(silver < bronze, "Silber before Bronze");
    }

    #[test]
    fn test_overview_sorts_gold_and_keeps_empty_tiers() {
        // Arrange: unsorted gold, empty silver and bronze
        let table = SponsorTable {
            gold: &[sponsor("b"), sponsor("a")],
            silver: &[],
            bronze: &[],
        };

        // Act
        let html = sponsor_overview(&table).into_string();

        // Assert
        let pos_a = html.find("<p>a</p>").expect("Should render sponsor a");
        let pos_b = html.find("<p>b</p>").expect("Should render sponsor b");
        assert!(pos_a < pos_b, "Gold renders a before b: {}", html);
        assert!(html.contains("<h2>Silber</h2>"), "Empty tier keeps heading");
        assert!(html.contains("<h2>Bronze</h2>"), "Empty tier keeps heading");
        let after_silver = &html[html.find("<h2>Silber</h2>").unwrap()..];
        assert!(
            !after_silver.contains("sponsor-details"),
            "No sponsor blocks after Silber: {}",
            after_silver
        );
    }

    #[test]
    fn test_page_contains_intro_and_all_sponsors() {
        // Arrange & Act
        let html = generate().into_string();

        // Assert
        assert!(html.contains("<h1>"), "Intro heading rendered from markdown");
        assert!(
            html.contains("bedanken uns bei unseren Sponsoren"),
            "Intro text present"
        );
        for sponsor in SPONSORS.iter() {
            assert!(
                html.contains(sponsor.link_target),
                "Page should link sponsor {}",
                sponsor.id
            );
        }
    }

    #[test]
    fn test_page_title_in_head() {
        let html = generate().into_string();
        assert!(
            html.contains("<title>Unsere Sponsoren</title>"),
            "Title exposed to head metadata"
        );
    }

    #[test]
    fn test_page_render_is_deterministic() {
        // Arrange & Act
        let first = generate().into_string();
        let second = generate().into_string();

        // Assert
        assert_eq!(first, second, "Repeated renders must be byte-identical");
    }
}
