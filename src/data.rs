//! Static sponsor data.
//!
//! The sponsor table is hand-authored at build time and immutable for the
//! process lifetime. Entries are grouped by tier and rendered in ascending
//! id order, so the order within each slice here is not significant.

use anyhow::{Result, bail};
use std::collections::HashSet;

/// Presentational overrides for a single sponsor logo.
///
/// Logos come in wildly different native aspect ratios. These optional
/// size constraints are merged into the logo's inline style so all logos
/// appear visually equal on the page. Absent fields emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogoStyle {
    pub max_width: Option<&'static str>,
    pub max_height: Option<&'static str>,
    pub height: Option<&'static str>,
    pub width: Option<&'static str>,
}

impl LogoStyle {
    /// Serializes the overrides as an inline CSS declaration list.
    ///
    /// # Returns
    ///
    /// Declarations in fixed property order, e.g. `"height:200px;width:200px;"`.
    /// Empty string when no field is set.
    pub fn inline(&self) -> String {
        let mut css = String::new();
        for (property, value) in [
            ("max-width", self.max_width),
            ("max-height", self.max_height),
            ("height", self.height),
            ("width", self.width),
        ] {
            if let Some(value) = value {
                css.push_str(property);
                css.push(':');
                css.push_str(value);
                css.push(';');
            }
        }
        css
    }
}

/// One sponsoring organization as shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponsor {
    /// Stable identifier, unique across the whole table. Sort key within a tier.
    pub id: &'static str,
    /// Company name as it should appear on the page.
    pub label: Option<&'static str>,
    /// URL the logo block links to.
    pub link_target: &'static str,
    /// Path or URL of the logo image, resolved by the hosting environment.
    pub logo_img_path: Option<&'static str>,
    /// Free-text greeting shown beneath the logo block.
    pub greeting_text: Option<&'static str>,
    /// Size overrides applied only to this sponsor's logo.
    pub logo_style: Option<LogoStyle>,
}

impl Sponsor {
    /// Builds the common case: id, label, link, and logo with no extras.
    pub const fn new(
        id: &'static str,
        label: &'static str,
        link_target: &'static str,
        logo_img_path: &'static str,
    ) -> Self {
        Self {
            id,
            label: Some(label),
            link_target,
            logo_img_path: Some(logo_img_path),
            greeting_text: None,
            logo_style: None,
        }
    }
}

/// Sponsorship tier. Exactly three, rendered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    /// All tiers in page order.
    pub const ALL: [Tier; 3] = [Tier::Gold, Tier::Silver, Tier::Bronze];

    /// Section heading text (the page is German).
    pub fn heading(self) -> &'static str {
        match self {
            Tier::Gold => "Gold",
            Tier::Silver => "Silber",
            Tier::Bronze => "Bronze",
        }
    }
}

/// The complete sponsor table: one ordered slice per tier.
#[derive(Debug, Clone, Copy)]
pub struct SponsorTable<'a> {
    pub gold: &'a [Sponsor],
    pub silver: &'a [Sponsor],
    pub bronze: &'a [Sponsor],
}

impl<'a> SponsorTable<'a> {
    /// Returns the sponsor slice for a tier.
    pub fn tier(&self, tier: Tier) -> &'a [Sponsor] {
        match tier {
            Tier::Gold => self.gold,
            Tier::Silver => self.silver,
            Tier::Bronze => self.bronze,
        }
    }

    /// Iterates all sponsors across all tiers in tier order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Sponsor> {
        self.gold
            .iter()
            .chain(self.silver.iter())
            .chain(self.bronze.iter())
    }

    /// Checks that sponsor ids are unique across the whole table.
    ///
    /// Duplicate ids would collide as element keys in the rendered page, so
    /// the generator refuses to produce output for an invalid table.
    ///
    /// # Errors
    ///
    /// Returns error naming the first duplicate id found.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for sponsor in self.iter() {
            if !seen.insert(sponsor.id) {
                bail!("Duplicate sponsor id in table: {}", sponsor.id);
            }
        }
        Ok(())
    }
}

/// The sponsor table for the current event.
pub const SPONSORS: SponsorTable<'static> = SponsorTable {
    gold: &[
        Sponsor::new(
            "hszg",
            "Hochschule Zittau/Görlitz",
            "https://www.hszg.de/",
            "/logo_hszg.png",
        ),
        Sponsor::new(
            "eno",
            "Unbezahlbarland / ENO",
            "https://unbezahlbar.land/",
            "/logo_ubl.png",
        ),
        Sponsor {
            id: "zeiss",
            label: Some("ZEISS Digital Innovation"),
            link_target: "https://www.zeiss.de/digital-innovation",
            logo_img_path: Some("/logo_zeiss.svg"),
            greeting_text: Some(
                "Als Fördermitglied des Digitale Oberlausitz e. V. wünschen wir allen \
                 IT-begeisterten Teilnehmenden viel Spaß und einen spannenden Austausch \
                 beim diesjährigen Hackathon! Viel Erfolg wünscht euer #teamZEISS.",
            ),
            // The ZEISS logo is much larger than the others natively
            logo_style: Some(LogoStyle {
                max_width: Some("500px"),
                max_height: Some("500px"),
                height: Some("200px"),
                width: Some("200px"),
            }),
        },
        Sponsor::new("launix", "Launix", "https://launix.de/", "/logo_launix.png"),
    ],
    silver: &[
        Sponsor::new(
            "sednasoft",
            "SednaSoft",
            "https://sedna-soft.de/",
            "/logo_sednasoft.svg",
        ),
        Sponsor::new(
            "innolabs",
            "InnoLabs",
            "https://www.innolabs-goerlitz.de",
            "/logo_innolabs.svg",
        ),
        Sponsor::new(
            "fev",
            "FEV etamax GmbH",
            "https://www.etamax.de/",
            "/logo_fev.png",
        ),
    ],
    bronze: &[
        Sponsor::new(
            "tragwerk",
            "tragwerk",
            "https://tragwerk-goerlitz.de/",
            "/logo_tragwerk.jpg",
        ),
        Sponsor::new(
            "tallence",
            "Tallence AG",
            "https://www.tallence.com",
            "/logo_tallence.svg",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ids_are_unique() {
        // Arrange & Act
        let result = SPONSORS.validate();

        // Assert
        assert!(result.is_ok(), "Shipped table must have unique ids");
    }

    #[test]
    fn test_validate_rejects_duplicate_across_tiers() {
        // Arrange: same id in gold and bronze
        let table = SponsorTable {
            gold: &[Sponsor::new("acme", "Acme", "https://acme.example", "/a.png")],
            silver: &[],
            bronze: &[Sponsor::new(
                "acme",
                "Acme Again",
                "https://acme2.example",
                "/b.png",
            )],
        };

        // Act
        let result = table.validate();

        // Assert
        assert!(result.is_err(), "Duplicate id across tiers should fail");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("acme"), "Error should name the id: {}", message);
    }

    #[test]
    fn test_every_sponsor_has_link_target() {
        for sponsor in SPONSORS.iter() {
            assert!(
                sponsor.link_target.starts_with("https://"),
                "Sponsor {} should link somewhere",
                sponsor.id
            );
        }
    }

    #[test]
    fn test_tier_accessor_matches_fields() {
        assert_eq!(SPONSORS.tier(Tier::Gold).len(), SPONSORS.gold.len());
        assert_eq!(SPONSORS.tier(Tier::Silver).len(), SPONSORS.silver.len());
        assert_eq!(SPONSORS.tier(Tier::Bronze).len(), SPONSORS.bronze.len());
    }

    #[test]
    fn test_tier_headings() {
        assert_eq!(Tier::Gold.heading(), "Gold");
        assert_eq!(Tier::Silver.heading(), "Silber");
        assert_eq!(Tier::Bronze.heading(), "Bronze");
    }

    #[test]
    fn test_logo_style_inline_full() {
        // Arrange
        let style = LogoStyle {
            max_width: Some("500px"),
            max_height: Some("500px"),
            height: Some("200px"),
            width: Some("200px"),
        };

        // Act
        let css = style.inline();

        // Assert
        assert_eq!(
            css,
            "max-width:500px;max-height:500px;height:200px;width:200px;"
        );
    }

    #[test]
    fn test_logo_style_inline_partial() {
        let style = LogoStyle {
            width: Some("200px"),
            ..LogoStyle::default()
        };
        assert_eq!(style.inline(), "width:200px;");
    }

    #[test]
    fn test_logo_style_inline_empty() {
        assert_eq!(LogoStyle::default().inline(), "");
    }
}
