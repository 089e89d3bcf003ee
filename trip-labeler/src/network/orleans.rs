//! Rule tables for the Orléans Express intercity coach network.
//!
//! The operator's feed (gtfs.keolis.ca) numbers its corridors 1 through 7
//! and leaves short names and colors blank, so everything display-facing
//! is declared here. Earlier feed snapshots used a different numbering;
//! those generations collapse into this single current table.

use crate::domain::{Color, Direction};
use crate::normalize::SubstitutionRule;

use super::{NetworkRules, NetworkRulesBuilder};

/// The agency-wide default display color (teal used across the brand).
const AGENCY_COLOR: &str = "01ADB9";

/// Build the rule set for the current Orléans Express feed.
///
/// Direction conventions: trips toward Montréal are inbound on the
/// corridors that reach it; on the lower St. Lawrence corridors, trips
/// toward Rimouski (routes 4, 5) or toward Montréal/Québec (route 3) are
/// inbound. The merge table resolves schedule variants that stop short of
/// the terminal (e.g. a Université Laval short-turn on the Québec runs).
pub fn orleans_express() -> NetworkRules {
    let agency_color = Color::parse(AGENCY_COLOR)
        // fixed literal, checked by the construction test below
        .expect("agency color must be six hex digits");

    NetworkRulesBuilder::new(agency_color)
        // Route 1: Montréal - Québec (Express)
        // The feed has spelled the Montréal terminal both with and
        // without the hyphen over the years; both mean the same place.
        .exact("1", "Montréal (Centre Ville)", Direction::Inbound)
        .exact("1", "Montréal (Centre-Ville)", Direction::Inbound)
        .exact("1", "Québec (Centre-Ville)", Direction::Outbound)
        .exact("1", "Québec (Université Laval)", Direction::Outbound)
        .merge("1", "Université Laval", "Québec", "Québec")
        .style("1", "MT QC S", "4E76BA")
        // Route 2: Montréal - Aéroport Montréal-Trudeau
        // Airport headsigns are sentence-like and vary by season, so the
        // airport leg is recognized by token and pinned to a fixed label.
        .exact("2", "Montréal (Centre Ville)", Direction::Inbound)
        .exact("2", "Montréal (Centre-Ville)", Direction::Inbound)
        .contains("2", "Trudeau", Direction::Outbound, "Aéroport Trudeau")
        .style("2", "MT YUL", "4E76BA")
        // Route 3: Québec - Rimouski (Bas-Saint-Laurent)
        .exact("3", "Montréal (Centre Ville)", Direction::Inbound)
        .exact("3", "Montréal (Centre-Ville)", Direction::Inbound)
        .exact("3", "Québec (Centre-Ville)", Direction::Inbound)
        .exact("3", "Rimouski", Direction::Outbound)
        .exact("3", "Rivière-du-Loup", Direction::Outbound)
        .merge("3", "Rivière-Du-Loup", "Rimouski", "Rimouski")
        .merge("3", "Québec", "Montréal", "Montréal")
        .style("3", "QC RK", "BF2026")
        // Route 4: Rimouski - Gaspé, south side of the peninsula
        .exact("4", "Rimouski", Direction::Inbound)
        .exact("4", "Gaspé", Direction::Outbound)
        .style("4", "RK GS S", "69BD45")
        // Route 5: Rimouski - Gaspé, north side of the peninsula
        .exact("5", "Rimouski", Direction::Inbound)
        .exact("5", "Gaspé", Direction::Outbound)
        .style("5", "RK GS N", "69BD45")
        // Route 6: Montréal - Trois-Rivières - Québec (Mauricie)
        .exact("6", "Montréal (Centre Ville)", Direction::Inbound)
        .exact("6", "Montréal (Centre-Ville)", Direction::Inbound)
        .exact("6", "Québec (Centre-Ville)", Direction::Outbound)
        .exact("6", "Trois-Rivières", Direction::Outbound)
        .merge("6", "Trois-Rivières", "Québec", "Québec")
        .style("6", "MT QC N", "F89843")
        // Route 7: Montréal - Victoriaville (Centre-du-Québec)
        .exact("7", "Montréal (Centre Ville)", Direction::Inbound)
        .exact("7", "Montréal (Centre-Ville)", Direction::Inbound)
        .exact("7", "Victoriaville", Direction::Outbound)
        .style("7", "MT VT", AGENCY_COLOR)
        .build()
}

/// The ordered substitution pipeline for headsigns and stop names.
///
/// Order matters: the hyphenation fix must run before the composite
/// rules, whose patterns expect the hyphenated form; the composite rules
/// must run before the trailing-qualifier strip, which only exists for
/// labels the composites did not consume. Accented vowels are matched in
/// either spelling since the feed is inconsistent about them.
pub fn headsign_pipeline() -> Vec<SubstitutionRule> {
    [
        // "Centre Ville" written as two words
        (r"(?i)(^|\W)centre ville(\W|$)", "${1}Centre-Ville${2}"),
        // Composite "place (qualifier)" terminals reduce to one name
        (r"(?i)(^|\W)qu[ée]bec \(centre-ville\)(\W|$)", "${1}Québec${2}"),
        (
            r"(?i)(^|\W)qu[ée]bec \(universit[ée] laval\)(\W|$)",
            "${1}Université Laval${2}",
        ),
        (r"(?i)(^|\W)montr[ée]al \(centre-ville\)(\W|$)", "${1}Montréal${2}"),
        (
            r"(?i)(^|\W)montr[ée]al \(a[ée]roport trudeau\)(\W|$)",
            "${1}Aéroport Trudeau${2}",
        ),
        // A trailing downtown qualifier is redundant on any label that
        // survived the composite rules
        (r"(?i)\s*\(centre-ville\)$", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        SubstitutionRule::new(pattern, replacement)
            // fixed literals, checked by the construction test below
            .expect("built-in substitution pattern must compile")
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;
    use crate::normalize::{Locale, Normalizer};

    fn route_id(s: &str) -> RouteId {
        RouteId::new(s.to_string()).unwrap()
    }

    fn normalizer() -> Normalizer {
        Normalizer::new(Locale::French, headsign_pipeline())
    }

    #[test]
    fn table_construction() {
        let rules = orleans_express();
        assert_eq!(rules.route_count(), 7);
        assert_eq!(rules.agency_color(), Color::parse("01ADB9").unwrap());
    }

    #[test]
    fn every_route_has_a_style() {
        let rules = orleans_express();
        for (id, code, hex) in [
            ("1", "MT QC S", "4E76BA"),
            ("2", "MT YUL", "4E76BA"),
            ("3", "QC RK", "BF2026"),
            ("4", "RK GS S", "69BD45"),
            ("5", "RK GS N", "69BD45"),
            ("6", "MT QC N", "F89843"),
            ("7", "MT VT", "01ADB9"),
        ] {
            let style = rules.style(&route_id(id)).unwrap();
            assert_eq!(style.short_code, code, "route {id}");
            assert_eq!(style.color, Color::parse(hex).unwrap(), "route {id}");
        }
    }

    #[test]
    fn both_montreal_spellings_are_inbound() {
        let rules = orleans_express();
        for id in ["1", "2", "3", "6", "7"] {
            for headsign in ["Montréal (Centre Ville)", "Montréal (Centre-Ville)"] {
                assert_eq!(
                    rules.resolve(&route_id(id), headsign),
                    Some((Direction::Inbound, None)),
                    "route {id}, {headsign:?}"
                );
            }
        }
    }

    #[test]
    fn pipeline_resolves_composites() {
        let n = normalizer();
        assert_eq!(n.normalize("Montréal (Centre Ville)"), "Montréal");
        assert_eq!(n.normalize("Montréal (Centre-Ville)"), "Montréal");
        assert_eq!(n.normalize("Québec (Centre-Ville)"), "Québec");
        assert_eq!(n.normalize("Québec (Université Laval)"), "Université Laval");
        assert_eq!(n.normalize("Montréal (Aéroport Trudeau)"), "Aéroport Trudeau");
    }

    #[test]
    fn pipeline_accepts_unaccented_spellings() {
        let n = normalizer();
        assert_eq!(n.normalize("quebec (centre-ville)"), "Québec");
        assert_eq!(n.normalize("Montreal (Aeroport Trudeau)"), "Aéroport Trudeau");
    }

    #[test]
    fn hyphenation_fix_preserves_surroundings() {
        let n = normalizer();
        assert_eq!(n.normalize("centre ville"), "Centre-Ville");
        assert_eq!(n.normalize("Gare (centre ville) est"), "Gare (Centre-Ville) Est");
    }

    #[test]
    fn trailing_downtown_qualifier_is_stripped() {
        let n = normalizer();
        assert_eq!(
            n.normalize("Gare d'autocars de Montréal (Centre-Ville)"),
            // The composite rule consumes "Montréal (Centre-Ville)" first
            "Gare D'Autocars De Montréal"
        );
        assert_eq!(n.normalize("Terminus Laurier (Centre-Ville)"), "Terminus Laurier");
    }

    #[test]
    fn normalize_is_idempotent_on_feed_labels() {
        let n = normalizer();
        for label in [
            "Montréal (Centre Ville)",
            "Québec (Université Laval)",
            "Québec (Centre-Ville)",
            "Rivière-du-Loup",
            "Trois-Rivières",
            "Gaspé",
            "Montréal (Aéroport Trudeau)",
            "Terminus Laurier (Centre-Ville)",
            "Sainte-Foy",
        ] {
            let once = n.normalize(label);
            assert_eq!(n.normalize(&once), once, "label {label:?}");
        }
    }
}
