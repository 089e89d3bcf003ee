//! Per-route rule tables.
//!
//! Everything agency-specific lives here as declarative data: which raw
//! headsigns mean inbound or outbound on each route, which label wins when
//! same-direction trips disagree, and what display code and color each
//! route gets. Keeping the policy in tables means a feed change is a data
//! edit, not a logic edit.
//!
//! A [`NetworkRules`] value is immutable once built and is passed
//! explicitly to the engine; there is no process-wide rule state.

mod orleans;

use std::collections::HashMap;

use crate::domain::{Color, Direction, RouteId};

pub use orleans::{headsign_pipeline, orleans_express};

/// How a direction rule recognizes a raw headsign.
#[derive(Debug, Clone)]
pub enum HeadsignMatcher {
    /// Case-insensitive equality with a known terminal headsign. A route
    /// may carry several variants that mean the same terminal.
    Exact(String),
    /// Case-insensitive substring containment of a disambiguating token,
    /// for routes whose headsigns embed the terminal in longer text.
    Contains(String),
}

impl HeadsignMatcher {
    /// Test a raw headsign against this matcher.
    pub fn matches(&self, headsign: &str) -> bool {
        let headsign = headsign.to_lowercase();
        match self {
            HeadsignMatcher::Exact(variant) => headsign == variant.to_lowercase(),
            HeadsignMatcher::Contains(token) => headsign.contains(&token.to_lowercase()),
        }
    }

    fn is_exact(&self) -> bool {
        matches!(self, HeadsignMatcher::Exact(_))
    }
}

/// One recognized headsign form of a route and the direction it implies.
#[derive(Debug, Clone)]
pub struct DirectionRule {
    /// How the raw headsign is recognized.
    pub matcher: HeadsignMatcher,
    /// The direction this form implies.
    pub direction: Direction,
    /// Fixed label replacing the normalized headsign when set. Used where
    /// the raw text around the matched token varies too much to clean.
    pub label: Option<String>,
}

/// Display metadata for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStyle {
    /// Short display code shown in route badges.
    pub short_code: String,
    /// Route display color.
    pub color: Color,
}

/// The full rule set for one operator's network.
///
/// Built once per run with [`NetworkRulesBuilder`]; see
/// [`orleans_express`] for the shipped configuration.
#[derive(Debug, Clone)]
pub struct NetworkRules {
    direction_rules: HashMap<RouteId, Vec<DirectionRule>>,
    // Pairs are stored in both orders so lookup is O(1) either way round.
    merge_winners: HashMap<(RouteId, String, String), String>,
    styles: HashMap<RouteId, RouteStyle>,
    agency_color: Color,
}

impl NetworkRules {
    /// Resolve a raw headsign against a route's rules.
    ///
    /// Exact rules are tried first; containment rules apply only when no
    /// exact rule matched. Returns the implied direction and, if the rule
    /// carries one, its fixed label. `None` means no rule recognizes the
    /// headsign — the caller treats that as fatal.
    pub fn resolve(&self, route_id: &RouteId, headsign: &str) -> Option<(Direction, Option<&str>)> {
        let rules = self.direction_rules.get(route_id)?;

        let exact = rules.iter().filter(|r| r.matcher.is_exact());
        let containment = rules.iter().filter(|r| !r.matcher.is_exact());

        exact
            .chain(containment)
            .find(|rule| rule.matcher.matches(headsign))
            .map(|rule| (rule.direction, rule.label.as_deref()))
    }

    /// Returns true if the route has at least one direction rule.
    pub fn has_route(&self, route_id: &RouteId) -> bool {
        self.direction_rules.contains_key(route_id)
    }

    /// Look up the winning label for a conflicting pair, in either order.
    pub fn merge_winner(&self, route_id: &RouteId, label_a: &str, label_b: &str) -> Option<&str> {
        self.merge_winners
            .get(&(route_id.clone(), label_a.to_string(), label_b.to_string()))
            .map(String::as_str)
    }

    /// Display metadata override for a route, if the table has one.
    pub fn style(&self, route_id: &RouteId) -> Option<&RouteStyle> {
        self.styles.get(route_id)
    }

    /// The agency-wide default display color.
    pub fn agency_color(&self) -> Color {
        self.agency_color
    }

    /// Number of routes with direction rules.
    pub fn route_count(&self) -> usize {
        self.direction_rules.len()
    }
}

/// Builder for [`NetworkRules`].
///
/// Entries with an invalid route identifier are ignored rather than
/// failing the build; the shipped tables are fixed data covered by tests.
#[derive(Debug)]
pub struct NetworkRulesBuilder {
    rules: NetworkRules,
}

impl NetworkRulesBuilder {
    /// Start a rule set with the agency-wide default color.
    pub fn new(agency_color: Color) -> Self {
        Self {
            rules: NetworkRules {
                direction_rules: HashMap::new(),
                merge_winners: HashMap::new(),
                styles: HashMap::new(),
                agency_color,
            },
        }
    }

    /// Add an exact-match direction rule.
    pub fn exact(self, route_id: &str, variant: &str, direction: Direction) -> Self {
        self.rule(route_id, DirectionRule {
            matcher: HeadsignMatcher::Exact(variant.to_string()),
            direction,
            label: None,
        })
    }

    /// Add a containment direction rule with a fixed label.
    pub fn contains(self, route_id: &str, token: &str, direction: Direction, label: &str) -> Self {
        self.rule(route_id, DirectionRule {
            matcher: HeadsignMatcher::Contains(token.to_string()),
            direction,
            label: Some(label.to_string()),
        })
    }

    /// Declare the winning label for an unordered pair of variants.
    pub fn merge(mut self, route_id: &str, label_a: &str, label_b: &str, winner: &str) -> Self {
        if let Ok(route_id) = RouteId::new(route_id.to_string()) {
            self.rules.merge_winners.insert(
                (route_id.clone(), label_a.to_string(), label_b.to_string()),
                winner.to_string(),
            );
            self.rules.merge_winners.insert(
                (route_id, label_b.to_string(), label_a.to_string()),
                winner.to_string(),
            );
        }
        self
    }

    /// Set a route's display code and color.
    pub fn style(mut self, route_id: &str, short_code: &str, color_hex: &str) -> Self {
        if let (Ok(route_id), Ok(color)) =
            (RouteId::new(route_id.to_string()), Color::parse(color_hex))
        {
            self.rules.styles.insert(route_id, RouteStyle {
                short_code: short_code.to_string(),
                color,
            });
        }
        self
    }

    /// Build the rule set.
    pub fn build(self) -> NetworkRules {
        self.rules
    }

    fn rule(mut self, route_id: &str, rule: DirectionRule) -> Self {
        if let Ok(route_id) = RouteId::new(route_id.to_string()) {
            self.rules
                .direction_rules
                .entry(route_id)
                .or_default()
                .push(rule);
        }
        self
    }
}
