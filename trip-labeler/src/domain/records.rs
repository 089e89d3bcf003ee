//! Feed record types.
//!
//! Inputs ([`RouteRecord`], [`TripRecord`]) arrive from the upstream feed
//! parser and are read-only to the engine. Outputs ([`EnrichedRoute`],
//! [`ClassifiedTrip`]) are what the downstream serializer consumes.

use serde::{Deserialize, Serialize};

use super::{Color, Direction, RouteId, TripId};

/// A route as parsed from the feed.
///
/// All display fields are optional: the feed for this network leaves short
/// names and colors blank on most routes and the engine fills them in from
/// its style table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Feed route identifier, unique within a feed snapshot.
    pub route_id: RouteId,
    /// Feed-provided short display name, if any.
    pub short_name: Option<String>,
    /// Feed-provided long name, if any (e.g. "Montréal - Québec ( Express )").
    pub long_name: Option<String>,
    /// Feed-provided display color, if any.
    pub color: Option<Color>,
}

impl RouteRecord {
    /// Creates a route record with no feed-provided display fields.
    pub fn new(route_id: RouteId) -> Self {
        Self {
            route_id,
            short_name: None,
            long_name: None,
            color: None,
        }
    }
}

/// A trip as parsed from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Feed trip identifier.
    pub trip_id: TripId,
    /// Identifier of the owning route. Must exist in the route snapshot.
    pub route_id: RouteId,
    /// Raw destination text as displayed on the vehicle.
    pub headsign: String,
    /// Feed-provided direction flag, if any. The engine classifies from
    /// the headsign and never trusts this flag; it is only compared
    /// against the resolved direction for diagnostics.
    pub feed_direction: Option<Direction>,
}

impl TripRecord {
    /// Creates a trip record with no feed-provided direction flag.
    pub fn new(trip_id: TripId, route_id: RouteId, headsign: String) -> Self {
        Self {
            trip_id,
            route_id,
            headsign,
            feed_direction: None,
        }
    }
}

/// A direction and label resolved for a single trip.
///
/// Produced by the classifier; the label may later be replaced by the
/// merger when same-direction trips of a route disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionAssignment {
    /// The classified trip.
    pub trip_id: TripId,
    /// Resolved travel direction.
    pub direction: Direction,
    /// Normalized destination label.
    pub label: String,
}

/// A route with display metadata resolved.
///
/// Feed-provided values are never overwritten; the style table only fills
/// gaps, and the agency-wide default color backs everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRoute {
    /// Feed route identifier.
    pub route_id: RouteId,
    /// Short display code; absent when neither feed nor style table has one.
    pub short_name: Option<String>,
    /// Normalized long name, if the feed supplied one.
    pub long_name: Option<String>,
    /// Resolved display color.
    pub color: Color,
}

/// A trip with its final direction and canonical headsign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedTrip {
    /// Feed trip identifier.
    pub trip_id: TripId,
    /// Identifier of the owning route.
    pub route_id: RouteId,
    /// Resolved travel direction.
    pub direction: Direction,
    /// Canonical destination label shared by all same-direction trips of
    /// the route.
    pub canonical_headsign: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_id(s: &str) -> RouteId {
        RouteId::new(s.to_string()).unwrap()
    }

    fn trip_id(s: &str) -> TripId {
        TripId::new(s.to_string()).unwrap()
    }

    #[test]
    fn route_record_new_has_no_display_fields() {
        let route = RouteRecord::new(route_id("1"));
        assert!(route.short_name.is_none());
        assert!(route.long_name.is_none());
        assert!(route.color.is_none());
    }

    #[test]
    fn trip_record_new_has_no_feed_direction() {
        let trip = TripRecord::new(trip_id("t1"), route_id("1"), "Québec".to_string());
        assert!(trip.feed_direction.is_none());
        assert_eq!(trip.headsign, "Québec");
    }

    #[test]
    fn classified_trip_serializes_direction_as_integer() {
        let trip = ClassifiedTrip {
            trip_id: trip_id("t1"),
            route_id: route_id("1"),
            direction: Direction::Outbound,
            canonical_headsign: "Québec".to_string(),
        };

        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["direction"], 1);
        assert_eq!(json["canonical_headsign"], "Québec");
    }

    #[test]
    fn enriched_route_roundtrips_through_json() {
        let route = EnrichedRoute {
            route_id: route_id("3"),
            short_name: Some("QC RK".to_string()),
            long_name: Some("Québec - Rimouski".to_string()),
            color: Color::parse("BF2026").unwrap(),
        };

        let json = serde_json::to_string(&route).unwrap();
        let back: EnrichedRoute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);
    }
}
