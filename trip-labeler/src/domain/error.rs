//! Engine error types.
//!
//! Every variant here is fatal for the run: an unmatched headsign or label
//! pair means the rule tables are out of date with the feed, which is a
//! data fix, not something to retry. The engine returns these as values
//! and never terminates the process itself.

use super::{RouteId, TripId};

/// Fatal labeling failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// A trip's raw headsign matches none of its route's direction rules.
    #[error("trip {trip_id} on route {route_id}: headsign {headsign:?} matches no direction rule")]
    UnclassifiableTrip {
        route_id: RouteId,
        trip_id: TripId,
        headsign: String,
    },

    /// Two same-direction trips of a route disagree on their label and no
    /// precedence rule resolves the pair.
    #[error("route {route_id}: no merge rule resolves headsigns {label_a:?} and {label_b:?}")]
    UnmergeableHeadsigns {
        route_id: RouteId,
        label_a: String,
        label_b: String,
    },

    /// A trip references a route that is not in the feed snapshot.
    #[error("trip {trip_id} references unknown route {route_id}")]
    UnknownRoute { trip_id: TripId, route_id: RouteId },
}
