//! Whole-feed labeling pass.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    ClassifiedTrip, Direction, EnrichedRoute, LabelError, RouteId, RouteRecord, TripRecord,
};

use super::Labeler;

/// The labeled output for one feed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledFeed {
    /// Routes with display metadata resolved, in input order.
    pub routes: Vec<EnrichedRoute>,
    /// Trips with final directions and canonical headsigns, in input order.
    pub trips: Vec<ClassifiedTrip>,
}

impl Labeler {
    /// Label a full feed snapshot.
    ///
    /// Classifies every trip, converges same-direction trips of each route
    /// on one canonical label via the merge table, and resolves display
    /// metadata for every route. Any failure aborts the pass — a snapshot
    /// with one misclassified trip must not be published, so there is no
    /// partial output.
    pub fn label_feed(
        &self,
        routes: &[RouteRecord],
        trips: &[TripRecord],
    ) -> Result<LabeledFeed, LabelError> {
        let known: HashSet<&RouteId> = routes.iter().map(|r| &r.route_id).collect();

        let mut assignments = Vec::with_capacity(trips.len());
        for trip in trips {
            if !known.contains(&trip.route_id) {
                return Err(LabelError::UnknownRoute {
                    trip_id: trip.trip_id.clone(),
                    route_id: trip.route_id.clone(),
                });
            }

            let assignment = self.classify_trip(trip)?;
            if let Some(flagged) = trip.feed_direction {
                if flagged != assignment.direction {
                    debug!(
                        trip = %trip.trip_id,
                        resolved = %assignment.direction,
                        feed = %flagged,
                        "feed direction flag disagrees with resolved direction"
                    );
                }
            }
            assignments.push(assignment);
        }

        // Converge each (route, direction) on a single label. The merge
        // table is symmetric with a fixed winner per pair, so the result
        // does not depend on trip order.
        let mut canonical: HashMap<(&RouteId, Direction), String> = HashMap::new();
        for (trip, assignment) in trips.iter().zip(&assignments) {
            let key = (&trip.route_id, assignment.direction);
            match canonical.get(&key) {
                None => {
                    canonical.insert(key, assignment.label.clone());
                }
                Some(current) if current != &assignment.label => {
                    let winner = self.merge(&trip.route_id, current, &assignment.label)?;
                    canonical.insert(key, winner);
                }
                Some(_) => {}
            }
        }

        let classified = trips
            .iter()
            .zip(assignments)
            .map(|(trip, assignment)| ClassifiedTrip {
                trip_id: assignment.trip_id,
                route_id: trip.route_id.clone(),
                direction: assignment.direction,
                // every (route, direction) key was inserted above
                canonical_headsign: canonical[&(&trip.route_id, assignment.direction)].clone(),
            })
            .collect();

        let enriched = routes.iter().map(|route| self.enrich_route(route)).collect();

        Ok(LabeledFeed {
            routes: enriched,
            trips: classified,
        })
    }

    /// Resolve display metadata for one route.
    ///
    /// Feed-provided values always stand; the style table only fills
    /// absent fields, and the agency-wide default color backs routes the
    /// table does not know.
    pub fn enrich_route(&self, route: &RouteRecord) -> EnrichedRoute {
        let style = self.rules().style(&route.route_id);

        let short_name = route
            .short_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| style.map(|s| s.short_code.clone()));

        let color = route
            .color
            .or_else(|| style.map(|s| s.color))
            .unwrap_or_else(|| self.rules().agency_color());

        let long_name = route
            .long_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| self.clean_long_name(name));

        EnrichedRoute {
            route_id: route.route_id.clone(),
            short_name,
            long_name,
            color,
        }
    }
}
