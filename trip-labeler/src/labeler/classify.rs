//! Direction classification.

use tracing::debug;

use crate::domain::{Direction, DirectionAssignment, LabelError, RouteId, TripRecord};
use crate::network::{self, NetworkRules};
use crate::normalize::{Locale, Normalizer};

/// The direction and headsign labeling engine.
///
/// Classification is a per-route decision table, not a uniform rule: each
/// route declares the raw headsign forms it recognizes and the direction
/// each form implies. A headsign outside every declared form is a fatal
/// error — a wrong direction on a public display is worse than a halted
/// run, so the engine never guesses.
///
/// # Examples
///
/// ```
/// use trip_labeler::domain::{Direction, RouteId};
/// use trip_labeler::labeler::Labeler;
///
/// let labeler = Labeler::orleans_express();
/// let route = RouteId::new("1".to_string()).unwrap();
///
/// let (direction, label) = labeler
///     .resolve_headsign(&route, "Québec (Université Laval)")
///     .unwrap();
/// assert_eq!(direction, Direction::Outbound);
/// assert_eq!(label, "Université Laval");
/// ```
#[derive(Debug, Clone)]
pub struct Labeler {
    rules: NetworkRules,
    headsign_normalizer: Normalizer,
    long_name_normalizer: Normalizer,
}

impl Labeler {
    /// Assemble an engine from rule tables and normalizers.
    pub fn new(
        rules: NetworkRules,
        headsign_normalizer: Normalizer,
        long_name_normalizer: Normalizer,
    ) -> Self {
        Self {
            rules,
            headsign_normalizer,
            long_name_normalizer,
        }
    }

    /// The engine configured for the current Orléans Express feed.
    pub fn orleans_express() -> Self {
        Labeler::new(
            network::orleans_express(),
            Normalizer::new(Locale::French, network::headsign_pipeline()),
            // Long names only need the generic hygiene pass
            Normalizer::new(Locale::English, Vec::new()),
        )
    }

    /// The rule tables this engine runs on.
    pub fn rules(&self) -> &NetworkRules {
        &self.rules
    }

    /// Classify one trip, resolving its direction and normalized label.
    ///
    /// Fails with [`LabelError::UnclassifiableTrip`] when the route has no
    /// rule recognizing the headsign; the error carries the route, trip,
    /// and raw headsign so the rule tables can be brought up to date.
    pub fn classify_trip(&self, trip: &TripRecord) -> Result<DirectionAssignment, LabelError> {
        match self.resolve_headsign(&trip.route_id, &trip.headsign) {
            Some((direction, label)) => Ok(DirectionAssignment {
                trip_id: trip.trip_id.clone(),
                direction,
                label,
            }),
            None => Err(LabelError::UnclassifiableTrip {
                route_id: trip.route_id.clone(),
                trip_id: trip.trip_id.clone(),
                headsign: trip.headsign.clone(),
            }),
        }
    }

    /// Resolve a raw headsign against a route's rules.
    ///
    /// The label is the normalized headsign, except that a rule may pin a
    /// fixed label (airport runs, where the raw text varies too much).
    /// Exact rules win over containment rules.
    pub fn resolve_headsign(
        &self,
        route_id: &RouteId,
        headsign: &str,
    ) -> Option<(Direction, String)> {
        let (direction, pinned) = self.rules.resolve(route_id, headsign)?;

        let label = match pinned {
            Some(pinned) => {
                debug!(
                    route = %route_id,
                    headsign,
                    label = pinned,
                    "rule pins a fixed label"
                );
                pinned.to_string()
            }
            None => self.headsign_normalizer.normalize(headsign),
        };

        Some((direction, label))
    }

    /// Normalize a stop name with the headsign pipeline.
    pub fn clean_stop_name(&self, name: &str) -> String {
        self.headsign_normalizer.normalize(name)
    }

    /// Normalize a route long name.
    pub fn clean_long_name(&self, name: &str) -> String {
        self.long_name_normalizer.normalize(name)
    }
}
