//! Headsign merging.
//!
//! Two same-direction trips of a route can resolve to different labels
//! when a schedule variant stops short of the terminal. The merge table
//! declares, per route, which label of a known pair wins — generally the
//! terminal over the intermediate waypoint. The engine never guesses a
//! winner for an undeclared pair: route structures are irregular enough
//! that a "most specific" heuristic would mislabel some corridor.

use tracing::debug;

use crate::domain::{LabelError, RouteId};

use super::Labeler;

impl Labeler {
    /// Resolve two same-direction labels of a route to one.
    ///
    /// Equal labels pass through unchanged. A differing pair must appear
    /// in the route's merge table, else the run fails with
    /// [`LabelError::UnmergeableHeadsigns`].
    pub fn merge(
        &self,
        route_id: &RouteId,
        label_a: &str,
        label_b: &str,
    ) -> Result<String, LabelError> {
        if label_a == label_b {
            return Ok(label_a.to_string());
        }

        match self.rules().merge_winner(route_id, label_a, label_b) {
            Some(winner) => {
                debug!(
                    route = %route_id,
                    label_a,
                    label_b,
                    winner,
                    "merged conflicting headsigns"
                );
                Ok(winner.to_string())
            }
            None => Err(LabelError::UnmergeableHeadsigns {
                route_id: route_id.clone(),
                label_a: label_a.to_string(),
                label_b: label_b.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_id(s: &str) -> RouteId {
        RouteId::new(s.to_string()).unwrap()
    }

    #[test]
    fn terminal_wins_over_waypoint() {
        let labeler = Labeler::orleans_express();

        assert_eq!(
            labeler.merge(&route_id("1"), "Université Laval", "Québec").unwrap(),
            "Québec"
        );
        assert_eq!(
            labeler.merge(&route_id("3"), "Rivière-Du-Loup", "Rimouski").unwrap(),
            "Rimouski"
        );
        assert_eq!(
            labeler.merge(&route_id("6"), "Trois-Rivières", "Québec").unwrap(),
            "Québec"
        );
    }

    #[test]
    fn merge_is_order_insensitive() {
        let labeler = Labeler::orleans_express();

        assert_eq!(
            labeler.merge(&route_id("1"), "Québec", "Université Laval").unwrap(),
            "Québec"
        );
    }

    #[test]
    fn equal_labels_pass_through() {
        let labeler = Labeler::orleans_express();

        assert_eq!(labeler.merge(&route_id("4"), "Gaspé", "Gaspé").unwrap(), "Gaspé");
    }

    #[test]
    fn undeclared_pair_is_fatal() {
        let labeler = Labeler::orleans_express();

        let err = labeler.merge(&route_id("4"), "Gaspé", "Rimouski").unwrap_err();
        assert_eq!(err, LabelError::UnmergeableHeadsigns {
            route_id: route_id("4"),
            label_a: "Gaspé".to_string(),
            label_b: "Rimouski".to_string(),
        });

        // Pairs declared for one route do not leak onto another
        assert!(labeler.merge(&route_id("4"), "Université Laval", "Québec").is_err());
    }
}
