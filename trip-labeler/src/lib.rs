//! Direction and headsign labeling for an intercity coach network.
//!
//! Takes route and trip records parsed from the operator's transit feed
//! and derives, for each trip, a travel direction (inbound/outbound) and a
//! normalized destination label, plus per-route display metadata.

pub mod domain;
pub mod labeler;
pub mod network;
pub mod normalize;
