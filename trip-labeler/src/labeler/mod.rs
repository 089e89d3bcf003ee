//! The labeling engine.
//!
//! A [`Labeler`] bundles the network rule tables with the label
//! normalizers and exposes the classification, merge, and whole-feed
//! operations. It is immutable and purely synchronous: one value is built
//! per run and shared by reference. Trips of different routes never
//! interact, so callers that want route-level parallelism can partition
//! the input freely.

mod classify;
mod merge;
mod pass;


pub use classify::Labeler;
pub use pass::LabeledFeed;
