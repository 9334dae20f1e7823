//! Journey search over the network.
//!
//! A queue-driven label-correcting search keeps one best-so-far label per
//! station under the active criterion and re-relaxes whenever a label
//! improves. Labels carry the incoming line and the distance since the
//! last fare boundary, because neither interchanges nor fares are simple
//! sums of per-edge weights.

mod itinerary;
mod label;
mod search;

pub use search::Planner;
