//! Domain types for the metro journey planner.
//!
//! This module contains the vocabulary shared by the network model, the
//! planner and the front end: station and line identities, the query
//! criteria and the itinerary result type.

mod criterion;
mod itinerary;
mod line;
mod station;

pub use criterion::{Criterion, InvalidCriterion};
pub use itinerary::{Itinerary, RideSegment};
pub use line::{Line, LineId, LineRecords};
pub use station::{Station, StationId};
