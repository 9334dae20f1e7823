//! Line identity and raw per-line records.

use super::StationId;

/// Index of a line in the network's line table, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

/// A line in the built network.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Display name (the data file's stem, e.g. "2" or "APM").
    pub name: String,

    /// Stations in route order.
    pub route: Vec<StationId>,
}

/// One line's data as read from its file, before network construction.
///
/// `times` pairs each station name with its cumulative minutes from the
/// route start; `distances` pairs each station name with the km to the
/// next station. Older files ship the distance section in the legacy
/// reversed layout, which the network build realigns.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecords {
    pub name: String,
    pub times: Vec<(String, u32)>,
    pub distances: Vec<(String, f64)>,
}
