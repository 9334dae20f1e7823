//! Station identity.

use super::LineId;

/// Index of a station in the network's station table.
///
/// Ids are assigned in first-encounter order while the network is built
/// (lines in load order, each line's stations in route order), so they are
/// contiguous, 0-based and a pure function of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// A station in the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Display name, as spelled in the line data.
    pub name: String,

    /// Lines calling at this station, in load order.
    pub lines: Vec<LineId>,
}

impl Station {
    /// Creates a station with no line memberships yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// True if more than one line calls here.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }
}
