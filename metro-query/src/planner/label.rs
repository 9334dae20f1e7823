//! Per-query search state.

use crate::domain::{Criterion, LineId, StationId};
use crate::fare::FareSchedule;

/// The best journey found so far to one station, under one criterion.
///
/// Fare state is split in two: `settled_fare` and `settled_km` cover
/// closed ticket segments (everything up to the last fare-isolation
/// boundary, plus all distance ridden on the isolated line), while
/// `open_km` is the distance of the segment still being ridden. The fare
/// of the whole journey prices the open segment on top of what is
/// settled, so exactly one base fare is charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Label {
    /// Station this journey arrived from; `None` at the origin.
    pub pred: Option<StationId>,

    /// Line this journey arrived on; `None` at the origin.
    pub line: Option<LineId>,

    /// Elapsed minutes, interchange penalties included.
    pub minutes: u32,

    /// Line changes so far.
    pub interchanges: u32,

    /// Supplements of all closed segments.
    pub settled_fare: u32,

    /// Distance of all closed segments, km.
    pub settled_km: f64,

    /// Distance of the open segment, km.
    pub open_km: f64,
}

impl Label {
    /// Label for the origin station.
    pub fn origin() -> Self {
        Self {
            pred: None,
            line: None,
            minutes: 0,
            interchanges: 0,
            settled_fare: 0,
            settled_km: 0.0,
            open_km: 0.0,
        }
    }

    /// Total distance ridden, km.
    pub fn total_km(&self) -> f64 {
        self.settled_km + self.open_km
    }

    /// Fare if the journey ended here.
    pub fn total_fare(&self, schedule: &FareSchedule) -> u32 {
        self.settled_fare + schedule.segment_fare(self.open_km)
    }

    /// Strictly better than `other` under `criterion`. Ties lose, so the
    /// first label discovered at a given cost is kept.
    pub fn beats(&self, other: &Label, criterion: Criterion, schedule: &FareSchedule) -> bool {
        match criterion {
            Criterion::Time => self.minutes < other.minutes,
            Criterion::Distance => self.total_km() < other.total_km(),
            Criterion::Fare => self.total_fare(schedule) < other.total_fare(schedule),
            Criterion::Interchanges => self.interchanges < other.interchanges,
        }
    }
}
