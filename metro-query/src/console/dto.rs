//! Serializable views of query results.
//!
//! JSON has no infinity, so the unreachable sentinel becomes `null`
//! totals behind an explicit `reachable` flag.

use serde::Serialize;

use crate::domain::{Itinerary, RideSegment};

/// JSON view of an itinerary.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryDto {
    pub reachable: bool,
    pub minutes: Option<u32>,
    pub fare: Option<u32>,
    pub distance_km: Option<f64>,
    pub interchanges: Option<u32>,
    pub hop_minutes: Vec<u32>,
    pub segments: Vec<SegmentDto>,
}

/// JSON view of one line's stretch of the journey.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentDto {
    pub line: String,
    pub stations: Vec<String>,
}

impl From<&RideSegment> for SegmentDto {
    fn from(segment: &RideSegment) -> Self {
        Self {
            line: segment.line.clone(),
            stations: segment.stations.clone(),
        }
    }
}

impl From<&Itinerary> for ItineraryDto {
    fn from(itinerary: &Itinerary) -> Self {
        let reachable = itinerary.is_reachable();
        Self {
            reachable,
            minutes: reachable.then_some(itinerary.minutes),
            fare: reachable.then_some(itinerary.fare),
            distance_km: reachable.then_some(itinerary.km),
            interchanges: reachable.then_some(itinerary.interchanges),
            hop_minutes: itinerary.hop_minutes.clone(),
            segments: itinerary.segments.iter().map(SegmentDto::from).collect(),
        }
    }
}
