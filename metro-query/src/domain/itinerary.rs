//! Journey query results.

/// One line's stretch of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct RideSegment {
    /// Name of the line ridden for this stretch.
    pub line: String,

    /// Station names in travel order. An interchange station appears both
    /// as the last stop of one segment and the first of the next.
    pub stations: Vec<String>,
}

/// The answer to a journey query.
///
/// An unreachable destination is reported in-band rather than as an error:
/// the scalar totals carry sentinel values and the lists are empty. Check
/// [`Itinerary::is_reachable`] before reading the totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Line-segmented path from origin to destination.
    pub segments: Vec<RideSegment>,

    /// Ride minutes per hop in travel order, interchange penalties
    /// excluded. One entry per adjacent-station hop.
    pub hop_minutes: Vec<u32>,

    /// Total travel time in minutes, interchange penalties included.
    pub minutes: u32,

    /// Ticket fare.
    pub fare: u32,

    /// Total distance ridden in km.
    pub km: f64,

    /// Number of line changes.
    pub interchanges: u32,
}

impl Itinerary {
    /// Result for a query whose origin is its destination.
    pub fn zero() -> Self {
        Self {
            segments: Vec::new(),
            hop_minutes: Vec::new(),
            minutes: 0,
            fare: 0,
            km: 0.0,
            interchanges: 0,
        }
    }

    /// Result for an unreachable destination.
    pub fn unreachable() -> Self {
        Self {
            segments: Vec::new(),
            hop_minutes: Vec::new(),
            minutes: u32::MAX,
            fare: u32::MAX,
            km: f64::INFINITY,
            interchanges: u32::MAX,
        }
    }

    /// True unless this is the unreachable sentinel.
    pub fn is_reachable(&self) -> bool {
        self.minutes != u32::MAX
    }

    /// First station name, if the itinerary has any segments.
    pub fn origin(&self) -> Option<&str> {
        self.segments
            .first()
            .and_then(|segment| segment.stations.first())
            .map(String::as_str)
    }

    /// Last station name, if the itinerary has any segments.
    pub fn destination(&self) -> Option<&str> {
        self.segments
            .last()
            .and_then(|segment| segment.stations.last())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_reachable() {
        let itinerary = Itinerary::zero();
        assert!(itinerary.is_reachable());
        assert_eq!(itinerary.minutes, 0);
        assert_eq!(itinerary.fare, 0);
        assert_eq!(itinerary.km, 0.0);
        assert_eq!(itinerary.interchanges, 0);
        assert!(itinerary.segments.is_empty());
        assert!(itinerary.hop_minutes.is_empty());
    }

    #[test]
    fn unreachable_sentinel() {
        let itinerary = Itinerary::unreachable();
        assert!(!itinerary.is_reachable());
        assert_eq!(itinerary.minutes, u32::MAX);
        assert_eq!(itinerary.fare, u32::MAX);
        assert!(itinerary.km.is_infinite());
        assert_eq!(itinerary.interchanges, u32::MAX);
        assert!(itinerary.segments.is_empty());
        assert!(itinerary.hop_minutes.is_empty());
        assert_eq!(itinerary.origin(), None);
        assert_eq!(itinerary.destination(), None);
    }

    #[test]
    fn origin_and_destination_read_segment_ends() {
        let itinerary = Itinerary {
            segments: vec![
                RideSegment {
                    line: "1".to_string(),
                    stations: vec!["Harbour".to_string(), "Central".to_string()],
                },
                RideSegment {
                    line: "2".to_string(),
                    stations: vec!["Central".to_string(), "Airport".to_string()],
                },
            ],
            hop_minutes: vec![4, 6],
            minutes: 12,
            fare: 2,
            km: 5.0,
            interchanges: 1,
        };

        assert_eq!(itinerary.origin(), Some("Harbour"));
        assert_eq!(itinerary.destination(), Some("Airport"));
    }
}
