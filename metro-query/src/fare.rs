//! Fare rules: tiered distance pricing, the interchange penalty and the
//! fare-isolated line.

/// Slack for band comparisons, so a journey of exactly 4.0 km stays in
/// the base band despite accumulated floating-point error.
const EPSILON: f64 = 1e-5;

/// Fare and penalty parameters for a network.
///
/// One ticketed segment costs a base price plus a supplement that grows
/// with distance in widening bands: one unit per started 4 km between 4
/// and 12 km, per started 6 km between 12 and 24 km, and per started 8 km
/// beyond that. A network may designate one line as fare-isolated;
/// distance ridden on it is settled separately and never pushes another
/// segment into a higher band.
#[derive(Debug, Clone, PartialEq)]
pub struct FareSchedule {
    /// Price of any segment up to 4 km.
    pub base_fare: u32,

    /// Minutes added to a journey per line change.
    pub interchange_minutes: u32,

    /// Name of the fare-isolated line, if the network has one.
    pub isolated_line: Option<String>,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: 2,
            interchange_minutes: 2,
            isolated_line: Some("APM".to_string()),
        }
    }
}

impl FareSchedule {
    /// Supplement over the base fare for a segment of `km` kilometres.
    pub fn supplement(&self, km: f64) -> u32 {
        let mut extra = 0.0;
        if km > 4.0 + EPSILON {
            extra += ((km.min(12.0) - 4.0 - EPSILON) / 4.0).ceil();
        }
        if km > 12.0 + EPSILON {
            extra += ((km.min(24.0) - 12.0 - EPSILON) / 6.0).ceil();
        }
        if km > 24.0 + EPSILON {
            extra += ((km - 24.0 - EPSILON) / 8.0).ceil();
        }
        extra as u32
    }

    /// Full fare for one ticketed segment of `km` kilometres.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_query::fare::FareSchedule;
    ///
    /// let schedule = FareSchedule::default();
    /// assert_eq!(schedule.segment_fare(3.0), 2);
    /// assert_eq!(schedule.segment_fare(8.0), 3);
    /// assert_eq!(schedule.segment_fare(25.0), 7);
    /// ```
    pub fn segment_fare(&self, km: f64) -> u32 {
        self.base_fare + self.supplement(km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_band_up_to_four_km() {
        let schedule = FareSchedule::default();
        assert_eq!(schedule.segment_fare(0.0), 2);
        assert_eq!(schedule.segment_fare(1.5), 2);
        assert_eq!(schedule.segment_fare(3.9), 2);
        assert_eq!(schedule.segment_fare(4.0), 2);
    }

    #[test]
    fn four_km_band() {
        let schedule = FareSchedule::default();
        assert_eq!(schedule.segment_fare(4.1), 3);
        assert_eq!(schedule.segment_fare(8.0), 3);
        assert_eq!(schedule.segment_fare(8.1), 4);
        assert_eq!(schedule.segment_fare(12.0), 4);
    }

    #[test]
    fn six_km_band() {
        let schedule = FareSchedule::default();
        assert_eq!(schedule.segment_fare(12.1), 5);
        assert_eq!(schedule.segment_fare(16.0), 5);
        assert_eq!(schedule.segment_fare(18.0), 5);
        assert_eq!(schedule.segment_fare(18.1), 6);
        assert_eq!(schedule.segment_fare(24.0), 6);
    }

    #[test]
    fn eight_km_band() {
        let schedule = FareSchedule::default();
        assert_eq!(schedule.segment_fare(24.1), 7);
        assert_eq!(schedule.segment_fare(32.0), 7);
        assert_eq!(schedule.segment_fare(33.0), 8);
        assert_eq!(schedule.segment_fare(40.0), 8);
        assert_eq!(schedule.segment_fare(40.1), 9);
    }

    #[test]
    fn band_boundaries_price_as_the_cheaper_band() {
        // Exactly 4, 12 and 24 km must not tip into the next band even
        // after summing many float hops.
        let schedule = FareSchedule::default();
        let four = 1.3 + 1.3 + 1.4;
        assert_eq!(schedule.segment_fare(four), 2);
        let twelve = 2.4 * 5.0;
        assert_eq!(schedule.segment_fare(twelve), 4);
    }

    #[test]
    fn supplement_excludes_base() {
        let schedule = FareSchedule::default();
        assert_eq!(schedule.supplement(3.0), 0);
        assert_eq!(schedule.supplement(8.0), 1);
        assert_eq!(
            schedule.segment_fare(8.0),
            schedule.base_fare + schedule.supplement(8.0)
        );
    }

    #[test]
    fn default_designates_the_apm() {
        let schedule = FareSchedule::default();
        assert_eq!(schedule.isolated_line.as_deref(), Some("APM"));
        assert_eq!(schedule.interchange_minutes, 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fare never decreases as segment distance grows
        #[test]
        fn fare_monotonic_in_distance(a in 0.0f64..60.0, b in 0.0f64..60.0) {
            let schedule = FareSchedule::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(schedule.segment_fare(lo) <= schedule.segment_fare(hi));
        }

        /// Every segment costs at least the base fare
        #[test]
        fn fare_at_least_base(km in 0.0f64..100.0) {
            let schedule = FareSchedule::default();
            prop_assert!(schedule.segment_fare(km) >= schedule.base_fare);
        }

        /// Short segments never pay a supplement
        #[test]
        fn short_segments_pay_base_only(km in 0.0f64..=4.0) {
            let schedule = FareSchedule::default();
            prop_assert_eq!(schedule.segment_fare(km), schedule.base_fare);
        }
    }
}
