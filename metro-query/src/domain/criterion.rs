//! Query optimization criteria.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion {name:?}, expected time, distance, fare or interchanges")]
pub struct InvalidCriterion {
    name: String,
}

/// What a journey query optimizes for.
///
/// # Examples
///
/// ```
/// use metro_query::domain::Criterion;
///
/// let criterion: Criterion = "fare".parse().unwrap();
/// assert_eq!(criterion, Criterion::Fare);
///
/// // Unknown names are rejected
/// assert!("speed".parse::<Criterion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Criterion {
    /// Minimum total travel time, interchange penalties included.
    #[default]
    Time,
    /// Minimum total distance ridden.
    Distance,
    /// Minimum ticket fare.
    Fare,
    /// Fewest line changes.
    Interchanges,
}

impl Criterion {
    /// All criteria, in menu order.
    pub const ALL: [Criterion; 4] = [
        Criterion::Time,
        Criterion::Distance,
        Criterion::Fare,
        Criterion::Interchanges,
    ];

    /// Short lowercase name, also accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::Time => "time",
            Criterion::Distance => "distance",
            Criterion::Fare => "fare",
            Criterion::Interchanges => "interchanges",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Ok(Criterion::Time),
            "distance" => Ok(Criterion::Distance),
            "fare" => Ok(Criterion::Fare),
            "interchange" | "interchanges" => Ok(Criterion::Interchanges),
            _ => Err(InvalidCriterion {
                name: s.to_string(),
            }),
        }
    }
}
