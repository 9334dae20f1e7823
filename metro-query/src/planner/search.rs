//! Label-correcting journey search.
//!
//! Queue-driven relaxation over the network's adjacency lists. Costs are
//! not purely additive: an interchange depends on the line ridden in on,
//! and the fare on the distance since the last isolation boundary, so the
//! label carries that state and a station is re-queued whenever its label
//! improves. All increments are non-negative and replacement is strictly
//! improving, so the loop reaches a fixpoint.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::{Criterion, Itinerary, LineId, StationId};
use crate::fare::FareSchedule;
use crate::network::{Edge, MetroNetwork};

use super::itinerary::build_itinerary;
use super::label::Label;

/// Journey planner over an immutable network.
pub struct Planner<'a> {
    network: &'a MetroNetwork,
    schedule: FareSchedule,
    isolated: Option<LineId>,
}

impl<'a> Planner<'a> {
    /// Creates a planner, resolving the schedule's fare-isolated line
    /// against the network once.
    pub fn new(network: &'a MetroNetwork, schedule: FareSchedule) -> Self {
        let isolated = schedule
            .isolated_line
            .as_deref()
            .and_then(|name| network.line_id(name));
        Self {
            network,
            schedule,
            isolated,
        }
    }

    /// The network this planner searches.
    pub fn network(&self) -> &'a MetroNetwork {
        self.network
    }

    /// The fare schedule in force.
    pub fn schedule(&self) -> &FareSchedule {
        &self.schedule
    }

    /// Finds the best itinerary from `from` to `to` under `criterion`.
    ///
    /// A same-station query returns the zero itinerary; a destination
    /// that cannot be reached (or an out-of-range id) returns the
    /// unreachable sentinel. Neither is an error.
    pub fn query(&self, from: StationId, to: StationId, criterion: Criterion) -> Itinerary {
        let n = self.network.station_count();
        if from.0 >= n || to.0 >= n {
            return Itinerary::unreachable();
        }
        if from == to {
            return Itinerary::zero();
        }

        let labels = self.run(from, criterion);
        build_itinerary(self.network, &self.schedule, &labels, from, to)
    }

    /// Runs the relaxation loop from `from` and returns the label store.
    fn run(&self, from: StationId, criterion: Criterion) -> Vec<Option<Label>> {
        let n = self.network.station_count();
        let mut labels: Vec<Option<Label>> = vec![None; n];
        let mut in_queue = vec![false; n];
        let mut queue = VecDeque::new();

        labels[from.0] = Some(Label::origin());
        queue.push_back(from);
        in_queue[from.0] = true;

        let mut relaxations: usize = 0;
        while let Some(at) = queue.pop_front() {
            in_queue[at.0] = false;
            let Some(here) = labels[at.0] else { continue };

            for edge in self.network.edges_from(at) {
                relaxations += 1;
                let candidate = self.extend(&here, at, edge);
                let better = match &labels[edge.to.0] {
                    Some(best) => candidate.beats(best, criterion, &self.schedule),
                    None => true,
                };
                if better {
                    labels[edge.to.0] = Some(candidate);
                    if !in_queue[edge.to.0] {
                        in_queue[edge.to.0] = true;
                        queue.push_back(edge.to);
                    }
                }
            }
        }

        debug!(from = from.0, %criterion, relaxations, "search settled");
        labels
    }

    /// Extends `here`'s journey across `edge`, applying the interchange
    /// penalty and the fare-isolation boundary rules.
    fn extend(&self, here: &Label, at: StationId, edge: &Edge) -> Label {
        let mut next = Label {
            pred: Some(at),
            line: Some(edge.line),
            minutes: here.minutes + edge.minutes,
            interchanges: here.interchanges,
            settled_fare: here.settled_fare,
            settled_km: here.settled_km,
            open_km: here.open_km,
        };

        if here.line.is_some_and(|line| line != edge.line) {
            next.interchanges += 1;
            next.minutes += self.schedule.interchange_minutes;
        }

        let was_isolated = here.line.is_some() && here.line == self.isolated;
        let now_isolated = Some(edge.line) == self.isolated;
        if was_isolated != now_isolated {
            // Crossing the isolation boundary closes the open segment
            // before this hop's distance accrues.
            next.settled_fare += self.schedule.supplement(next.open_km);
            next.settled_km += next.open_km;
            next.open_km = 0.0;
        }
        if now_isolated {
            next.settled_km += edge.km;
        } else {
            next.open_km += edge.km;
        }

        next
    }
}
