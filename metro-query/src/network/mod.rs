//! The immutable network model.
//!
//! Built once from per-line records and then shared read-only between
//! queries; nothing here mutates after [`MetroNetwork::build`] returns, so
//! a `&MetroNetwork` can be handed to any number of threads. Stations get
//! contiguous ids in first-encounter order, and every edge carries the
//! line it belongs to so the search never has to re-derive the line of
//! travel.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Line, LineId, LineRecords, Station, StationId};

/// A directed hop between adjacent stations on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Station this hop arrives at.
    pub to: StationId,

    /// Line the hop rides on.
    pub line: LineId,

    /// Ride time in minutes.
    pub minutes: u32,

    /// Distance in km.
    pub km: f64,
}

/// The metro network: stations, lines and adjacency.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    stations: Vec<Station>,
    lines: Vec<Line>,
    adjacency: Vec<Vec<Edge>>,
    ids_by_name: HashMap<String, StationId>,
}

impl MetroNetwork {
    /// Builds a network from raw line records.
    ///
    /// Lines that fail validation are skipped with a warning rather than
    /// failing the whole build: a section length mismatch, a duplicate
    /// line name, a time offset that goes backwards or an unusable
    /// distance each drop just the offending line.
    pub fn build(records: Vec<LineRecords>) -> Self {
        let mut network = MetroNetwork {
            stations: Vec::new(),
            lines: Vec::new(),
            adjacency: Vec::new(),
            ids_by_name: HashMap::new(),
        };

        for mut line in records {
            if let Err(reason) = validate(&line) {
                warn!(line = %line.name, reason, "skipping line");
                continue;
            }
            if network.line_id(&line.name).is_some() {
                warn!(line = %line.name, "skipping line with duplicate name");
                continue;
            }
            realign_legacy_distances(&mut line);
            network.add_line(line);
        }

        debug!(
            stations = network.stations.len(),
            lines = network.lines.len(),
            "network built"
        );
        network
    }

    /// Stations in id order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Lines in load order, each with its route in travel order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    /// Looks up a station id by exact name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.ids_by_name.get(name).copied()
    }

    /// Name of a station, if the id is in range.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(id.0).map(|s| s.name.as_str())
    }

    /// Looks up a line id by exact name.
    pub fn line_id(&self, name: &str) -> Option<LineId> {
        self.lines.iter().position(|l| l.name == name).map(LineId)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Outgoing hops from a station; empty for out-of-range ids.
    pub fn edges_from(&self, id: StationId) -> &[Edge] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The line serving the track between two adjacent stations.
    pub fn line_between(&self, a: StationId, b: StationId) -> Option<LineId> {
        self.edges_from(a).iter().find(|e| e.to == b).map(|e| e.line)
    }

    fn add_line(&mut self, records: LineRecords) {
        let line_id = LineId(self.lines.len());
        let mut route = Vec::with_capacity(records.times.len());
        let mut prev: Option<(StationId, u32)> = None;

        for (idx, (name, offset)) in records.times.iter().enumerate() {
            let id = self.intern_station(name);
            let station = &mut self.stations[id.0];
            if !station.lines.contains(&line_id) {
                station.lines.push(line_id);
            }
            route.push(id);

            if let Some((prev_id, prev_offset)) = prev {
                let minutes = offset - prev_offset;
                let km = records.distances[idx - 1].1;
                self.add_edge(prev_id, id, line_id, minutes, km);
                self.add_edge(id, prev_id, line_id, minutes, km);
            }
            prev = Some((id, *offset));
        }

        self.lines.push(Line {
            name: records.name,
            route,
        });
    }

    fn intern_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.ids_by_name.get(name) {
            return id;
        }
        let id = StationId(self.stations.len());
        self.stations.push(Station::new(name));
        self.adjacency.push(Vec::new());
        self.ids_by_name.insert(name.to_string(), id);
        id
    }

    fn add_edge(&mut self, from: StationId, to: StationId, line: LineId, minutes: u32, km: f64) {
        if from == to {
            return;
        }
        if let Some(existing) = self.adjacency[from.0].iter().find(|e| e.to == to) {
            if existing.line != line {
                warn!(
                    from = %self.stations[from.0].name,
                    to = %self.stations[to.0].name,
                    "adjacent pair served by more than one line, keeping the first"
                );
            }
            return;
        }
        self.adjacency[from.0].push(Edge {
            to,
            line,
            minutes,
            km,
        });
    }
}

fn validate(records: &LineRecords) -> Result<(), &'static str> {
    if records.times.is_empty() {
        return Err("no stations");
    }
    if records.times.len() != records.distances.len() {
        return Err("time and distance sections differ in length");
    }
    for pair in records.times.windows(2) {
        if pair[1].1 < pair[0].1 {
            return Err("time offsets go backwards");
        }
    }
    if records.distances.iter().any(|(_, km)| !(*km >= 0.0) || !km.is_finite()) {
        return Err("negative or non-finite distance");
    }
    Ok(())
}

/// Older data files list the distance section in reverse route order, with
/// each distance recorded against the arrival station. Detect that layout
/// by the first station name and rebuild the section in route order with
/// distance-to-next semantics.
fn realign_legacy_distances(records: &mut LineRecords) {
    let Some((first_time_name, _)) = records.times.first() else {
        return;
    };
    let Some((first_dist_name, _)) = records.distances.first() else {
        return;
    };
    if first_time_name == first_dist_name {
        return;
    }

    let old = std::mem::take(&mut records.distances);
    let n = old.len();
    let mut rebuilt = Vec::with_capacity(n);
    for i in (1..n).rev() {
        rebuilt.push((old[i].0.clone(), old[i - 1].1));
    }
    rebuilt.push((old[0].0.clone(), 0.0));
    records.distances = rebuilt;
}
