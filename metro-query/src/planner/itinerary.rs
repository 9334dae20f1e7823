//! Itinerary reconstruction from a settled label store.

use tracing::warn;

use crate::domain::{Itinerary, LineId, RideSegment, StationId};
use crate::fare::FareSchedule;
use crate::network::MetroNetwork;

use super::label::Label;

/// Walks predecessor links destination-to-origin and folds them into
/// line-grouped segments, in travel order.
///
/// Hop minutes are pure ride times: where the stored line changes between
/// two hops, the interchange penalty is taken back out of the label delta.
pub(crate) fn build_itinerary(
    network: &MetroNetwork,
    schedule: &FareSchedule,
    labels: &[Option<Label>],
    from: StationId,
    to: StationId,
) -> Itinerary {
    if from == to {
        return Itinerary::zero();
    }
    let Some(final_label) = labels.get(to.0).copied().flatten() else {
        return Itinerary::unreachable();
    };

    // Safe: every id in a settled label store indexes this network.
    let station_name = |id: StationId| network.station_name(id).unwrap().to_string();
    let line_name = |id: LineId| network.line(id).unwrap().name.clone();

    let mut segments: Vec<RideSegment> = Vec::new();
    let mut hops: Vec<u32> = Vec::new();
    let mut pass = vec![to];
    let mut segment_line: Option<LineId> = None;

    let mut at = to;
    let mut label = final_label;
    let mut steps = 0;
    while at != from {
        steps += 1;
        if steps > labels.len() {
            warn!(from = from.0, to = to.0, "predecessor chain does not reach the origin");
            return Itinerary::unreachable();
        }

        let (Some(pred), Some(line)) = (label.pred, label.line) else {
            return Itinerary::unreachable();
        };
        let Some(pred_label) = labels.get(pred.0).copied().flatten() else {
            return Itinerary::unreachable();
        };

        if let Some(current) = segment_line {
            if current != line {
                // The boundary station closes one segment and opens the
                // next, so it appears in both.
                pass.reverse();
                segments.push(RideSegment {
                    line: line_name(current),
                    stations: pass.iter().map(|&id| station_name(id)).collect(),
                });
                pass = vec![at];
            }
        }
        pass.push(pred);

        let delta = label.minutes.saturating_sub(pred_label.minutes);
        let crossed = pred_label.line.is_some_and(|previous| previous != line);
        hops.push(if crossed {
            delta.saturating_sub(schedule.interchange_minutes)
        } else {
            delta
        });

        segment_line = Some(line);
        at = pred;
        label = pred_label;
    }

    if let Some(current) = segment_line {
        pass.reverse();
        segments.push(RideSegment {
            line: line_name(current),
            stations: pass.iter().map(|&id| station_name(id)).collect(),
        });
    }

    segments.reverse();
    hops.reverse();

    Itinerary {
        segments,
        hop_minutes: hops,
        minutes: final_label.minutes,
        fare: final_label.total_fare(schedule),
        km: final_label.total_km(),
        interchanges: final_label.interchanges,
    }
}
