//! Interactive console front end.
//!
//! A small menu loop: list the lines, pick departure and arrival by line
//! then station, pick a criterion, read the result. All input and output
//! go through `BufRead`/`Write` handles so the whole flow is scriptable
//! in tests, and rendering is a pure function over an itinerary.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::domain::{Criterion, Itinerary, StationId};
use crate::planner::Planner;

pub mod dto;

const RULE: &str = "==================================================";
const THIN: &str = "--------------------------------------------------";

/// Runs the menu loop until the user quits or input runs out.
pub fn run(
    planner: &Planner<'_>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "  Metro journey planner      {}",
            Local::now().format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "  1. Lines and stations")?;
        writeln!(out, "  2. Plan a journey")?;
        writeln!(out, "  3. Quit")?;
        writeln!(out, "{THIN}")?;

        let Some(choice) = prompt_index(input, out, "  Your choice: ", 3)? else {
            return Ok(());
        };
        match choice {
            1 => list_lines(planner, out)?,
            2 => plan_journey(planner, input, out)?,
            _ => return Ok(()),
        }
    }
}

/// Prompts until a number in `1..=max` arrives; `None` means end of input.
fn prompt_index(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    max: usize,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
            _ => writeln!(out, "  Invalid input!")?,
        }
    }
}

fn list_lines(planner: &Planner<'_>, out: &mut impl Write) -> io::Result<()> {
    let network = planner.network();
    for line in network.lines() {
        writeln!(out, "\n  Line {}", line.name)?;
        let names = line
            .route
            .iter()
            .filter_map(|&id| network.station_name(id));
        for (i, name) in names.enumerate() {
            writeln!(out, "    {}. {}", i + 1, name)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Line-then-station picker; `None` means end of input.
fn pick_station(
    planner: &Planner<'_>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    role: &str,
) -> io::Result<Option<StationId>> {
    let network = planner.network();
    let lines = network.lines();

    writeln!(out, "\n  Select the {role} station")?;
    writeln!(out, "{THIN}")?;
    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "  {}. Line {}", i + 1, line.name)?;
    }
    let Some(choice) = prompt_index(input, out, "  Choose a line: ", lines.len())? else {
        return Ok(None);
    };
    let line = &lines[choice - 1];

    writeln!(out, "\n  Line {}", line.name)?;
    let names = line
        .route
        .iter()
        .filter_map(|&id| network.station_name(id));
    for (i, name) in names.enumerate() {
        writeln!(out, "  {}. {}", i + 1, name)?;
    }
    let Some(choice) = prompt_index(input, out, "  Choose a station: ", line.route.len())? else {
        return Ok(None);
    };
    Ok(Some(line.route[choice - 1]))
}

fn plan_journey(
    planner: &Planner<'_>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(from) = pick_station(planner, input, out, "departure")? else {
        return Ok(());
    };
    let Some(to) = pick_station(planner, input, out, "arrival")? else {
        return Ok(());
    };

    writeln!(out)?;
    for (i, criterion) in Criterion::ALL.iter().enumerate() {
        writeln!(out, "  {}. Minimum {criterion}", i + 1)?;
    }
    let Some(choice) = prompt_index(input, out, "  Your choice: ", Criterion::ALL.len())? else {
        return Ok(());
    };
    let criterion = Criterion::ALL[choice - 1];

    let network = planner.network();
    let itinerary = planner.query(from, to, criterion);
    let from_name = network.station_name(from).unwrap_or("?");
    let to_name = network.station_name(to).unwrap_or("?");
    write!(out, "{}", render_itinerary(&itinerary, criterion, from_name, to_name))?;
    Ok(())
}

/// Renders a query result; pure, so tests can assert on the exact text.
pub fn render_itinerary(
    itinerary: &Itinerary,
    criterion: Criterion,
    from: &str,
    to: &str,
) -> String {
    let mut text = String::new();
    text.push('\n');
    text.push_str(&format!("  Departure: {from}\n"));
    text.push_str(&format!("  Arrival:   {to}\n"));
    text.push_str(THIN);
    text.push('\n');

    if !itinerary.is_reachable() {
        text.push_str(&format!("  No route found between {from} and {to}.\n"));
        return text;
    }

    let marker = |candidate: Criterion| if candidate == criterion { "  [Min]" } else { "" };
    text.push_str(&format!(
        "  Estimated duration : {:>6} min{}\n",
        itinerary.minutes,
        marker(Criterion::Time)
    ));
    text.push_str(&format!(
        "  Travel distance    : {:>6.2} km{}\n",
        itinerary.km,
        marker(Criterion::Distance)
    ));
    text.push_str(&format!(
        "  Ticket fare        : {:>6}{}\n",
        itinerary.fare,
        marker(Criterion::Fare)
    ));
    text.push_str(&format!(
        "  Interchanges       : {:>6}{}\n",
        itinerary.interchanges,
        marker(Criterion::Interchanges)
    ));
    text.push_str(THIN);
    text.push('\n');

    if itinerary.segments.is_empty() {
        text.push_str(&format!("  Origin and destination are both {from}.\n"));
        return text;
    }

    let mut hops = itinerary.hop_minutes.iter();
    for (i, segment) in itinerary.segments.iter().enumerate() {
        if i == 0 {
            text.push_str(&format!("  Depart from {from}, line {}\n", segment.line));
        } else {
            text.push_str(&format!("  Interchange to line {}\n", segment.line));
        }
        for (j, station) in segment.stations.iter().enumerate() {
            if j == 0 {
                text.push_str(&format!("    {station}\n"));
            } else {
                match hops.next() {
                    Some(minutes) => text.push_str(&format!("    {station}  +{minutes} min\n")),
                    None => text.push_str(&format!("    {station}\n")),
                }
            }
        }
    }
    text.push_str(&format!("  Arrived at {to}\n"));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineRecords, RideSegment};
    use crate::fare::FareSchedule;
    use crate::network::MetroNetwork;

    fn records(name: &str, times: &[(&str, u32)], distances: &[(&str, f64)]) -> LineRecords {
        LineRecords {
            name: name.to_string(),
            times: times.iter().map(|(n, t)| ((*n).to_string(), *t)).collect(),
            distances: distances
                .iter()
                .map(|(n, d)| ((*n).to_string(), *d))
                .collect(),
        }
    }

    fn two_crossing_lines() -> MetroNetwork {
        MetroNetwork::build(vec![
            records(
                "A",
                &[("X", 0), ("Y", 5), ("Z", 9)],
                &[("X", 3.0), ("Y", 4.0), ("Z", 0.0)],
            ),
            records("B", &[("Y", 0), ("W", 6)], &[("Y", 5.0), ("W", 0.0)]),
        ])
    }

    fn sample_itinerary() -> Itinerary {
        Itinerary {
            segments: vec![
                RideSegment {
                    line: "A".to_string(),
                    stations: vec!["X".to_string(), "Y".to_string()],
                },
                RideSegment {
                    line: "B".to_string(),
                    stations: vec!["Y".to_string(), "W".to_string()],
                },
            ],
            hop_minutes: vec![5, 6],
            minutes: 13,
            fare: 3,
            km: 8.0,
            interchanges: 1,
        }
    }

    #[test]
    fn render_marks_only_the_queried_total() {
        let text = render_itinerary(&sample_itinerary(), Criterion::Time, "X", "W");

        assert!(text.contains("    13 min  [Min]"));
        assert_eq!(text.matches("[Min]").count(), 1);

        let by_fare = render_itinerary(&sample_itinerary(), Criterion::Fare, "X", "W");
        assert!(by_fare.contains("Ticket fare        :      3  [Min]"));
    }

    #[test]
    fn render_walks_segments_with_ride_minutes() {
        let text = render_itinerary(&sample_itinerary(), Criterion::Time, "X", "W");

        assert!(text.contains("  Depart from X, line A\n"));
        assert!(text.contains("  Interchange to line B\n"));
        assert!(text.contains("    Y  +5 min\n"));
        assert!(text.contains("    W  +6 min\n"));
        assert!(text.contains("  Arrived at W\n"));
        // The boundary station reappears without a hop of its own.
        assert_eq!(text.matches("    Y\n").count(), 1);
    }

    #[test]
    fn render_reports_missing_routes() {
        let text = render_itinerary(&Itinerary::unreachable(), Criterion::Time, "X", "Q");
        assert!(text.contains("No route found between X and Q."));
        assert!(!text.contains("[Min]"));
    }

    #[test]
    fn render_handles_the_zero_itinerary() {
        let text = render_itinerary(&Itinerary::zero(), Criterion::Time, "X", "X");
        assert!(text.contains("Origin and destination are both X."));
    }

    #[test]
    fn scripted_session_plans_a_journey() {
        let network = two_crossing_lines();
        let planner = Planner::new(&network, FareSchedule::default());

        // Plan a journey: depart line A station X, arrive line B station W,
        // by minimum time; then quit.
        let script = "2\n1\n1\n2\n2\n1\n3\n";
        let mut input = io::Cursor::new(script);
        let mut out = Vec::new();

        run(&planner, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Select the departure station"));
        assert!(text.contains("Select the arrival station"));
        assert!(text.contains("    13 min  [Min]"));
        assert!(text.contains("Depart from X, line A"));
        assert!(text.contains("Interchange to line B"));
    }

    #[test]
    fn listing_shows_routes_in_travel_order() {
        let network = two_crossing_lines();
        let planner = Planner::new(&network, FareSchedule::default());

        let mut input = io::Cursor::new("1\n3\n");
        let mut out = Vec::new();
        run(&planner, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let a = text.find("Line A").unwrap();
        let x = text.find("1. X").unwrap();
        let y = text.find("2. Y").unwrap();
        let z = text.find("3. Z").unwrap();
        assert!(a < x && x < y && y < z);
    }

    #[test]
    fn invalid_menu_input_reprompts() {
        let network = two_crossing_lines();
        let planner = Planner::new(&network, FareSchedule::default());

        let mut input = io::Cursor::new("9\nabc\n3\n");
        let mut out = Vec::new();
        run(&planner, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Invalid input!").count(), 2);
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let network = two_crossing_lines();
        let planner = Planner::new(&network, FareSchedule::default());

        let mut input = io::Cursor::new("");
        let mut out = Vec::new();
        assert!(run(&planner, &mut input, &mut out).is_ok());

        // Also mid-flow, while picking a station.
        let mut input = io::Cursor::new("2\n1\n");
        let mut out = Vec::new();
        assert!(run(&planner, &mut input, &mut out).is_ok());
    }
}
