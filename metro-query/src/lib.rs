//! Journey queries over a fixed metro network.
//!
//! The network is built once from per-line data files and never changes;
//! [`planner::Planner`] then answers point-to-point queries under one of
//! four criteria (time, distance, fare or interchanges), returning an
//! itinerary grouped into per-line segments. The [`console`] module wraps
//! the planner in the interactive menu flow the binary exposes.

pub mod console;
pub mod domain;
pub mod fare;
pub mod loader;
pub mod network;
pub mod planner;
