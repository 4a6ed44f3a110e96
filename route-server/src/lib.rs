//! Transit route server.
//!
//! Answers "how do I get from this station to that one?" over a network
//! of lines supplied by the caller, returning a few ranked routes with
//! per-line segments, journey time and fare.

pub mod domain;
pub mod loader;
pub mod palette;
pub mod planner;
pub mod web;
