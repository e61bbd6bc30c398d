//! Pure tracking-state derivations.
//!
//! Everything in this module is a total, synchronous function of its
//! arguments: no clock reads, no I/O, no caching between render passes.
mod geo;
mod stats;
mod status;
mod time_left;

pub use geo::{format_distance_km, haversine_km};
pub use stats::NetworkStats;
pub use status::{StatusBadge, StatusColor, StatusIcon};
pub use time_left::time_remaining;
