//! Donation domain models.
mod model;
mod snapshot;
mod volunteer;

pub use model::{AssignedVolunteer, Donation, DonationId, DonationStatus, GeoPoint, Location};
pub use snapshot::TrackingSnapshot;
pub use volunteer::{Volunteer, VolunteerId};

#[cfg(test)]
mod tests;
