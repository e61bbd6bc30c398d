mod build_fallback_view;
mod open_external_map;
mod select_donation;

pub use build_fallback_view::{BuildTrackingFallbackView, PANEL_IMAGE_URL};
pub use open_external_map::{OpenExternalMap, EXTERNAL_MAP_URL};
pub use select_donation::{SelectDonation, SelectDonationError};
