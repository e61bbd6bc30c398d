mod opener;
mod selection;

pub use opener::OpenerLink;
pub use selection::{EventSelectionSink, DONATION_SELECTED_EVENT};
